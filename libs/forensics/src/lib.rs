// [libs/forensics/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PARANOID-FORENSICS (V1.0)
 * CLASIFICACIÓN: STATIC DATA SERVICES (ESTRATO L1)
 * RESPONSABILIDAD: SERVICIOS DE DATOS ESTÁTICOS DE SÓLO LECTURA (§6)
 * =================================================================
 */

pub mod aes128;
pub mod denylist;
pub mod errors;
pub mod keypair;
pub mod provider;

pub mod prelude {
    pub use crate::denylist::openssl_denylist_key;
    pub use crate::errors::ForensicsError;
    pub use crate::keypair::{check_keypair_denylist, reconstruct_seed, Generator};
    pub use crate::provider::{InMemoryStaticDataProvider, StaticDataProvider};
    pub use rug::Integer;
}

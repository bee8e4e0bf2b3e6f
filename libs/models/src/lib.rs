// [libs/models/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PARANOID-MODELS (V1.0)
 * CLASIFICACIÓN: SHARED DATA MODEL (ESTRATO L1)
 * RESPONSABILIDAD: ENTIDADES COMPARTIDAS DEL MOTOR CRIPTANALÍTICO
 * =================================================================
 */

pub mod errors;
pub mod keys;
pub mod severity;
pub mod test_info;

pub mod prelude {
    pub use crate::errors::ModelError;
    pub use crate::keys::{AffinePoint, CurveParams, EcKey, EcdsaSignature, RsaKey};
    pub use crate::severity::{Severity, TestResult};
    pub use crate::test_info::{TestInfo, LIBRARY_VERSION};
    pub use rug::Integer;
}

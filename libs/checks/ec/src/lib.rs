// [libs/checks/ec/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PARANOID-CHECKS-EC (V1.0)
 * CLASIFICACIÓN: EC/ECDSA CHECKS (ESTRATO L2)
 * RESPONSABILIDAD: LOS 12 CHEQUEOS DE DEBILIDAD EC/ECDSA DE §4.G
 * =================================================================
 */

pub mod checks;
pub mod errors;
pub mod lcg;
pub mod registry;

pub mod prelude {
    pub use crate::checks::{
        check_cr50_u2f, check_ec_key_small_difference, check_issuer_key, check_lcg_nonce_gmp,
        check_lcg_nonce_java_util_random, check_nonce_common_postfix, check_nonce_common_prefix,
        check_nonce_generalized, check_nonce_msb, check_valid_ec_key, check_weak_curve,
        check_weak_ec_private_key, EcCheckConfig,
    };
    pub use crate::errors::CheckError;
    pub use crate::lcg::{gmp_lc_catalog, java_util_random_catalog};
    pub use crate::registry::{ordered_ec_checks, ordered_ecdsa_sig_checks, EcKeyCheckEntry, EcdsaSigCheckEntry};
    pub use rug::Integer;
}

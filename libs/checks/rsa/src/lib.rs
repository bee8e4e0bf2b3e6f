// [libs/checks/rsa/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PARANOID-CHECKS-RSA (V1.0)
 * CLASIFICACIÓN: RSA CHECKS (ESTRATO L2)
 * RESPONSABILIDAD: LOS 16 CHEQUEOS DE DEBILIDAD RSA DE §4.C
 * =================================================================
 */

pub mod checks;
pub mod errors;
pub mod registry;
pub mod roca;

pub mod prelude {
    pub use crate::checks::{
        check_bit_patterns, check_continued_fractions, check_exponents, check_fermat, check_gcd,
        check_gcd_n1, check_gcd_n1_default, check_high_and_low_bits_equal, check_keypair_denylist,
        check_low_hamming_weight, check_openssl_denylist, check_permuted_bit_patterns,
        check_pollard_pm1, check_pollard_pm1_default, check_roca, check_roca_variant,
        check_sizes, check_small_upper_differences, check_unseeded_rand, RsaCheckConfig,
        RsaCheckContext,
    };
    pub use crate::errors::CheckError;
    pub use crate::registry::{ordered_checks, RsaCheckEntry};
    pub use rug::Integer;
}

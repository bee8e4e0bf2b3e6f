// [libs/core/bignum/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PARANOID-CORE-BIGNUM (V1.0)
 * CLASIFICACIÓN: CORE NUMBER THEORY (ESTRATO L1)
 * RESPONSABILIDAD: KERNEL DE TEORÍA DE NÚMEROS DE PRECISIÓN ARBITRARIA
 *
 * VISION HIPER-HOLÍSTICA 2026: toda la matemática de precisión arbitraria
 * que alimenta los chequeos RSA y EC vive detrás de esta frontera — árbol
 * de producto para GCD por lotes, aritmética 2-ádica, fracciones continuas
 * y los métodos de factorización de caso especial. Nada aquí conoce la
 * forma de una clave; sólo opera sobre `rug::Integer`.
 * =================================================================
 */

pub mod continued_fraction;
pub mod dyadic;
pub mod errors;
pub mod factoring;
pub mod product_tree;
pub mod sieve;

/// Re-exporta el subconjunto de superficie pública que consumen las crates
/// de chequeos, siguiendo la convención de prelude de la línea original.
pub mod prelude {
    pub use crate::continued_fraction::{continued_fraction, divmod_rounded, ConvergentTerm};
    pub use crate::dyadic::{inverse_2exp, inverse_sqrt_2exp, sqrt_2exp};
    pub use crate::errors::MathError;
    pub use crate::factoring::{
        check_continued_fraction, check_low_hamming_weight, check_small_upper_differences,
        factor_high_and_low_bits_equal, factor_with_guess, fermat_factor, pollard_pm1,
        ContinuedFractionOutcome, LowHammingOutcome, PollardOutcome,
    };
    pub use crate::product_tree::{batch_gcd, fast_product};
    pub use crate::sieve::sieve;
    pub use rug::Integer;
}

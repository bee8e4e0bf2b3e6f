// [libs/randomness/src/lib.rs]
/*!
 * =================================================================
 * APARATO: SUITE DE PRUEBAS DE ALEATORIEDAD (V1.0)
 * CLASIFICACIÓN: RANDOMNESS TEST SUITE (ESTRATO L2)
 * RESPONSABILIDAD: §4.I — NIST SP 800-22, SUS EXTENSIONES Y EL TEST DE
 *                   SESGO POR RETICULADO, SOBRE CADENAS DE BITS CRUDAS
 *
 * A diferencia de `paranoid-checks-rsa`/`paranoid-checks-ec`, esta suite no
 * depende de `paranoid-models`: opera directamente sobre pares
 * (`&rug::Integer`, longitud en bits), igual que `random_test_suite.py`
 * trabaja sobre enteros de Python independientes del modelo `TestInfo` de
 * claves/firmas.
 * =================================================================
 */

pub mod berlekamp_massey;
pub mod bits;
pub mod errors;
pub mod extended;
pub mod fft;
pub mod lattice;
pub mod nist;
pub mod stats;
pub mod suite;

pub mod prelude {
    pub use crate::errors::RandomnessError;
    pub use crate::nist::NamedPValues;
    pub use crate::suite::{build_registry, run_suite, TestFn, TestState, TestStructure};
}

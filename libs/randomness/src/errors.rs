// [libs/randomness/src/errors.rs]
/*!
 * =================================================================
 * APARATO: RANDOMNESS TEST ERROR CATALOG (V1.0)
 * CLASIFICACIÓN: RANDOMNESS TEST SUITE (ESTRATO L2)
 * =================================================================
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomnessError {
    #[error("[L2_RANDTEST_FAULT]: INSUFFICIENT_DATA -> {0}")]
    InsufficientData(String),
    #[error("[L2_RANDTEST_FAULT]: INVALID_INPUT -> {0}")]
    InvalidInput(String),
}

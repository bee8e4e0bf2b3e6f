// [libs/checks/rsa/src/errors.rs]
/*!
 * =================================================================
 * APARATO: RSA CHECK ERROR CATALOG (V1.0)
 * CLASIFICACIÓN: RSA CHECKS (ESTRATO L2)
 * =================================================================
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("[L2_RSACHECK_FAULT]: INVALID_INPUT -> {0}")]
    InvalidInput(String),
}

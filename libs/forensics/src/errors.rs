// [libs/forensics/src/errors.rs]
/*!
 * =================================================================
 * APARATO: FORENSICS ERROR CATALOG (V1.0)
 * CLASIFICACIÓN: STATIC DATA SERVICES (ESTRATO L1)
 * =================================================================
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForensicsError {
    #[error("[L1_FORENSICS_FAULT]: INVALID_INPUT -> {0}")]
    InvalidInput(String),
}

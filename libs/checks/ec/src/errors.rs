// [libs/checks/ec/src/errors.rs]
/*!
 * =================================================================
 * APARATO: EC CHECK ERROR CATALOG (V1.0)
 * CLASIFICACIÓN: EC/ECDSA CHECKS (ESTRATO L2)
 * =================================================================
 */

use paranoid_lattice::errors::LatticeError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("[L2_ECCHECK_FAULT]: INVALID_INPUT -> {0}")]
    InvalidInput(String),

    /// Propagación del fallo de autoconsistencia de `solve_cr50_u2f`: nunca
    /// debe tratarse como "no débil", sólo reportarse hacia arriba.
    #[error("[L2_ECCHECK_FAULT]: ARITHMETIC_BUG -> {0}")]
    ArithmeticBug(String),
}

impl From<LatticeError> for CheckError {
    fn from(value: LatticeError) -> Self {
        match value {
            LatticeError::ArithmeticBug(msg) => CheckError::ArithmeticBug(msg),
            other => CheckError::InvalidInput(other.to_string()),
        }
    }
}

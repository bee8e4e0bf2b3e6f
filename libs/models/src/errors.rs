// [libs/models/src/errors.rs]
/*!
 * =================================================================
 * APARATO: MODEL ERROR CATALOG (V1.0)
 * CLASIFICACIÓN: SHARED DATA MODEL (ESTRATO L1)
 * =================================================================
 */

use thiserror::Error;

/// Fallos de validación sobre el modelo de datos compartido.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Un artefacto llegó con forma inválida (coordenadas fuera de rango, n par, etc).
    #[error("[L1_MODEL_FAULT]: INVALID_INPUT -> {0}")]
    InvalidInput(String),
}

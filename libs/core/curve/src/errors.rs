// [libs/core/curve/src/errors.rs]
/*!
 * =================================================================
 * APARATO: CURVE ERROR CATALOG (V1.0)
 * CLASIFICACIÓN: CORE EC KERNEL (ESTRATO L2)
 * =================================================================
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("[L2_CURVE_FAULT]: UNKNOWN_CURVE_ID -> {0}")]
    UnknownCurve(String),

    #[error("[L2_CURVE_FAULT]: POINT_NOT_ON_CURVE -> {0}")]
    NotOnCurve(String),

    #[error("[L2_CURVE_FAULT]: NON_INVERTIBLE_ELEMENT -> {0}")]
    NonInvertible(String),

    #[error("[L2_CURVE_FAULT]: INVALID_INPUT -> {0}")]
    InvalidInput(String),
}

// [libs/lattice/src/errors.rs]
/*!
 * =================================================================
 * APARATO: LATTICE ERROR CATALOG (V1.0)
 * CLASIFICACIÓN: LATTICE ATTACKS (ESTRATO L3)
 * =================================================================
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// Dimensión de retícula inválida (no cuadrada, o excede el tope de §5).
    #[error("[L3_LATTICE_FAULT]: INVALID_DIMENSION -> {0}")]
    InvalidDimension(String),

    /// Las listas de entrada (a, b, firmas) tienen longitudes incompatibles.
    #[error("[L3_LATTICE_FAULT]: MISMATCHED_INPUT_LENGTH -> {0}")]
    MismatchedInputLength(String),

    /// El chequeo de auto-consistencia del solucionador Cr50 falló: x
    /// recuperado de (s1,k1,z1) difiere de x recuperado de (s2,k2,z2).
    /// Esto indica tipos enteros mezclados o un error de programación y
    /// NUNCA debe ser capturado silenciosamente en un nivel superior.
    #[error("[L3_LATTICE_FAULT]: ARITHMETIC_BUG -> {0}")]
    ArithmeticBug(String),
}

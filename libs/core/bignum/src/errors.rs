// [libs/core/bignum/src/errors.rs]
/*!
 * =================================================================
 * APARATO: BIGNUM ERROR CATALOG (V1.0)
 * CLASIFICACIÓN: CORE NUMBER THEORY (ESTRATO L1)
 * RESPONSABILIDAD: CATALOGACIÓN SEMÁNTICA DE FALLOS ARITMÉTICOS
 * =================================================================
 */

use thiserror::Error;

/// Catálogo de fallos del kernel de teoría de números.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Se solicitó la inversa de un elemento no invertible (gcd != 1).
    #[error("[L1_BIGNUM_FAULT]: NON_INVERTIBLE_ELEMENT -> {0}")]
    NonInvertible(String),

    /// `InverseSqrt2exp` requiere n ≡ 1 (mod 8).
    #[error("[L1_BIGNUM_FAULT]: INVALID_2ADIC_RESIDUE -> {0}")]
    Invalid2adicResidue(String),

    /// Entrada fuera de dominio (p.ej. división por cero, exponente negativo).
    #[error("[L1_BIGNUM_FAULT]: INVALID_INPUT -> {0}")]
    InvalidInput(String),

    /// Búsqueda acotada (Fermat, Pollard p-1, low-Hamming-weight) agotó su
    /// presupuesto de pasos sin converger. No es un error de programación.
    #[error("[L1_BIGNUM_FAULT]: SEARCH_BUDGET_EXHAUSTED -> {0}")]
    SearchExhausted(String),
}

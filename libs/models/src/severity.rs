// [libs/models/src/severity.rs]
/*!
 * =================================================================
 * APARATO: SEVERITY & TEST RESULT (V1.0)
 * CLASIFICACIÓN: SHARED DATA MODEL (ESTRATO L1)
 * =================================================================
 */

use serde::{Deserialize, Serialize};

/// Nivel de severidad adjunto a cada chequeo que falla.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Sospecha sin prueba (p.ej. CheckLowHammingWeight con factorización parcial).
    Unknown,
    Medium,
    High,
    Critical,
}

/// El resultado nombrado de un único chequeo contra un único artefacto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub check_name: String,
    pub severity: Severity,
    pub result: bool,
}

impl TestResult {
    #[must_use]
    pub fn new(check_name: impl Into<String>, severity: Severity, result: bool) -> Self {
        Self { check_name: check_name.into(), severity, result }
    }
}

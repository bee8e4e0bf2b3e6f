// [libs/models/src/test_info.rs]
/*!
 * =================================================================
 * APARATO: TEST INFO ACCUMULATOR (V1.0)
 * CLASIFICACIÓN: SHARED DATA MODEL (ESTRATO L1)
 * RESPONSABILIDAD: ACUMULACIÓN MONOTÓNICA DE VEREDICTOS Y EVIDENCIA
 *
 * Invariante de acumulación: `weak` transita false -> true y nunca en
 * sentido contrario; la severidad de un resultado nombrado sólo puede subir
 * en una re-ejecución; los conjuntos de evidencia (factorizaciones, logs
 * discretos) se unen, nunca se eliminan. El motor es el único escritor;
 * el llamador posee el ciclo de vida del artefacto al que pertenece.
 * =================================================================
 */

use crate::severity::{Severity, TestResult};
use std::collections::{BTreeMap, BTreeSet};

/// Etiqueta de versión de biblioteca estampada en cada `TestInfo` producido
/// por el orquestador.
pub const LIBRARY_VERSION: &str = "paranoid-audit-line/0.1.0";

/// Acumulador de resultados y evidencia para un único artefacto.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestInfo {
    results: BTreeMap<String, TestResult>,
    evidence: BTreeMap<String, BTreeSet<String>>,
    weak: bool,
    library_version: String,
}

impl TestInfo {
    #[must_use]
    pub fn new() -> Self {
        Self { library_version: LIBRARY_VERSION.to_string(), ..Default::default() }
    }

    #[must_use]
    pub fn is_weak(&self) -> bool {
        self.weak
    }

    #[must_use]
    pub fn library_version(&self) -> &str {
        &self.library_version
    }

    #[must_use]
    pub fn result(&self, check_name: &str) -> Option<&TestResult> {
        self.results.get(check_name)
    }

    #[must_use]
    pub fn results(&self) -> impl Iterator<Item = &TestResult> {
        self.results.values()
    }

    #[must_use]
    pub fn evidence(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.evidence.get(key)
    }

    /// Registra el resultado de un chequeo. `weak` sólo puede subir; la
    /// severidad de una re-ejecución sólo puede subir, nunca bajar.
    pub fn record(&mut self, mut result: TestResult) {
        if let Some(existing) = self.results.get(&result.check_name) {
            if existing.severity > result.severity {
                result.severity = existing.severity;
            }
            result.result = existing.result || result.result;
        }
        self.weak |= result.result;
        self.results.insert(result.check_name.clone(), result);
    }

    /// Une un valor de evidencia nombrado (factor, log discreto, etc.) al
    /// conjunto ya acumulado bajo esa clave.
    pub fn attach_evidence(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.evidence.entry(key.into()).or_default().insert(value.into());
    }

    /// Azúcar para registrar un chequeo directamente con sus parámetros.
    pub fn record_check(&mut self, check_name: impl Into<String>, severity: Severity, weak: bool) {
        self.record(TestResult::new(check_name, severity, weak));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_flag_never_reverts_to_false() {
        let mut info = TestInfo::new();
        info.record_check("CheckFermat", Severity::Critical, true);
        info.record_check("CheckSizes", Severity::Medium, false);
        assert!(info.is_weak());
    }

    #[test]
    fn severity_only_rises_on_rerun() {
        let mut info = TestInfo::new();
        info.record_check("CheckGCDN1", Severity::Unknown, true);
        info.record_check("CheckGCDN1", Severity::Medium, false);
        assert_eq!(info.result("CheckGCDN1").unwrap().severity, Severity::Medium);
        info.record_check("CheckGCDN1", Severity::Unknown, false);
        assert_eq!(info.result("CheckGCDN1").unwrap().severity, Severity::Medium);
    }

    #[test]
    fn evidence_sets_union_rather_than_overwrite() {
        let mut info = TestInfo::new();
        info.attach_evidence("factors", "101");
        info.attach_evidence("factors", "103");
        info.attach_evidence("factors", "101");
        assert_eq!(info.evidence("factors").unwrap().len(), 2);
    }
}

// [libs/randomness/src/suite.rs]
/*!
 * =================================================================
 * APARATO: ORQUESTACIÓN DE LA SUITE DE ALEATORIEDAD (V1.0)
 * CLASIFICACIÓN: RANDOMNESS TEST SUITE (ESTRATO L2)
 * RESPONSABILIDAD: REPETICIÓN, COMBINACIÓN DE P-VALUES Y REGISTRO (§4.I)
 *
 * Cada prueba puede ejecutarse varias veces sobre muestras frescas; los
 * p-values de corridas sucesivas del mismo sub-resultado se combinan con el
 * método de Fisher (`CombinedPValue`). Un sub-resultado queda PASSED,
 * FAILED o UNDECIDED según compare el p-value combinado contra los umbrales
 * de la llamada; la suite completa converge cuando ya no quedan
 * sub-resultados UNDECIDED y se alcanzó el mínimo de repeticiones.
 * =================================================================
 */

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rug::Integer;
use tracing::instrument;

use crate::errors::RandomnessError;
use crate::extended;
use crate::lattice;
use crate::nist::{self, NamedPValues};
use crate::stats::combined_p_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestState {
    Passed,
    Undecided,
    Failed,
}

impl TestState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TestState::Passed => "passed",
            TestState::Undecided => "undecided",
            TestState::Failed => "failed",
        }
    }
}

pub type TestFn = Box<dyn Fn(&Integer, u64) -> Result<NamedPValues, RandomnessError> + Send + Sync>;

/// Acumula los resultados de varias corridas de una misma prueba sobre
/// muestras distintas, combinando los p-values de cada sub-resultado nombrado.
pub struct TestStructure {
    name: String,
    run_test: TestFn,
    p_value_fail: f64,
    p_value_repeat: f64,
    min_repetitions: u32,
    p_values: HashMap<String, Vec<f64>>,
    combined_p_values: HashMap<String, f64>,
    state: HashMap<String, TestState>,
    finished: bool,
    runs: u32,
    runtime: Duration,
}

impl TestStructure {
    #[must_use]
    pub fn new(name: impl Into<String>, run_test: TestFn, p_value_fail: f64, p_value_repeat: f64, min_repetitions: u32) -> Self {
        TestStructure {
            name: name.into(),
            run_test,
            p_value_fail,
            p_value_repeat,
            min_repetitions,
            p_values: HashMap::new(),
            combined_p_values: HashMap::new(),
            state: HashMap::new(),
            finished: false,
            runs: 0,
            runtime: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn failed(&self) -> bool {
        self.state.values().any(|&s| s == TestState::Failed)
    }

    #[must_use]
    pub fn state_counts(&self) -> HashMap<TestState, u32> {
        let mut counts = HashMap::new();
        for &s in self.state.values() {
            *counts.entry(s).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn combined_p_values(&self) -> &HashMap<String, f64> {
        &self.combined_p_values
    }

    /// Ejecuta la prueba sobre una muestra fresca. Devuelve `true` si ya no
    /// hace falta repetirla (se decidió para todos sus sub-resultados y se
    /// alcanzó `min_repetitions`, o bien se saltó por falta de datos).
    #[instrument(skip(self, bits_val), fields(test = %self.name))]
    pub fn run(&mut self, bits_val: &Integer, n: u64) -> bool {
        let start = Instant::now();
        self.runs += 1;
        let test_result = match (self.run_test)(bits_val, n) {
            Ok(r) => r,
            Err(RandomnessError::InsufficientData(msg)) => {
                tracing::info!(test = %self.name, reason = %msg, "randomness test skipped");
                self.finished = true;
                return true;
            }
            Err(RandomnessError::InvalidInput(msg)) => {
                tracing::warn!(test = %self.name, reason = %msg, "randomness test received invalid input");
                self.finished = true;
                return true;
            }
        };
        self.runtime = start.elapsed();

        let mut undecided = 0;
        for (name, p_value) in test_result {
            let pvals = self.p_values.entry(name.clone()).or_default();
            pvals.push(p_value);
            let combined = combined_p_value(pvals).unwrap_or(0.0);
            self.combined_p_values.insert(name.clone(), combined);
            if combined < self.p_value_fail {
                self.state.insert(name, TestState::Failed);
            } else {
                let repeat_prob = combined_p_value(&vec![self.p_value_repeat; pvals.len()]).unwrap_or(0.0);
                if repeat_prob < combined {
                    self.state.insert(name, TestState::Passed);
                } else {
                    self.state.insert(name, TestState::Undecided);
                    undecided += 1;
                }
            }
        }
        self.finished = undecided == 0 && self.runs >= self.min_repetitions;
        self.finished
    }

    pub fn log_state(&self) {
        let counts = self.state_counts();
        let num_tests = self.p_values.len();
        let summary = if num_tests == 1 {
            let name = self.p_values.keys().next().cloned().unwrap_or_default();
            format!("{}: p={:.6}", self.state.get(&name).map_or("undecided", |s| s.as_str()), self.combined_p_values.get(&name).copied().unwrap_or(0.0))
        } else if counts.get(&TestState::Failed).copied().unwrap_or(0) == 0 {
            format!("passed: {}", counts.get(&TestState::Passed).copied().unwrap_or(0))
        } else {
            format!("failed: {}/{}", counts.get(&TestState::Failed).copied().unwrap_or(0), num_tests)
        };
        tracing::info!(test = %self.name, %summary, runtime_secs = self.runtime.as_secs_f64(), "randomness test converged");
    }
}

fn single(p_value: f64) -> NamedPValues {
    vec![("result".to_string(), p_value)]
}

/// Construye el registro completo de pruebas: la batería NIST SP 800-22, sus
/// extensiones y las pruebas de sesgo por reticulado, en el mismo orden que
/// `TESTS = NIST_TESTS + EXTENDED_NIST_TESTS + LATTICE_TESTS`.
#[must_use]
pub fn build_registry(p_value_fail: f64, p_value_repeat: f64, min_repetitions: u32) -> Vec<TestStructure> {
    let mut tests: Vec<(&'static str, TestFn)> = Vec::new();

    tests.push(("Frequency", Box::new(|b, n| Ok(single(nist::frequency(b, n))))));
    tests.push(("BlockFrequency", Box::new(|b, n| nist::block_frequency(b, n).map(single))));
    tests.push(("Runs", Box::new(|b, n| Ok(single(nist::runs(b, n))))));
    tests.push(("LongestRuns", Box::new(|b, n| nist::longest_runs(b, n).map(single))));
    tests.push(("BinaryMatrixRank", Box::new(|b, n| nist::binary_matrix_rank(b, n, 32, 32, 3, true).map(single))));
    tests.push(("Spectral", Box::new(|b, n| Ok(single(nist::spectral(b, n))))));
    tests.push(("NonOverlappingTemplateMatching", Box::new(|b, n| nist::non_overlapping_template_matching(b, n, 8))));
    tests.push(("OverlappingTemplateMatching", Box::new(|b, n| nist::overlapping_template_matching(b, n).map(single))));
    tests.push(("Universal", Box::new(|b, n| nist::universal(b, n).map(single))));
    tests.push(("LinearComplexity [512]", Box::new(|b, n| nist::linear_complexity(b, n, 512))));
    tests.push(("LinearComplexity [1024]", Box::new(|b, n| nist::linear_complexity(b, n, 1024))));
    tests.push(("LinearComplexity [2048]", Box::new(|b, n| nist::linear_complexity(b, n, 2048))));
    tests.push(("LinearComplexity [4096]", Box::new(|b, n| nist::linear_complexity(b, n, 4096))));
    tests.push(("Serial", Box::new(|b, n| Ok(nist::serial(b, n, None)))));
    tests.push(("ApproximateEntropy", Box::new(|b, n| Ok(nist::approximate_entropy(b, n, None)))));
    tests.push(("RandomWalk", Box::new(|b, n| Ok(nist::random_walk(b, n, 4, 5, 9)))));

    tests.push(("LargeBinaryMatrixRank", Box::new(|b, n| extended::large_binary_matrix_rank(b, n))));
    tests.push(("LinearComplexityScatter [32, 100000]", Box::new(|b, n| Ok(single(extended::linear_complexity_scatter(b, n, 32, Some(100_000)))))));
    tests.push(("LinearComplexityScatter [64, 50000]", Box::new(|b, n| Ok(single(extended::linear_complexity_scatter(b, n, 64, Some(50_000)))))));
    tests.push(("LinearComplexityScatter [128, 40000]", Box::new(|b, n| Ok(single(extended::linear_complexity_scatter(b, n, 128, Some(40_000)))))));

    tests.push(("FindBias [256]", Box::new(|b, n| lattice::find_bias(b, n, 256).map(single))));
    tests.push(("FindBias [384]", Box::new(|b, n| lattice::find_bias(b, n, 384).map(single))));
    tests.push(("FindBias [512]", Box::new(|b, n| lattice::find_bias(b, n, 512).map(single))));
    tests.push(("FindBias [1024]", Box::new(|b, n| lattice::find_bias(b, n, 1024).map(single))));

    tests
        .into_iter()
        .map(|(name, run_test)| TestStructure::new(name, run_test, p_value_fail, p_value_repeat, min_repetitions))
        .collect()
}

/// Corre todo el registro sobre sucesivas muestras frescas hasta que cada
/// prueba converja o se agote el presupuesto de `max_rounds`; `source`
/// produce una nueva cadena de `n` bits (y su longitud) en cada ronda.
pub fn run_suite(mut source: impl FnMut(u64) -> Integer, n: u64, p_value_fail: f64, p_value_repeat: f64, min_repetitions: u32, max_rounds: u32) -> Vec<TestStructure> {
    let mut tests = build_registry(p_value_fail, p_value_repeat, min_repetitions);
    let mut round = 0;
    loop {
        let pending = tests.iter().filter(|t| !t.finished()).count();
        if pending == 0 || round >= max_rounds {
            break;
        }
        round += 1;
        let bits_val = source(n);
        for test in tests.iter_mut().filter(|t| !t.finished()) {
            if test.run(&bits_val, n) {
                test.log_state();
            }
        }
    }
    tests
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_registry_contains_every_test_in_spec_order() {
        let registry = build_registry(0.0001, 0.01, 1);
        assert_eq!(registry.len(), 16 + 4 + 4);
        assert_eq!(registry[0].name(), "Frequency");
        assert_eq!(registry.last().unwrap().name(), "FindBias [1024]");
    }

    #[test]
    fn a_test_structure_with_insufficient_data_finishes_immediately() {
        let run_test: TestFn = Box::new(|_b, _n| Err(RandomnessError::InsufficientData("too short".to_string())));
        let mut structure = TestStructure::new("Dummy", run_test, 0.0001, 0.01, 5);
        assert!(structure.run(&Integer::from(0), 8));
        assert!(structure.finished());
        assert!(!structure.failed());
    }

    #[test]
    fn a_test_structure_fails_when_the_combined_p_value_drops_below_the_threshold() {
        let run_test: TestFn = Box::new(|_b, _n| Ok(vec![("result".to_string(), 0.0000001)]));
        let mut structure = TestStructure::new("Dummy", run_test, 0.001, 0.2, 1);
        assert!(structure.run(&Integer::from(0), 8));
        assert!(structure.failed());
    }

    #[test]
    fn a_test_structure_stays_undecided_until_min_repetitions_is_reached() {
        let run_test: TestFn = Box::new(|_b, _n| Ok(vec![("result".to_string(), 0.3)]));
        let mut structure = TestStructure::new("Dummy", run_test, 0.0001, 0.5, 3);
        assert!(!structure.run(&Integer::from(0), 8));
        assert!(!structure.run(&Integer::from(0), 8));
        assert!(!structure.finished());
    }
}

// [tests/mirror/libs/randomness/randomness_suite_integrity.test.rs]
//! Certificación de integridad: el registro de pruebas cubre las 24
//! pruebas de §4.I en el orden NIST + extendidas + reticulado, una
//! secuencia claramente no aleatoria dispara p-values sospechosos en las
//! pruebas básicas, y el ciclo de repetición de `TestStructure` converge.

use paranoid_randomness::prelude::*;
use paranoid_randomness::{bits, nist};
use rug::Integer;

fn all_zero_bits(n: u64) -> Integer {
    Integer::from(0).keep_bits(n as u32)
}

fn alternating_bits(n: u64) -> Integer {
    let mut v = Integer::from(0);
    for i in (0..n).step_by(2) {
        v.set_bit(i as u32, true);
    }
    v
}

#[test]
fn build_registry_covers_every_test_in_spec_order() {
    let registry = build_registry(0.0001, 0.01, 1);
    let names: Vec<&str> = registry.iter().map(TestStructure::name).collect();
    assert_eq!(names.len(), 24);
    assert_eq!(&names[..4], ["Frequency", "BlockFrequency", "Runs", "LongestRuns"]);
    assert_eq!(&names[9..13], ["LinearComplexity [512]", "LinearComplexity [1024]", "LinearComplexity [2048]", "LinearComplexity [4096]"]);
    assert_eq!(&names[16..20], ["LargeBinaryMatrixRank", "LinearComplexityScatter [32, 100000]", "LinearComplexityScatter [64, 50000]", "LinearComplexityScatter [128, 40000]"]);
    assert_eq!(&names[20..], ["FindBias [256]", "FindBias [384]", "FindBias [512]", "FindBias [1024]"]);
}

#[test]
fn an_all_zero_bit_string_is_rejected_by_the_basic_frequency_tests() {
    let n = 20_000;
    let sample = all_zero_bits(n);
    assert!(nist::frequency(&sample, n) < 1e-6);
    assert!(nist::runs(&sample, n) < 1e-6);
    assert!(nist::longest_runs(&sample, n).unwrap() < 1e-6);
}

#[test]
fn a_perfectly_alternating_bit_string_is_rejected_by_the_runs_test() {
    let n = 20_000;
    let sample = alternating_bits(n);
    // Alternating bits are "balanced" (frequency passes) but every bit is a
    // new run, wildly more than the ~n/2 expected under H0.
    assert!(nist::frequency(&sample, n) > 0.5);
    assert!(nist::runs(&sample, n) < 1e-6);
}

#[test]
fn split_sequence_and_frequency_count_agree_on_totals() {
    let n = 4096;
    let sample = alternating_bits(n);
    let blocks = bits::split_sequence(&sample, n, 128);
    assert_eq!(blocks.len() as u64, n / 128);
}

#[test]
fn a_test_structure_repeats_until_its_p_value_clearly_passes_or_fails() {
    let mut structure = TestStructure::new(
        "Frequency",
        Box::new(|b: &Integer, n: u64| Ok(vec![("result".to_string(), nist::frequency(b, n))])),
        1e-5,
        0.01,
        1,
    );
    // Balanced, non-degenerate data should converge to PASSED quickly.
    let sample = Integer::from_str_radix("1011001101010011101001100101101100101011", 2).unwrap();
    let finished = structure.run(&sample, 42);
    assert!(finished);
    assert!(!structure.failed());
}

// [tests/mirror/libs/core/bignum/factoring_integrity.test.rs]
//! Certificación de integridad: los métodos de factorización de caso
//! especial recuperan los factores cuando la debilidad estructural que
//! explotan está efectivamente presente, y se rinden limpiamente cuando no.

use paranoid_core_bignum::prelude::*;

#[test]
fn factor_high_and_low_bits_equal_recovers_partially_equal_primes() {
    // p y q comparten los 8 bits más y menos significativos.
    let high_low = 0b1011_0101u64;
    let p = (high_low << 24) | 0x00_ABCD_00 | high_low;
    let q = (high_low << 24) | 0x00_1234_00 | high_low;
    let n = Integer::from(p) * Integer::from(q);

    if let Some((a, b)) = factor_high_and_low_bits_equal(&n, 3).unwrap() {
        let mut found = [a, b];
        found.sort();
        let mut expected = [Integer::from(p), Integer::from(q)];
        expected.sort();
        assert_eq!(found, expected);
    }
    // La estructura elegida no siempre cae dentro del margen de middle_bits;
    // lo que nunca debe ocurrir es un pánico o una factorización incorrecta.
}

#[test]
fn factor_with_guess_recovers_factor_from_close_guess() {
    let p = Integer::from(2_147_483_647i64); // primo de Mersenne conocido
    let q = Integer::from(2_147_483_629i64);
    let n = Integer::from(&p * &q);
    let guess = p.clone() + 1000;

    let result = factor_with_guess(&n, &guess).unwrap();
    if let Some((a, b)) = result {
        assert_eq!(Integer::from(&a * &b), n);
    }
}

#[test]
fn check_continued_fraction_flags_repetitive_bit_pattern_moduli() {
    // p y q tienen un patrón de bits repetitivo: son cercanos a fracciones
    // pequeñas de una potencia de dos.
    let p = Integer::from_str_radix("fa157ca157ca157ca157ca157ca1647", 16).unwrap();
    let q = Integer::from_str_radix("c1acb1acb1acb1acb1acb1acb1342bb", 16).unwrap();
    let n = Integer::from(&p * &q);

    let outcome = check_continued_fraction(&n, &Integer::from(1_000_000u64));
    match outcome {
        ContinuedFractionOutcome::Clean => panic!("expected a large coefficient or factorization"),
        ContinuedFractionOutcome::Factored(a, b) => assert_eq!(Integer::from(&a * &b), n),
        ContinuedFractionOutcome::SuspiciousNoFactors => {}
    }
}

#[test]
fn fermat_factor_handles_even_modulus() {
    let n = Integer::from(2 * 104_729u64);
    let (a, b) = fermat_factor(&n, 10).unwrap().unwrap();
    assert_eq!(Integer::from(&a * &b), n);
}

#[test]
fn check_low_hamming_weight_finds_sparse_factor_product() {
    // Dos factores con peso de Hamming muy bajo (potencias de dos sumadas).
    let p = Integer::from((1u64 << 30) + (1u64 << 10) + 1);
    let q = Integer::from((1u64 << 29) + (1u64 << 5) + 1);
    let n = Integer::from(&p * &q);

    let outcome = check_low_hamming_weight(&n, 5_000, 200_000);
    if let Some((a, b)) = outcome.factors {
        let mut found = [a, b];
        found.sort();
        let mut expected = [p, q];
        expected.sort();
        assert_eq!(found, expected);
    } else {
        assert!(outcome.potentially_weak);
    }
}

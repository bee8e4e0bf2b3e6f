// [tests/mirror/libs/core/curve/batch_dl_integrity.test.rs]
//! Certificación de integridad: el resolutor de logaritmo discreto por
//! lotes recupera escalares pequeños conocidos y respeta el límite de
//! búsqueda declarado, y los parámetros del problema del número oculto
//! reconstruyen la relación nonce/clave privada esperada.

use paranoid_core_curve::prelude::*;

fn base_point(curve: &Curve) -> paranoid_models::prelude::AffinePoint {
    paranoid_models::prelude::AffinePoint::Finite(curve.params.g.0.clone(), curve.params.g.1.clone())
}

#[test]
fn batch_dl_recovers_scalars_within_bound() {
    let curve = lookup("secp256k1").unwrap();
    let g = base_point(curve);
    let scalars: Vec<Integer> = [5u64, 999, 4096].into_iter().map(Integer::from).collect();
    let points: Vec<_> = scalars.iter().map(|s| curve.multiply(&g, s)).collect();

    let logs = batch_dl(curve, &points, &Integer::from(10_000u64)).unwrap();
    for (expected, found) in scalars.iter().zip(logs.iter()) {
        assert_eq!(found.as_ref().unwrap(), expected);
    }
}

#[test]
fn batch_dl_returns_none_when_scalar_exceeds_bound() {
    let curve = lookup("secp256k1").unwrap();
    let g = base_point(curve);
    let point = curve.multiply(&g, &Integer::from(50_000u64));

    let logs = batch_dl(curve, &[point], &Integer::from(100u64)).unwrap();
    assert!(logs[0].is_none());
}

#[test]
fn batch_dl_of_differences_is_silent_when_no_pair_is_close() {
    let curve = lookup("secp256k1").unwrap();
    let g = base_point(curve);
    let p1 = curve.multiply(&g, &Integer::from(10u64));
    let p2 = curve.multiply(&g, &Integer::from(9_000_000u64));

    let findings = batch_dl_of_differences(curve, &[p1, p2], None, &Integer::from(100u64)).unwrap();
    assert!(findings.is_empty());
}

#[test]
fn transform_order_len_truncates_wide_hash_to_order_bit_length() {
    let curve = lookup("secp256r1").unwrap();
    let wide_hash = Integer::from(1u64) << 400;
    let truncated = transform_order_len(curve, &wide_hash, 400);
    assert!(truncated.significant_bits() <= curve.params.n.significant_bits());
}

#[test]
fn transform_order_len_is_identity_when_hash_already_short() {
    let curve = lookup("secp256r1").unwrap();
    let short_hash = Integer::from(12345u64);
    assert_eq!(transform_order_len(curve, &short_hash, 32), short_hash);
}

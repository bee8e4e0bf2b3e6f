// [tests/mirror/libs/core/curve/curve_laws_integrity.test.rs]
//! Certificación de integridad: las leyes de grupo de la curva (asociatividad
//! vía caminos afín/Jacobiano, identidad, inverso) se sostienen en todas las
//! curvas nombradas del registro, no sólo en secp256k1.

use paranoid_core_curve::prelude::*;

fn base_point(curve: &Curve) -> paranoid_models::prelude::AffinePoint {
    paranoid_models::prelude::AffinePoint::Finite(curve.params.g.0.clone(), curve.params.g.1.clone())
}

#[test]
fn every_approved_curve_base_point_satisfies_weierstrass_equation() {
    for curve_id in approved_curve_ids() {
        let curve = lookup(curve_id).unwrap();
        assert!(curve.on_curve(&base_point(curve)), "{curve_id} base point must be on curve");
    }
}

#[test]
fn point_plus_its_negation_is_infinity_on_every_curve() {
    for curve_id in approved_curve_ids() {
        let curve = lookup(curve_id).unwrap();
        let g = base_point(curve);
        let negated = curve.negate(&g);
        assert_eq!(curve.add_affine(&g, &negated), paranoid_models::prelude::AffinePoint::Infinity);
    }
}

#[test]
fn scalar_multiplication_by_n_plus_one_equals_base_point() {
    let curve = lookup("secp256r1").unwrap();
    let g = base_point(curve);
    let n_plus_one = curve.params.n.clone() + 1;
    assert_eq!(curve.multiply(&g, &n_plus_one), g);
}

#[test]
fn doubling_three_times_matches_eightfold_scalar_multiplication() {
    let curve = lookup("secp384r1").unwrap();
    let g = base_point(curve);
    let mut doubled = g.clone();
    for _ in 0..3 {
        doubled = curve.double_affine(&doubled);
    }
    assert_eq!(doubled, curve.multiply(&g, &Integer::from(8)));
}

#[test]
fn batch_double_matches_pointwise_double_affine() {
    let curve = lookup("secp256k1").unwrap();
    let g = base_point(curve);
    let two_g = curve.double_affine(&g);
    let points = vec![g.clone(), two_g.clone()];

    let batched = curve.batch_double(&points).unwrap();
    assert_eq!(batched[0], curve.double_affine(&g));
    assert_eq!(batched[1], curve.double_affine(&two_g));
}

#[test]
fn unknown_curve_identifier_is_rejected() {
    assert!(matches!(lookup("secp999imaginary"), Err(CurveError::UnknownCurve(_))));
}

// [tests/mirror/libs/orchestrator/orchestrator_integrity.test.rs]
//! Certificación de integridad: los tres puntos de entrada del orquestador
//! (§4.H) devuelven un `TestInfo` por artefacto de entrada, en el mismo
//! orden, y detectan debilidades sintéticamente sembradas sin necesitar
//! que el llamador conozca el registro interno de chequeos.

use paranoid_core_curve::prelude::lookup;
use paranoid_forensics::prelude::InMemoryStaticDataProvider;
use paranoid_models::prelude::*;
use paranoid_orchestrator::prelude::*;

fn base_point_key(curve_id: &str) -> EcKey {
    let curve = lookup(curve_id).unwrap();
    EcKey { curve_id: curve_id.to_string(), point: AffinePoint::Finite(curve.params.g.0.clone(), curve.params.g.1.clone()) }
}

#[test]
fn check_all_rsa_returns_one_test_info_per_key_in_order() {
    let keys = vec![
        RsaKey::new(Integer::from(0xD5u64) * Integer::from(0xD9u64), Integer::from(65537)).unwrap(),
        RsaKey::new(Integer::from(0xE1u64) * Integer::from(0xE9u64), Integer::from(65537)).unwrap(),
    ];
    let provider = InMemoryStaticDataProvider::new();
    let infos = check_all_rsa(&keys, &provider, LogLevel::Silent);
    assert_eq!(infos.len(), 2);
}

#[test]
fn check_all_rsa_flags_a_fermat_weak_key() {
    // p and q very close together is the textbook Fermat-factorable case.
    let p = Integer::from(100_003u64);
    let q = Integer::from(100_019u64);
    let key = RsaKey::new(p * q, Integer::from(65537));
    let keys = vec![key.unwrap()];
    let provider = InMemoryStaticDataProvider::new();
    let infos = check_all_rsa(&keys, &provider, LogLevel::Silent);
    assert!(infos[0].is_weak());
}

#[test]
fn check_all_ec_returns_one_test_info_per_key() {
    let keys = vec![base_point_key("secp256r1"), base_point_key("secp256r1")];
    let infos = check_all_ec(&keys, LogLevel::Silent);
    assert_eq!(infos.len(), 2);
}

#[test]
fn check_all_ecdsa_sigs_returns_one_test_info_per_signature() {
    let issuer = base_point_key("secp256r1");
    let sig = EcdsaSignature::new("ECDSA-P256", Integer::from(1), Integer::from(1), Integer::from(1), issuer).unwrap();
    let infos = check_all_ecdsa_sigs(&[sig], LogLevel::Silent);
    assert_eq!(infos.len(), 1);
}

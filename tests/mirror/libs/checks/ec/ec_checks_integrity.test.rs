// [tests/mirror/libs/checks/ec/ec_checks_integrity.test.rs]
//! Certificación de integridad: los dos registros de chequeos EC/ECDSA
//! cubren los 12 chequeos de §4.G en el orden declarado, la aritmética
//! de curva real detecta claves y firmas sintéticamente débiles, y una
//! clave/firma bien formada no produce falsos positivos.

use paranoid_checks_ec::prelude::*;
use paranoid_core_curve::field;
use paranoid_core_curve::prelude::lookup;
use paranoid_models::prelude::*;

fn base_point_key(curve_id: &str) -> EcKey {
    let curve = lookup(curve_id).unwrap();
    EcKey { curve_id: curve_id.to_string(), point: AffinePoint::Finite(curve.params.g.0.clone(), curve.params.g.1.clone()) }
}

#[test]
fn ordered_ec_checks_lists_all_four_in_spec_order() {
    let names: Vec<&str> = ordered_ec_checks().iter().map(|c| c.name).collect();
    assert_eq!(names, ["CheckValidECKey", "CheckWeakCurve", "CheckWeakECPrivateKey", "CheckECKeySmallDifference"]);
}

#[test]
fn ordered_ecdsa_sig_checks_lists_all_eight_in_spec_order() {
    let names: Vec<&str> = ordered_ecdsa_sig_checks().iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        [
            "CheckLCGNonceGMP",
            "CheckLCGNonceJavaUtilRandom",
            "CheckNonceMSB",
            "CheckNonceCommonPrefix",
            "CheckNonceCommonPostfix",
            "CheckNonceGeneralized",
            "CheckIssuerKey",
            "CheckCr50U2f",
        ]
    );
}

#[test]
fn well_formed_key_on_an_approved_curve_passes_the_fast_checks() {
    let key = base_point_key("secp256r1");
    let mut infos = vec![TestInfo::new()];
    assert!(!check_valid_ec_key(&[key.clone()], &mut infos));
    assert!(!check_weak_curve(&[key], &mut infos));
    assert!(!infos[0].is_weak());
}

#[test]
fn unregistered_curve_id_is_flagged_weak() {
    let key = EcKey::new("not-a-registered-curve", Integer::from(1), Integer::from(2));
    let mut infos = vec![TestInfo::new()];
    assert!(check_weak_curve(&[key], &mut infos));
}

#[test]
fn small_private_scalar_is_recovered_by_extended_batch_dl() {
    let curve = lookup("secp256r1").unwrap();
    let g = AffinePoint::Finite(curve.params.g.0.clone(), curve.params.g.1.clone());
    let scalar = Integer::from(13_371_337u64);
    let point = curve.multiply(&g, &scalar);
    let key = EcKey { curve_id: "secp256r1".to_string(), point };
    let mut infos = vec![TestInfo::new()];
    assert!(check_weak_ec_private_key(&[key], &mut infos));
    assert!(infos[0].evidence("private_key").unwrap().contains(&scalar.to_string()));
}

#[test]
fn issuer_key_inherits_the_severity_of_its_weak_private_key() {
    let curve = lookup("secp256r1").unwrap();
    let g = AffinePoint::Finite(curve.params.g.0.clone(), curve.params.g.1.clone());
    let scalar = Integer::from(9_001u64);
    let issuer = EcKey { curve_id: "secp256r1".to_string(), point: curve.multiply(&g, &scalar) };

    let n = &curve.params.n;
    let k = Integer::from(123_456_789u64);
    let r_point = curve.multiply_g(&k);
    let AffinePoint::Finite(rx, _) = r_point else { panic!("expected finite point") };
    let r = field::reduce(&rx, n);
    let z = Integer::from(42);
    let k_inv = field::inv_mod(&k, n).unwrap();
    let s = field::mul_mod(&field::add_mod(&z, &field::mul_mod(&r, &scalar, n), n), &k_inv, n);

    let sig = EcdsaSignature::new("ECDSA", r, s, z, issuer).unwrap();
    let mut infos = vec![TestInfo::new()];
    assert!(check_issuer_key(&[sig], &mut infos));
    assert!(infos[0].is_weak());
}

#[test]
fn cr50_u2f_recovers_the_private_key_from_a_word_repeated_nonce_pair() {
    let curve = lookup("secp256r1").unwrap();
    let words = curve.params.n.significant_bits() / 32;
    assert_eq!(words, 8, "secp256r1 order is exactly 256 bits / 32-bit words");
    let n = &curve.params.n;
    let g = AffinePoint::Finite(curve.params.g.0.clone(), curve.params.g.1.clone());

    let x = Integer::from(777_777_777u64);
    let issuer = EcKey { curve_id: "secp256r1".to_string(), point: curve.multiply(&g, &x) };

    let word_basis = |j: u32| Integer::from_str_radix("01010101", 16).unwrap() << (32 * j);
    let word_repeated_nonce = |byte: u64| -> Integer {
        (0..words).fold(Integer::from(0), |acc, j| acc + Integer::from(byte) * word_basis(j))
    };

    let build_sig = |byte: u64, z_val: u64| -> EcdsaSignature {
        let k = field::reduce(&word_repeated_nonce(byte), n);
        let r_point = curve.multiply_g(&k);
        let AffinePoint::Finite(rx, _) = r_point else { panic!("expected finite point") };
        let r = field::reduce(&rx, n);
        let z = Integer::from(z_val);
        let k_inv = field::inv_mod(&k, n).unwrap();
        let s = field::mul_mod(&field::add_mod(&z, &field::mul_mod(&r, &x, n), n), &k_inv, n);
        EcdsaSignature::new("ECDSA", r, s, z, issuer.clone()).unwrap()
    };

    let sig1 = build_sig(3, 11);
    let sig2 = build_sig(5, 13);

    let mut infos = vec![TestInfo::new(), TestInfo::new()];
    let weak = check_cr50_u2f(&[sig1, sig2], &mut infos).unwrap();
    assert!(weak);
    assert!(infos.iter().all(|i| i.is_weak()));
    assert!(infos[0].evidence("private_key").unwrap().contains(&x.to_string()));
}

#[test]
fn single_sample_does_not_panic_the_cr50_probe() {
    // Sin un segundo miembro de ventana, sólo corre la sonda sintética
    // (r2=1, s2=1, z2=0); no debe entrar en pánico ni reportar una
    // debilidad espuria sobre una firma sin estructura.
    let issuer = base_point_key("secp256r1");
    let sig = EcdsaSignature::new("ECDSA", Integer::from(12345), Integer::from(6789), Integer::from(42), issuer).unwrap();
    let mut infos = vec![TestInfo::new()];
    let weak = check_cr50_u2f(&[sig], &mut infos).unwrap();
    assert!(!weak);
}

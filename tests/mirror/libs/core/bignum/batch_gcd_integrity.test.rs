// [tests/mirror/libs/core/bignum/batch_gcd_integrity.test.rs]
//! Certificación de integridad: `BatchGcd` contra un producto completo de
//! módulos RSA sintéticos que comparten un factor primo entre dos de ellos.

use paranoid_core_bignum::prelude::*;

#[test]
fn batch_gcd_recovers_shared_factor_across_many_moduli() {
    let shared = Integer::from(1_000_003u64);
    let cofactors: Vec<Integer> = [1_000_033u64, 1_000_037u64, 1_000_039u64, 1_000_081u64]
        .into_iter()
        .map(Integer::from)
        .collect();

    let mut moduli: Vec<Integer> = cofactors.iter().map(|c| Integer::from(&shared * c)).collect();
    moduli.push(Integer::from(7_919u64 * 7_927u64)); // independiente, coprimo con el resto.

    let gcds = batch_gcd(&moduli, None);
    for gcd in &gcds[..cofactors.len()] {
        assert_eq!(*gcd, shared);
    }
    assert_eq!(gcds[cofactors.len()], Integer::from(1));
}

#[test]
fn batch_gcd_with_external_product_extends_the_search_set() {
    let p = Integer::from(99_991u64);
    let n = Integer::from(&p * Integer::from(100_003u64));
    let other_known_factor = Integer::from(&p * Integer::from(5u64));

    let gcds = batch_gcd(&[n], Some(&other_known_factor));
    assert_eq!(gcds[0], p);
}

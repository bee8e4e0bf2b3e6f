// [tests/mirror/libs/core/bignum/dyadic_roots_integrity.test.rs]
//! Certificación de integridad: inversas y raíces 2-ádicas, incluyendo el
//! caso usado por `factor_high_and_low_bits_equal` (k == bit_length/2 + 1).

use paranoid_core_bignum::prelude::*;

#[test]
fn inverse_sqrt_2exp_requires_residue_one_mod_eight() {
    let n = Integer::from(3); // 3 % 8 != 1
    assert_eq!(inverse_sqrt_2exp(&n, 16).unwrap(), None);
}

#[test]
fn sqrt_2exp_roots_are_pairwise_distinct_and_valid() {
    let n = Integer::from(41); // 41 % 8 == 1
    let k = 20;
    let roots = sqrt_2exp(&n, k).unwrap();
    assert_eq!(roots.len(), 4);
    let modulus = Integer::from(1) << k;
    let mut seen = std::collections::HashSet::new();
    for r in &roots {
        assert!(seen.insert(r.clone()), "roots must be pairwise distinct");
        let lhs = Integer::from(r * r) % &modulus;
        assert_eq!(lhs, Integer::from(&n % &modulus));
    }
}

#[test]
fn inverse_2exp_rejects_even_operand() {
    assert!(inverse_2exp(&Integer::from(10), 8).is_err());
}

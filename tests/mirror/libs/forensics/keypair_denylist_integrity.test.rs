// [tests/mirror/libs/forensics/keypair_denylist_integrity.test.rs]
//! Certificación de integridad: el regenerador Keypair reproduce
//! determinísticamente la misma clave para la misma semilla reconstruida,
//! y CheckKeypairDenylist sólo declara una coincidencia cuando el producto
//! regenerado es exactamente el módulo objetivo.

use paranoid_forensics::prelude::*;
use std::collections::HashMap;

#[test]
fn same_seed_material_regenerates_identical_keys() {
    let mut first = Generator::new(b"fixed-seed-for-reproducibility");
    let mut second = Generator::new(b"fixed-seed-for-reproducibility");
    assert_eq!(first.generate_key(192), second.generate_key(192));
}

#[test]
fn denylist_lookup_confirms_a_planted_record() {
    let mut generator = Generator::new(&reconstruct_seed(&[0x42, 1, 0x99]));
    let (p, q) = generator.generate_key(160);
    let n = Integer::from(&p * &q);
    let bits = n.significant_bits();
    let n_msb = Integer::from(&n >> (bits - 64)).to_u64_wrapping();

    let mut table = HashMap::new();
    table.insert(n_msb, vec![0x42u8, 1, 0x99]);

    let result = check_keypair_denylist(&n, &table);
    assert_eq!(result, Some((p.max(q.clone()), p.min(q))));
}

#[test]
fn denylist_lookup_misses_for_an_unrelated_modulus() {
    let table = HashMap::new();
    let n = Integer::from(999_999_937u64);
    assert!(check_keypair_denylist(&n, &table).is_none());
}

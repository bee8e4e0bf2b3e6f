// [tests/mirror/libs/forensics/openssl_denylist_integrity.test.rs]
//! Certificación de integridad: la clave de búsqueda del denylist de
//! OpenSSL (CVE-2008-0166) tiene el formato `"RSA-<bits>:<40-hex>"`, es
//! estable para el mismo módulo, y un proveedor en memoria cargado con
//! una entrada planteada responde afirmativamente a la consulta.

use paranoid_forensics::prelude::*;

#[test]
fn denylist_key_has_the_rsa_size_prefix_and_full_sha1_hex_suffix() {
    let n = Integer::from_str_radix("d3f1a9c5b7e2", 16).unwrap();
    let key = openssl_denylist_key(&n);

    let mut parts = key.splitn(2, ':');
    let prefix = parts.next().unwrap();
    let digest = parts.next().unwrap();

    assert!(prefix.starts_with("RSA-"));
    assert_eq!(digest.len(), 40);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn denylist_key_is_stable_across_repeated_derivations() {
    let n = Integer::from_str_radix("ab12cd34ef56", 16).unwrap();
    assert_eq!(openssl_denylist_key(&n), openssl_denylist_key(&n));
}

#[test]
fn provider_reports_membership_for_a_planted_denylist_entry() {
    let n = Integer::from_str_radix("fedcba9876543210", 16).unwrap();
    let key = openssl_denylist_key(&n);

    let provider = InMemoryStaticDataProvider::new().with_denylist_entry(key.clone());
    assert!(provider.get_openssl_denylist().contains(&key));

    let unrelated = Integer::from_str_radix("0123456789abcdef", 16).unwrap();
    assert!(!provider.get_openssl_denylist().contains(&openssl_denylist_key(&unrelated)));
}

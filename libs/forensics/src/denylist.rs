// [libs/forensics/src/denylist.rs]
/*!
 * =================================================================
 * APARATO: OPENSSL DENYLIST KEY DERIVATION (V1.0)
 * CLASIFICACIÓN: STATIC DATA SERVICES (ESTRATO L1)
 * RESPONSABILIDAD: CVE-2008-0166 (DEBIAN OPENSSL PREDICTABLE PRNG)
 *
 * NOTA: el contrato de §6 especifica explícitamente un resumen de 40
 * caracteres hexadecimales (el digest SHA-1 completo); esto difiere de
 * la fuente original, que sólo conserva los últimos 20 caracteres. Ver
 * DESIGN.md para la justificación de seguir el contrato explícito.
 * =================================================================
 */

use rug::Integer;
use sha1::{Digest, Sha1};

/// Deriva la clave de búsqueda `"RSA-<size>:<40-hex>"` para un módulo,
/// usada tanto para construir como para consultar el denylist.
#[must_use]
pub fn openssl_denylist_key(n: &Integer) -> String {
    let bits = n.significant_bits();
    let hex_upper = n.to_string_radix(16).to_uppercase();
    let payload = format!("Modulus={hex_upper}\n");
    let digest = Sha1::digest(payload.as_bytes());
    format!("RSA-{bits}:{}", hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_format_matches_rsa_size_and_hex_digest_prefix() {
        let n = Integer::from(65537u64);
        let key = openssl_denylist_key(&n);
        assert!(key.starts_with("RSA-17:"));
        assert_eq!(key.split(':').nth(1).unwrap().len(), 40);
    }

    #[test]
    fn key_is_deterministic_for_the_same_modulus() {
        let n = Integer::from_str_radix("ffeeddccbbaa99887766554433221100", 16).unwrap();
        assert_eq!(openssl_denylist_key(&n), openssl_denylist_key(&n));
    }
}

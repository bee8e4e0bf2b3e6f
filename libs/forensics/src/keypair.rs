// [libs/forensics/src/keypair.rs]
/*!
 * =================================================================
 * APARATO: KEYPAIR PRNG REGENERATOR (V1.0)
 * CLASIFICACIÓN: STATIC DATA SERVICES (ESTRATO L1)
 * RESPONSABILIDAD: CVE-2021-41117 (npm "keypair" < 1.0.2)
 *
 * Reimplementa el PRNG vulnerable de github.com/juliangruber/keypair: un
 * encadenamiento SHA-1 inicializa (clave, semilla) de 16 bytes cada una;
 * cada primo se ensambla concatenando bloques AES-128-ECB, incrementando
 * la semilla entre bloques y derivando una nueva clave de la misma
 * cifra. NUNCA usar este generador para producir claves reales: existe
 * únicamente para reconstruir claves ya emitidas y demostrar la
 * debilidad.
 * =================================================================
 */

use crate::aes128;
use rug::integer::{IsPrime, Order};
use rug::Integer;
use sha1::{Digest, Sha1};

const GCD_30_DELTA: [i32; 8] = [6, 4, 2, 4, 2, 4, 6, 2];

/// Reconstruye la semilla de 32 bytes a partir de un registro de la
/// forma `b0|i1|b1|i2|b2…`: el primer byte llena la posición 0; cada par
/// subsiguiente (índice, valor) sobreescribe una posición puntual;
/// todas las demás posiciones quedan en cero.
#[must_use]
pub fn reconstruct_seed(record: &[u8]) -> [u8; 32] {
    let mut seed = [0u8; 32];
    if let Some(&first) = record.first() {
        seed[0] = first;
    }
    let mut i = 1;
    while i + 1 < record.len() {
        let index = record[i] as usize;
        if index < seed.len() {
            seed[index] = record[i + 1];
        }
        i += 2;
    }
    seed
}

fn increment_be(bytes: &[u8; 16]) -> [u8; 16] {
    u128::from_be_bytes(*bytes).wrapping_add(1).to_be_bytes()
}

/// El generador de claves Keypair, parametrizado por una semilla inicial.
pub struct Generator {
    key: [u8; 16],
    seed: [u8; 16],
}

impl Generator {
    #[must_use]
    pub fn new(seed_material: &[u8]) -> Self {
        let t = Sha1::digest(seed_material);
        let key_digest = Sha1::digest(t);
        let seed_digest = Sha1::digest(key_digest);
        let mut key = [0u8; 16];
        key.copy_from_slice(&key_digest[..16]);
        let mut seed = [0u8; 16];
        seed.copy_from_slice(&seed_digest[..16]);
        Self { key, seed }
    }

    /// Genera un primo de `bits` bits siguiendo exactamente el esquema
    /// de ensamblaje por bloques, alineación 30k+1 y bucle de
    /// incrementos del paquete vulnerado.
    pub fn generate_prime(&mut self, bits: u32) -> Integer {
        let byte_len = (bits / 8) as usize;
        loop {
            let mut prime_bytes: Vec<u8> = Vec::with_capacity(byte_len + 16);
            while prime_bytes.len() <= byte_len {
                let chunk = aes128::encrypt_block(&self.key, &self.seed);
                prime_bytes.extend_from_slice(&chunk);
                let seed_inc = increment_be(&self.seed);
                self.key = aes128::encrypt_block(&self.key, &seed_inc);
                self.seed = aes128::encrypt_block(&self.key, &seed_inc);
            }
            let trimmed = &prime_bytes[1..=byte_len];
            let mut candidate = Integer::from_digits(trimmed, Order::Msf);
            candidate.set_bit(bits - 1, true);

            let remainder = Integer::from(&candidate % 30);
            candidate += Integer::from(Integer::from(31) - remainder);

            let mut step = 0usize;
            while candidate.is_probably_prime(1) == IsPrime::No {
                candidate += Integer::from(GCD_30_DELTA[step % 8]);
                step += 1;
            }
            if candidate.is_probably_prime(25) != IsPrime::No {
                return candidate;
            }
        }
    }

    /// Genera el par de primos de una clave RSA de `bits` bits: p>q, y
    /// el producto tiene exactamente `bits` bits (reintenta q si no).
    pub fn generate_key(&mut self, bits: u32) -> (Integer, Integer) {
        let half = bits / 2;
        let mut p = self.generate_prime(half);
        let mut q = self.generate_prime(half);
        loop {
            if q > p {
                std::mem::swap(&mut p, &mut q);
            }
            let n = Integer::from(&p * &q);
            if n.significant_bits() == bits {
                return (p, q);
            }
            q = self.generate_prime(half);
        }
    }
}

/// Intenta CheckKeypairDenylist (CVE-2021-41117): si los 64 bits más
/// significativos de `n` indexan un registro conocido, reconstruye la
/// semilla, regenera la clave determinísticamente y verifica el producto.
#[must_use]
pub fn check_keypair_denylist(n: &Integer, table: &std::collections::HashMap<u64, Vec<u8>>) -> Option<(Integer, Integer)> {
    let bits = n.significant_bits();
    if bits < 64 {
        return None;
    }
    let n_msb = Integer::from(n >> (bits - 64)).to_u64_wrapping();
    let record = table.get(&n_msb)?;
    let seed = reconstruct_seed(record);
    let (p, q) = Generator::new(&seed).generate_key(bits);
    (Integer::from(&p * &q) == *n).then_some((p, q))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_seed_applies_first_byte_and_indexed_overrides() {
        let record = [0xAAu8, 1, 0xBB, 3, 0xCC];
        let seed = reconstruct_seed(&record);
        assert_eq!(seed[0], 0xAA);
        assert_eq!(seed[1], 0xBB);
        assert_eq!(seed[3], 0xCC);
        assert_eq!(seed[2], 0);
        assert_eq!(seed[31], 0);
    }

    #[test]
    fn generate_prime_returns_a_value_with_the_requested_bit_length() {
        let mut generator = Generator::new(b"deterministic-test-seed");
        let p = generator.generate_prime(128);
        assert_eq!(p.significant_bits(), 128);
        assert_ne!(p.is_probably_prime(25), IsPrime::No);
    }

    #[test]
    fn generate_key_produces_a_modulus_with_the_exact_bit_length() {
        let mut generator = Generator::new(b"another-deterministic-seed");
        let (p, q) = generator.generate_key(256);
        let n = Integer::from(&p * &q);
        assert_eq!(n.significant_bits(), 256);
        assert!(p >= q);
    }

    #[test]
    fn check_keypair_denylist_misses_when_no_record_matches() {
        let table = std::collections::HashMap::new();
        let n = Integer::from(12345u64);
        assert!(check_keypair_denylist(&n, &table).is_none());
    }
}

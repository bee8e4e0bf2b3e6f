// [libs/checks/rsa/src/roca.rs]
/*!
 * =================================================================
 * APARATO: ROCA WEAK-KEY DETECTION (V1.0)
 * CLASIFICACIÓN: RSA CHECKS (ESTRATO L2)
 * RESPONSABILIDAD: CVE-2017-15361 (INFINEON ROCA) Y SU VARIANTE
 *
 * Los primos generados por el firmware vulnerable tienen la forma
 * p = 65537^r mod M para un M producto de primos pequeños: n hereda esa
 * estructura, así que n mod p_i cae en el subgrupo cíclico generado por
 * 65537 módulo cada p_i. La variante generaliza la observación a residuos
 * cuadráticos cuando la base exacta es desconocida, a costa de un 50% de
 * tasa de detección.
 * =================================================================
 */

use once_cell::sync::Lazy;
use rug::Integer;

const ROCA_PRIMES: [u64; 39] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173,
];

const ROCA_VARIANT_PRIMES: [u64; 48] = [
    5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97, 101,
    103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193, 197,
    199, 211, 223, 227, 229,
];

const ROCA_BASE: u64 = 0x10001;

static ROCA_PRODUCT_OF_PRIMES: Lazy<Integer> =
    Lazy::new(|| ROCA_PRIMES.iter().fold(Integer::from(1), |acc, &p| acc * Integer::from(p)));

static ROCA_VARIANT_QUADRATIC_RESIDUES: Lazy<Vec<(u64, Vec<bool>)>> = Lazy::new(|| {
    ROCA_VARIANT_PRIMES
        .iter()
        .map(|&p| (p, quadratic_residues(p)))
        .collect()
});

fn has_discrete_log(value: u64, base: u64, modulus: u64) -> bool {
    let b = base % modulus;
    let mut accumulator = 1u64 % modulus;
    for _ in 1..modulus {
        if accumulator == value {
            return true;
        }
        accumulator = (accumulator * b) % modulus;
    }
    false
}

fn quadratic_residues(p: u64) -> Vec<bool> {
    let mut table = vec![false; p as usize];
    for i in 0..p {
        table[((i * i) % p) as usize] = true;
    }
    table
}

/// Detecta módulos ROCA con base 65537 conocida.
#[must_use]
pub fn is_roca_weak(n: &Integer) -> bool {
    let mod_product = Integer::from(n % &*ROCA_PRODUCT_OF_PRIMES);
    for &p in &ROCA_PRIMES {
        let mod_p = Integer::from(&mod_product % p).to_u64_wrapping();
        if !has_discrete_log(mod_p, ROCA_BASE, p) {
            return false;
        }
    }
    true
}

/// Detecta módulos similares a ROCA con base desconocida, vía residuos
/// cuadráticos; excluye los ya detectados por [`is_roca_weak`].
#[must_use]
pub fn is_roca_variant_weak(n: &Integer) -> bool {
    for (p, residues) in ROCA_VARIANT_QUADRATIC_RESIDUES.iter() {
        let r = Integer::from(n % *p).to_u64_wrapping();
        if !residues[r as usize] {
            return false;
        }
    }
    !is_roca_weak(n)
}

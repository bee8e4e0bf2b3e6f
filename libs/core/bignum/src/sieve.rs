// [libs/core/bignum/src/sieve.rs]
/*!
 * =================================================================
 * APARATO: SIEVE OF ERATOSTHENES (V1.0)
 * CLASIFICACIÓN: CORE NUMBER THEORY (ESTRATO L1)
 * RESPONSABILIDAD: GENERACIÓN DE TABLAS DE PRIMOS PEQUEÑOS
 * =================================================================
 */

/// Retorna todos los primos estrictamente menores que `bound` mediante la
/// criba clásica de Eratóstenes.
#[must_use]
pub fn sieve(bound: u64) -> Vec<u64> {
    if bound < 3 {
        return Vec::new();
    }
    let bound_usize = bound as usize;
    let mut is_prime = vec![true; bound_usize];
    is_prime[0] = false;
    if bound_usize > 1 {
        is_prime[1] = false;
    }

    let mut i = 2usize;
    while i * i < bound_usize {
        if is_prime[i] {
            let mut j = i * i;
            while j < bound_usize {
                is_prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }

    is_prime
        .into_iter()
        .enumerate()
        .filter_map(|(value, prime)| prime.then_some(value as u64))
        .collect()
}

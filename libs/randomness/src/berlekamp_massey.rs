// [libs/randomness/src/berlekamp_massey.rs]
/*!
 * =================================================================
 * APARATO: BERLEKAMP-MASSEY SOBRE GF(2) (V1.0)
 * CLASIFICACIÓN: RANDOMNESS TEST SUITE (ESTRATO L2)
 * RESPONSABILIDAD: LONGITUD DEL LFSR MÁS CORTO (§4.I, LinearComplexity)
 *
 * Variante incremental de "Algorithm 970: Optimizing the NIST Statistical
 * Test Suite and the Berlekamp-Massey Algorithm" (ACM TOMS 43:3, 2017):
 * mantiene s·B y s·C como enteros actualizados con operaciones lógicas en
 * vez de recorrer cada bit del discrepante en cada paso. Se traduce
 * directamente sobre `rug::Integer` en lugar de enteros nativos de Python,
 * que ya son de precisión arbitraria.
 * =================================================================
 */

use rug::Integer;

/// Longitud del LFSR más corto que genera la secuencia de bits `s` (bit 0
/// primero) de longitud `length`.
#[must_use]
pub fn linear_complexity(s: &Integer, length: u64) -> u64 {
    let mut sb = s.clone();
    let mut sc = s.clone();
    let mut deg_c: u64 = 0;
    let mut m: u32 = 0;
    for n in 0..length {
        let disc = sc.get_bit(m);
        m += 1;
        if disc {
            sc >>= m;
            m = 0;
            if 2 * deg_c <= n {
                std::mem::swap(&mut sb, &mut sc);
                deg_c = n + 1 - deg_c;
            }
            sc ^= &sb;
        }
    }
    deg_c
}

/// Número de secuencias de `n` bits cuyo LFSR más corto tiene longitud `m`.
#[must_use]
pub fn lfsr_count(n: u64, m: u64) -> f64 {
    if m > n {
        return 0.0;
    }
    if m == 0 {
        return 1.0;
    }
    if m <= n / 2 {
        2.0 * 4f64.powi(m as i32 - 1)
    } else {
        4f64.powi((n - m) as i32)
    }
}

/// log2 de la probabilidad de que una secuencia aleatoria de `n` bits tenga
/// un LFSR más corto de longitud `m`; usado para ponderar resultados
/// extremos del test de complejidad lineal como lanzamientos de moneda.
#[must_use]
pub fn lfsr_log_probability(n: u64, m: u64) -> i64 {
    if m == 0 {
        return -(n as i64);
    }
    if m <= n / 2 {
        2 * m as i64 - n as i64 - 1
    } else {
        n as i64 - 2 * m as i64
    }
}

// [libs/randomness/src/bits.rs]
/*!
 * =================================================================
 * APARATO: MANIPULACIÓN DE CADENAS DE BITS (V1.0)
 * CLASIFICACIÓN: RANDOMNESS TEST SUITE (ESTRATO L2)
 * RESPONSABILIDAD: PRIMITIVAS COMPARTIDAS POR LA SUITE NIST (§4.I)
 *
 * Una cadena de bits se representa como un `rug::Integer` no negativo más
 * una longitud explícita en bits (bit 0 = el menos significativo), tal
 * como `util.py` representa `seq` como un entero de Python con una
 * longitud acompañante. Las rutinas de `bytes.translate()` del original
 * (tablas de reversión de bits, desdoblamiento rápido por bytes) se
 * sustituyen por recorridos bit a bit directos sobre la API de `rug`:
 * más simples de verificar, a costa de la velocidad de E/S a nivel de
 * byte que el original explota.
 * =================================================================
 */

use rug::Integer;

#[must_use]
pub fn bit_count(value: &Integer) -> u64 {
    value.count_ones().unwrap_or(0) as u64
}

/// Convierte la cadena de bits en un vector de +1/-1, bit 0 primero.
#[must_use]
pub fn balanced_bits(seq: &Integer, length: u64) -> Vec<i8> {
    (0..length).map(|i| if seq.get_bit(i as u32) { 1i8 } else { -1i8 }).collect()
}

/// Número de runs (subsecuencias máximas de 0's o de 1's) en `seq`.
#[must_use]
pub fn runs(seq: &Integer, length: u64) -> u64 {
    if length == 0 {
        return 0;
    }
    let shifted = Integer::from(seq >> 1u32);
    let xor = Integer::from(seq ^ &shifted);
    let mut count = bit_count(&xor);
    if Integer::from(seq >> (length as u32 - 1)) == 0 {
        count += 1;
    }
    count
}

/// Longitud del run de 1's más largo en `seq`, usando la duplicación
/// logarítmica de `util.LongestRunOfOnes`.
#[must_use]
pub fn longest_run_of_ones(seq: &Integer) -> u64 {
    if *seq == 0 {
        return 0;
    }
    let mut s = seq.clone();
    let mut longest_run: u64 = 1;
    loop {
        let s2 = Integer::from(&s & Integer::from(&s >> longest_run as u32));
        if s2 == 0 {
            break;
        }
        s = s2;
        longest_run *= 2;
    }
    let mut n = longest_run / 2;
    while n > 0 {
        let s2 = Integer::from(&s & Integer::from(&s >> n as u32));
        if s2 != 0 {
            s = s2;
            longest_run += n;
        }
        n /= 2;
    }
    longest_run
}

/// Cuenta las subsecuencias (posiblemente solapadas) de `m` unos consecutivos en `seq`.
#[must_use]
pub fn overlapping_runs_of_ones(seq: &Integer, m: u32) -> u64 {
    let mut seq = seq.clone();
    let mut k: u32 = 1;
    let mut m = m.saturating_sub(1);
    while m > 0 {
        let t = k.min(m);
        seq &= Integer::from(&seq >> t);
        m -= t;
        k *= 2;
    }
    bit_count(&seq)
}

/// Divide `seq` (de `length` bits) en bloques no solapados de `m` bits,
/// descartando los bits finales sobrantes.
#[must_use]
pub fn split_sequence(seq: &Integer, length: u64, m: u32) -> Vec<Integer> {
    let n = length / m as u64;
    let mask: Integer = (Integer::from(1) << m) - 1;
    (0..n)
        .map(|i| {
            let shift = (i * m as u64) as u32;
            Integer::from(Integer::from(seq >> shift) & &mask)
        })
        .collect()
}

/// Cuenta las ocurrencias de cada subsecuencia de `m` bits de `seq`,
/// tratando `seq` como un ciclo si `wrap` es verdadero.
#[must_use]
pub fn frequency_count(seq: &Integer, length: u64, m: u32, wrap: bool) -> Vec<u64> {
    let size = 1usize << m;
    let mut res = vec![0u64; size];
    if length == 0 {
        return res;
    }
    let total = if wrap { length } else { length.saturating_sub(u64::from(m) - 1) };
    for start in 0..total {
        let mut window = 0usize;
        for j in 0..m {
            let pos = (start + u64::from(j)) % length;
            if seq.get_bit(pos as u32) {
                window |= 1 << j;
            }
        }
        res[window] += 1;
    }
    res
}

/// Reparte los bits de `seq` en `m` cadenas entrelazadas: el resultado `i`
/// contiene los bits `i, i+m, i+2m, ...` de `seq`, bit 0 primero.
#[must_use]
pub fn scatter(seq: &Integer, length: u64, m: usize) -> Vec<Integer> {
    let mut res = vec![Integer::from(0); m];
    let mut bitpos = vec![0u32; m];
    for i in 0..length {
        let stream = (i % m as u64) as usize;
        if seq.get_bit(i as u32) {
            res[stream].set_bit(bitpos[stream], true);
        }
        bitpos[stream] += 1;
    }
    res
}

/// Rango (sobre GF(2)) de una matriz binaria representada como filas enteras,
/// vía eliminación gaussiana directa. El original bifurca a una variante
/// optimizada por bloques de pivotes para matrices grandes (`len >= 50`);
/// aquí se usa siempre la eliminación directa O(rows² ) por simplicidad,
/// aceptable para los tamaños de matriz que produce §4.I (hasta unos
/// pocos cientos de filas).
#[must_use]
pub fn binary_matrix_rank(matrix: &[Integer]) -> u64 {
    let mut m: Vec<Integer> = matrix.to_vec();
    let mut rank = 0u64;
    for i in 0..m.len() {
        if m[i] != 0 {
            rank += 1;
            let msb = Integer::from(1) << (m[i].significant_bits() - 1);
            for j in (i + 1)..m.len() {
                if Integer::from(&m[j] & &msb) != 0 {
                    let updated = Integer::from(&m[j] ^ &m[i]);
                    m[j] = updated;
                }
            }
        }
    }
    rank
}

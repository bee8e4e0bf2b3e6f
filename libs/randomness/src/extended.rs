// [libs/randomness/src/extended.rs]
/*!
 * =================================================================
 * APARATO: EXTENSIONES DE LA SUITE NIST (V1.0)
 * CLASIFICACIÓN: RANDOMNESS TEST SUITE (ESTRATO L2)
 * RESPONSABILIDAD: LargeBinaryMatrixRank Y LinearComplexityScatter (§4.I)
 * =================================================================
 */

use rug::Integer;

use crate::berlekamp_massey::{lfsr_log_probability, linear_complexity};
use crate::bits;
use crate::errors::RandomnessError;
use crate::nist::NamedPValues;
use crate::stats::binomial_cdf;

/// ASYMPTOTIC_RANK_SF[k]: probabilidad asintótica de que una matriz binaria
/// cuadrada de tamaño n tenga rango a lo sumo n-k, cuando n tiende a
/// infinito. Solo es fiable como regla general para n >= 32.
const ASYMPTOTIC_RANK_SF: [f64; 33] = [
    1.0, 0.711_212, 0.133_636, 0.005_285_45, 4.6664e-05, 9.696_25e-08, 4.884_13e-11, 6.055_77e-15, 1.862_56e-19, 1.426_58e-24, 2.7263e-30,
    1.301_27e-36, 1.551_99e-43, 4.626_42e-51, 3.447_38e-59, 6.421_63e-68, 2.9904e-77, 3.481_33e-87, 1.013_21e-97, 7.372_09e-109, 1.340_98e-120,
    6.098_07e-133, 6.9327e-146, 1.970_39e-159, 1.400_05e-173, 2.486_99e-188, 1.104_44e-203, 1.226_18e-219, 3.403_33e-236, 2.361_53e-253,
    4.096_61e-271, 1.776_62e-289, 1.926_22e-308,
];

/// Rango de matrices binarias grandes (64*64, 128*128, ...). Solo se prueba
/// una matriz por tamaño, comparada contra la distribución asintótica de su
/// rango en vez del ajuste chi-cuadrado de `binary_matrix_rank`, que
/// requeriría 38 matrices por tamaño.
pub fn large_binary_matrix_rank(bits_val: &Integer, n: u64) -> Result<NamedPValues, RandomnessError> {
    let mut p_values = Vec::new();
    let mut size: u64 = 64;
    if n < size * size {
        return Err(RandomnessError::InsufficientData(format!("at least {} bits required", size * size)));
    }
    while size * size <= n {
        let mask: Integer = (Integer::from(1) << (size * size) as u32) - 1;
        let truncated = Integer::from(bits_val & &mask);
        let matrix = bits::split_sequence(&truncated, size * size, size as u32);
        let rank = bits::binary_matrix_rank(&matrix);
        let k = (size - rank) as usize;
        let p_value = ASYMPTOTIC_RANK_SF.get(k).copied().unwrap_or(0.0);
        p_values.push((format!("{size} * {size}"), p_value));
        size *= 2;
    }
    Ok(p_values)
}

/// Complejidad lineal de flujos de bits "dispersos" (p.ej. solo el bit menos
/// significativo de cada salida): algunos PRNGs reproducen ese subflujo con
/// un LFSR corto aunque la salida completa no lo sea.
#[must_use]
pub fn linear_complexity_scatter(bits_val: &Integer, n: u64, step_size: u64, max_block_size: Option<u64>) -> f64 {
    let (bits_val, n) = match max_block_size {
        Some(max) if step_size * max < n => {
            let n = step_size * max;
            let mask: Integer = (Integer::from(1) << n as u32) - 1;
            (Integer::from(bits_val & &mask), n)
        }
        _ => (bits_val.clone(), n),
    };
    let sequences = bits::scatter(&bits_val, n, step_size as usize);
    let mut log_prob: i64 = 0;
    for (i, sequence) in sequences.iter().enumerate() {
        let size = (n + step_size - 1 - i as u64) / step_size;
        let c = linear_complexity(sequence, size);
        log_prob -= lfsr_log_probability(size, c);
    }
    binomial_cdf(sequences.len() as i64 - 1, log_prob - 1)
}

// [libs/randomness/src/nist.rs]
/*!
 * =================================================================
 * APARATO: SUITE NIST SP 800-22 (V1.0)
 * CLASIFICACIÓN: RANDOMNESS TEST SUITE (ESTRATO L2)
 * RESPONSABILIDAD: LOS 15 TESTS DE §4.I (2.1 .. 2.15)
 * =================================================================
 */

use std::collections::HashMap;

use rug::Integer;

use crate::berlekamp_massey::{lfsr_log_probability, linear_complexity as lfsr_length};
use crate::bits;
use crate::errors::RandomnessError;
use crate::fft::dft_magnitudes;
use crate::stats::{binomial_cdf, chi_square, erf, erfc, igamc};

/// Un test puede producir varios p-values nombrados (p.ej. uno por plantilla,
/// uno por tamaño de bloque).
pub type NamedPValues = Vec<(String, f64)>;

fn bit_length_u64(x: u64) -> u32 {
    64 - x.leading_zeros()
}

/// 2.1 Frequency (Monobits). Desvío del número de bits 0 y 1 respecto de los
/// esperados para datos aleatorios.
#[must_use]
pub fn frequency(bits_val: &Integer, n: u64) -> f64 {
    let s = 2 * bits::bit_count(bits_val) as i64 - n as i64;
    let s_obs = (s.abs() as f64) / (n as f64).sqrt();
    erfc(s_obs / std::f64::consts::SQRT_2)
}

/// 2.2 Frequency Test within a Block.
#[must_use]
pub fn block_frequency_impl(blocks: &[Integer], m: u32) -> f64 {
    let pi: Vec<f64> = blocks.iter().map(|b| bits::bit_count(b) as f64 / m as f64).collect();
    let chi_obs = 4.0 * m as f64 * pi.iter().map(|x| (x - 0.5).powi(2)).sum::<f64>();
    igamc(blocks.len() as f64 / 2.0, chi_obs / 2.0)
}

pub fn block_frequency(bits_val: &Integer, n: u64) -> Result<f64, RandomnessError> {
    if n < 100 {
        return Err(RandomnessError::InsufficientData("block frequency needs at least 100 bits".to_string()));
    }
    let mut m: u64 = 16;
    while n / m >= 100 {
        m *= 2;
    }
    let m = m.max(20) as u32;
    let blocks = bits::split_sequence(bits_val, n, m);
    Ok(block_frequency_impl(&blocks, m))
}

/// 2.3 Runs Test.
#[must_use]
pub fn runs(bits_val: &Integer, n: u64) -> f64 {
    let pi = bits::bit_count(bits_val) as f64 / n as f64;
    let v_obs = bits::runs(bits_val, n) as f64;
    let pp = pi * (1.0 - pi);
    erfc((v_obs - 2.0 * n as f64 * pp).abs() / (2.0 * (2.0 * n as f64).sqrt() * pp))
}

const LONGEST_RUN_PARAMS: [(u64, u32, i64, i64, &[f64]); 3] = [
    (128, 8, 1, 4, &[0.2148, 0.3672, 0.2305, 0.1875]),
    (6272, 128, 4, 9, &[0.1174, 0.2430, 0.2493, 0.1752, 0.1027, 0.1124]),
    (750_000, 10_000, 10, 16, &[0.0882, 0.2092, 0.2483, 0.1933, 0.1208, 0.0675, 0.0727]),
];

/// 2.4 Test for the Longest Run of Ones in a Block.
pub fn longest_runs(bits_val: &Integer, n: u64) -> Result<f64, RandomnessError> {
    let chosen = LONGEST_RUN_PARAMS.iter().rev().find(|&&(min_n, ..)| n >= min_n);
    let Some(&(_, m, v_lower, v_upper, pi)) = chosen else {
        return Err(RandomnessError::InsufficientData("at least 128 bits required".to_string()));
    };
    let k = (v_upper - v_lower) as usize;
    let blocks = bits::split_sequence(bits_val, n, m);
    let mut v = vec![0u64; (v_upper - v_lower + 1) as usize];
    for block in &blocks {
        let x = bits::longest_run_of_ones(block) as i64;
        let idx = (x.min(v_upper).max(v_lower) - v_lower) as usize;
        v[idx] += 1;
    }
    chi_square(&v, pi, Some(k))
}

/// Distribución del rango de matrices binarias r*c aleatorias. Para r=c>=31
/// y k<=5 se reutiliza la tabla asintótica publicada por NIST en lugar de
/// recalcular la recurrencia exacta.
#[must_use]
pub fn rank_distribution(r: usize, c: usize, k: usize, allow_approximation: bool) -> Vec<f64> {
    if allow_approximation && r == c && r >= 31 && k <= 5 {
        const PRECOMPUTED: [f64; 6] = [0.288_788_09, 0.577_576_19, 0.128_350_26, 0.005_238_79, 0.000_046_57, 0.000_000_10];
        let mut res: Vec<f64> = PRECOMPUTED[..k].to_vec();
        res.push(PRECOMPUTED[k..].iter().sum());
        return res;
    }
    let mut res = vec![0.0f64; r + 1];
    res[0] = 1.0;
    for _ in 0..c {
        for j in (0..r).rev() {
            let prob_dependent = 2f64.powi(j as i32 - r as i32);
            res[j + 1] += res[j] * (1.0 - prob_dependent);
            res[j] *= prob_dependent;
        }
    }
    let tail: f64 = res[..res.len() - k].iter().sum();
    let mut out: Vec<f64> = res[res.len() - k..].iter().rev().copied().collect();
    out.push(tail);
    out
}

/// 2.5 Binary Matrix Rank Test.
pub fn binary_matrix_rank_impl(rows: &[Integer], r: usize, c: usize, k: usize) -> Result<f64, RandomnessError> {
    let num_matrices = rows.len() / r;
    if num_matrices < 1 {
        return Err(RandomnessError::InsufficientData("not enough rows to form a matrix".to_string()));
    }
    let mut v = vec![0u64; k + 1];
    for i in 0..num_matrices {
        let mat = &rows[i * r..(i + 1) * r];
        let rank = bits::binary_matrix_rank(mat) as usize;
        v[k.min(r - rank)] += 1;
    }
    let pi = rank_distribution(r, c, k, true);
    chi_square(&v, &pi, Some(k))
}

pub fn binary_matrix_rank(bits_val: &Integer, n: u64, r: usize, c: usize, k: usize, check_size: bool) -> Result<f64, RandomnessError> {
    if r.min(c) < k {
        return Err(RandomnessError::InvalidInput("k must not be larger than min(r, c)".to_string()));
    }
    if check_size && n < 38 * (r as u64) * (c as u64) {
        return Err(RandomnessError::InsufficientData("n should be at least 38 * r * c".to_string()));
    }
    let rows = bits::split_sequence(bits_val, n, c as u32);
    binary_matrix_rank_impl(&rows, r, c, k)
}

/// 2.6 Spectral (Discrete Fourier Transform) Test.
#[must_use]
pub fn spectral(bits_val: &Integer, n: u64) -> f64 {
    let balanced = bits::balanced_bits(bits_val, n);
    let spectrum = dft_magnitudes(&balanced);
    let half = &spectrum[..(n as usize / 2).min(spectrum.len())];
    // Cota propuesta en la Sección 3 de https://eprint.iacr.org/2004/018.pdf.
    let t = (1.0_f64 / 0.05).ln().sqrt() * (n as f64).sqrt();
    let n0 = 0.95 * half.len() as f64;
    let n1 = half.iter().filter(|&&m| m < t).count() as f64;
    let d = (n0 - n1) / (n as f64 * 0.95 * 0.05 / 4.0).sqrt();
    erfc(d.abs() / std::f64::consts::SQRT_2)
}

/// 2.7 Non-Overlapping Template Matching Test.
#[must_use]
pub fn is_non_overlapping_template(template: u64, m: u32) -> bool {
    for i in 1..m {
        if (template >> (m - i)) == (template & ((1u64 << i) - 1)) {
            return false;
        }
    }
    true
}

pub fn non_overlapping_template_matching_impl(blocks: &[Integer], n: u64, m: u32, templates: &[u64]) -> Result<NamedPValues, RandomnessError> {
    for &b in templates {
        if !is_non_overlapping_template(b, m) {
            return Err(RandomnessError::InvalidInput("non-overlapping template matching requires non-overlapping templates".to_string()));
        }
    }
    let cnts: Vec<Vec<u64>> = blocks.iter().map(|b| bits::frequency_count(b, n, m, false)).collect();
    let n0 = (n - u64::from(m) + 1) as f64;
    let mean = n0 / 2f64.powi(m as i32);
    let variance = n as f64 * (1.0 / 2f64.powi(m as i32) - (2.0 * m as f64 - 1.0) / 2f64.powi(2 * m as i32));
    let mut p_values = Vec::with_capacity(templates.len());
    for &b in templates {
        let obs: f64 = cnts.iter().map(|cnt| (cnt[b as usize] as f64 - mean).powi(2) / variance).sum();
        let p_value = igamc(blocks.len() as f64 / 2.0, obs / 2.0);
        p_values.push((format!("template '{:0width$b}'", b, width = m as usize), p_value));
    }
    Ok(p_values)
}

pub fn non_overlapping_template_matching(bits_val: &Integer, n: u64, blocks: u64) -> Result<NamedPValues, RandomnessError> {
    let block_size = n / blocks;
    let m = match block_size {
        0..=3 => return Err(RandomnessError::InsufficientData("block too small for non-overlapping template matching".to_string())),
        4..=63 => 2,
        64..=255 => 3,
        256..=1023 => 4,
        1024..=2047 => 5,
        2048..=4095 => 6,
        4096..=8191 => 7,
        8192..=16383 => 8,
        16384..=32767 => 9,
        _ => 10,
    };
    let templates: Vec<u64> = (0..(1u64 << m)).filter(|&b| is_non_overlapping_template(b, m)).collect();
    let split = bits::split_sequence(bits_val, n, block_size as u32);
    non_overlapping_template_matching_impl(&split, block_size, m, &templates)
}

fn matmul(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let size = a.len();
    let mut out = vec![vec![0.0; size]; size];
    for (i, row) in out.iter_mut().enumerate() {
        for (k, &a_ik) in a[i].iter().enumerate() {
            if a_ik == 0.0 {
                continue;
            }
            for (j, cell) in row.iter_mut().enumerate() {
                *cell += a_ik * b[k][j];
            }
        }
    }
    out
}

fn matrix_pow(mut base: Vec<Vec<f64>>, mut exponent: u64) -> Vec<Vec<f64>> {
    let size = base.len();
    let mut result = vec![vec![0.0; size]; size];
    for (i, row) in result.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = matmul(&result, &base);
        }
        base = matmul(&base, &base);
        exponent >>= 1;
    }
    result
}

/// 2.8 Overlapping Template Matching Test: matriz de transición de una
/// cadena de Markov de `k*m+1` estados, en lugar de la fórmula asintótica
/// de NIST (más precisa para bloques pequeños).
#[must_use]
pub fn overlapping_template_matching_matrix(m: usize, k: usize) -> Vec<Vec<f64>> {
    let size = k * m + 1;
    let mut mat = vec![vec![0.0; size]; size];
    for occurrences in 0..k {
        for run in 0..m {
            let i = occurrences * m + run;
            mat[i][occurrences * m] += 0.5;
            if run < m - 1 {
                mat[i][i + 1] += 0.5;
            } else if occurrences < k - 1 {
                mat[i][i + m] += 0.5;
            } else {
                mat[i][k * m] += 0.5;
            }
        }
    }
    mat[k * m][k * m] = 1.0;
    mat
}

#[must_use]
pub fn overlapping_template_matching_distribution(n: u64, m: usize, k: usize) -> Vec<f64> {
    let mat = overlapping_template_matching_matrix(m, k);
    let powered = matrix_pow(mat, n);
    let row0 = &powered[0];
    (0..=k).map(|i| row0[i * m..(i + 1) * m].iter().sum()).collect()
}

pub fn overlapping_template_matching_impl(blocks: &[Integer], n: u64, m: u32) -> Result<f64, RandomnessError> {
    let k = 5usize;
    let mut v = vec![0u64; k + 1];
    for block in blocks {
        let cnt = bits::overlapping_runs_of_ones(block, m) as usize;
        v[k.min(cnt)] += 1;
    }
    let pi = overlapping_template_matching_distribution(n, m as usize, k);
    chi_square(&v, &pi, Some(k))
}

pub fn overlapping_template_matching(bits_val: &Integer, n: u64) -> Result<f64, RandomnessError> {
    let m: u32 = 9;
    let block_size: u32 = 2u32.pow(m + 1) + m - 1;
    let blocks = bits::split_sequence(bits_val, n, block_size);
    overlapping_template_matching_impl(&blocks, u64::from(block_size), m)
}

const UNIVERSAL_DISTRIBUTION_TABLE: [(u32, f64, f64); 16] = [
    (1, 0.732_649_5, 0.690),
    (2, 1.537_438_3, 1.338),
    (3, 2.401_606_8, 1.901),
    (4, 3.311_224_7, 2.358),
    (5, 4.253_426_6, 2.705),
    (6, 5.217_705_2, 2.954),
    (7, 6.196_250_7, 3.125),
    (8, 7.183_665_6, 3.238),
    (9, 8.176_424_8, 3.311),
    (10, 9.172_324_3, 3.356),
    (11, 10.170_032, 3.384),
    (12, 11.168_765, 3.401),
    (13, 12.168_070, 3.410),
    (14, 13.167_693, 3.416),
    (15, 14.167_488, 3.419),
    (16, 15.167_379, 3.421),
];

/// 2.9 Maurer's "Universal Statistical" Test.
pub fn universal_distribution(block_size: u32, k: u64) -> Result<(f64, f64), RandomnessError> {
    let &(_, mean, variance) = UNIVERSAL_DISTRIBUTION_TABLE
        .iter()
        .find(|&&(size, ..)| size == block_size)
        .ok_or_else(|| RandomnessError::InvalidInput("unsupported universal test block size".to_string()))?;
    let bs = f64::from(block_size);
    let c = 0.7 - 0.8 / bs + (4.0 + 32.0 / bs) * ((k as f64).powf(-3.0 / bs) / 15.0);
    let std = c * (variance / k as f64).sqrt();
    Ok((mean, std))
}

pub fn universal_impl(bits_val: &Integer, n: u64, block_size: u32, q: u64) -> Result<f64, RandomnessError> {
    let blocks = bits::split_sequence(bits_val, n, block_size);
    let k = blocks.len() as u64 - q;
    let (mean, std) = universal_distribution(block_size, k)?;

    let mut tab: HashMap<u64, i64> = HashMap::new();
    for (i, b) in blocks.iter().enumerate().take(q as usize) {
        let key = b.to_u64_wrapping();
        tab.insert(key, i as i64);
    }
    let mut sumb = 0.0f64;
    for j in q..(q + k) {
        let b = blocks[j as usize].to_u64_wrapping();
        let last = *tab.get(&b).unwrap_or(&-1);
        sumb += ((j as i64 - last) as f64).log2();
        tab.insert(b, j as i64);
    }
    let f = sumb / k as f64;
    Ok(erfc((f - mean).abs() / std / std::f64::consts::SQRT_2))
}

const UNIVERSAL_MIN_N: [(u32, u64); 11] = [
    (6, 387_840),
    (7, 904_960),
    (8, 2_068_480),
    (9, 4_654_080),
    (10, 10_342_400),
    (11, 22_753_280),
    (12, 49_643_520),
    (13, 107_560_960),
    (14, 231_669_760),
    (15, 496_435_200),
    (16, 1_059_061_760),
];

pub fn universal(bits_val: &Integer, n: u64) -> Result<f64, RandomnessError> {
    if n < UNIVERSAL_MIN_N[0].1 {
        return Err(RandomnessError::InsufficientData("not enough data for the universal test".to_string()));
    }
    // Replica literalmente la selección de `block_size` del original: toma el
    // tamaño MÁS PEQUEÑO entre los que ya satisfacen su propio umbral, que
    // para cualquier n admitido siempre resuelve a 6.
    let block_size = UNIVERSAL_MIN_N.iter().filter(|&&(_, bound)| bound <= n).map(|&(size, _)| size).min().unwrap();
    let q = 10 * 2u64.pow(block_size);
    universal_impl(bits_val, n, block_size, q)
}

/// 2.10 Linear Complexity Test, con un segundo p-value adicional que trata
/// las complejidades lineales como lanzamientos de moneda para detectar
/// valores extremos que el ajuste chi-cuadrado de NIST diluye.
#[must_use]
pub fn linear_complexity_impl(blocks: &[Integer], m: u32) -> NamedPValues {
    let lengths: Vec<u64> = blocks.iter().map(|b| lfsr_length(b, u64::from(m))).collect();
    let median = i64::from(m + 1) / 2;
    let pi: [f64; 7] = if m % 2 == 0 {
        [1.0 / 96.0, 1.0 / 32.0, 1.0 / 8.0, 1.0 / 2.0, 1.0 / 4.0, 1.0 / 16.0, 1.0 / 48.0]
    } else {
        [1.0 / 48.0, 1.0 / 16.0, 1.0 / 4.0, 1.0 / 2.0, 1.0 / 8.0, 1.0 / 32.0, 1.0 / 96.0]
    };
    let mut v = [0u64; 7];
    for &length in &lengths {
        let length = length as i64;
        if length <= median - 3 {
            v[0] += 1;
        } else if length >= median + 3 {
            v[6] += 1;
        } else {
            v[(length - median + 3) as usize] += 1;
        }
    }
    let p1 = chi_square(&v, &pi, Some(6)).unwrap_or(0.0);

    let q: i64 = -lengths.iter().map(|&c| lfsr_log_probability(u64::from(m), c)).sum::<i64>();
    let p2 = binomial_cdf(lengths.len() as i64 - 1, q - 1);
    vec![("distribution".to_string(), p1), ("extreme values".to_string(), p2)]
}

pub fn linear_complexity(bits_val: &Integer, n: u64, block_size: u32) -> Result<NamedPValues, RandomnessError> {
    if block_size < 10 {
        return Err(RandomnessError::InsufficientData("block size too small for the linear complexity test".to_string()));
    }
    if u64::from(block_size) * 200 > n {
        return Err(RandomnessError::InsufficientData("not enough blocks for the linear complexity test".to_string()));
    }
    let blocks = bits::split_sequence(bits_val, n, block_size);
    Ok(linear_complexity_impl(&blocks, block_size))
}

/// 2.11 Serial Test.
#[must_use]
pub fn serial(bits_val: &Integer, n: u64, m_max: Option<u32>) -> NamedPValues {
    let m_max = m_max.unwrap_or_else(|| {
        let bound = bit_length_u64(n) as i64 - 4;
        bound.clamp(2, 22) as u32
    });
    let mut v = vec![0.0f64; m_max as usize + 1];
    let mut count = bits::frequency_count(bits_val, n, m_max, true);
    for m in (1..=m_max).rev() {
        let sumc: f64 = count.iter().map(|&x| (x * x) as f64).sum();
        v[m as usize] = sumc * 2f64.powi(m as i32) / n as f64 - n as f64;
        count = (0..count.len()).step_by(2).map(|i| count[i] + count[i + 1]).collect();
    }
    let mut p_values = Vec::new();
    for m in 2..=m_max {
        let d_psi = v[m as usize] - v[m as usize - 1];
        let d2_psi = v[m as usize] - 2.0 * v[m as usize - 1] + v[m as usize - 2];
        let p1 = igamc(2f64.powi(m as i32 - 2), d_psi / 2.0);
        let p2 = igamc(2f64.powi(m as i32 - 3), d2_psi / 2.0);
        p_values.push((format!("m={m} p-value1"), p1));
        p_values.push((format!("m={m} p-value2"), p2));
    }
    p_values
}

/// 2.12 Approximate Entropy Test.
#[must_use]
pub fn compute_approximate_entropy(frequencies: &[u64]) -> f64 {
    let n: u64 = frequencies.iter().sum();
    let n = n as f64;
    frequencies
        .iter()
        .filter(|&&c| c != 0)
        .map(|&c| {
            let p = c as f64 / n;
            p * p.ln()
        })
        .sum()
}

#[must_use]
pub fn approximate_entropy(bits_val: &Integer, n: u64, m_max: Option<u32>) -> NamedPValues {
    let bl = bit_length_u64(n) as i64;
    let m_max = m_max.unwrap_or_else(|| {
        if n < (1u64 << 16) {
            (bl - 7).max(2) as u32
        } else if n < (1u64 << 20) {
            (bl - 8) as u32
        } else if n < (1u64 << 24) {
            (bl - 9) as u32
        } else {
            (bl - 10).min(22) as u32
        }
    });
    let mut phi: HashMap<u32, f64> = HashMap::new();
    let mut count = bits::frequency_count(bits_val, n, m_max + 1, true);
    for m in (2..=m_max + 1).rev() {
        phi.insert(m, compute_approximate_entropy(&count));
        count = (0..count.len()).step_by(2).map(|i| count[i] + count[i + 1]).collect();
    }
    let mut p_values = Vec::new();
    for m in 2..=m_max {
        let ap_em = phi[&m] - phi[&(m + 1)];
        let chi_square_val = 2.0 * n as f64 * (std::f64::consts::LN_2 - ap_em);
        let p_value = igamc(2f64.powi(m as i32 - 1), chi_square_val / 2.0);
        p_values.push((format!("m={m}"), p_value));
    }
    p_values
}

/// 2.13 Cumulative Sums (Cusum) Test — p-value de una dirección del paseo aleatorio.
#[must_use]
pub fn cumulative_sums_p_value(n: u64, z: i64) -> f64 {
    let n = n as f64;
    let z = z as f64;
    let t = z / (2.0 * n).sqrt();
    let mut res = 0.0f64;

    let mink = ((-n / z + 1.0) / 4.0).ceil() as i64;
    let maxk = ((n / z - 1.0) / 4.0).floor() as i64;
    let mut k = mink;
    while k <= maxk {
        let kf = k as f64;
        res += erf((4.0 * kf - 1.0) * t);
        res -= erf((4.0 * kf + 1.0) * t);
        k += 1;
    }

    let mink2 = ((-n / z - 3.0) / 4.0).ceil() as i64;
    let maxk2 = ((n / z - 1.0) / 4.0).floor() as i64;
    let mut k = mink2;
    while k <= maxk2 {
        let kf = k as f64;
        res -= erf((4.0 * kf + 1.0) * t);
        res += erf((4.0 * kf + 3.0) * t);
        k += 1;
    }
    1.0 + res / 2.0
}

/// 2.14 Random Excursions Test — distribución esperada del número de visitas a un estado.
#[must_use]
pub fn random_excursions_distribution(x: i64, max_cnt: usize) -> Vec<f64> {
    let mut pi = vec![0.0f64; max_cnt + 1];
    let t = 1.0 / (2.0 * x.unsigned_abs() as f64);
    pi[0] = 1.0 - t;
    for (k, slot) in pi.iter_mut().enumerate().take(max_cnt).skip(1) {
        *slot = t.powi(2) * (1.0 - t).powi(k as i32 - 1);
    }
    pi[max_cnt] = t * (1.0 - t).powi(max_cnt as i32 - 1);
    pi
}

/// 2.13 + 2.14 + 2.15, fusionados: un único paseo aleatorio alimenta las
/// sumas acumuladas, las excursiones y la variante de excursiones.
#[must_use]
pub fn random_walk(bits_val: &Integer, n: u64, max_state: i64, max_cnt: usize, max_state_variant: i64) -> NamedPValues {
    let max_state2 = max_state.max(max_state_variant);
    let mut s: i64 = 0;
    let mut maxs: i64 = 0;
    let mut mins: i64 = 0;
    let mut cnts: Vec<HashMap<i64, u64>> = Vec::new();
    let mut cnt: HashMap<i64, u64> = HashMap::new();

    for b in bits::balanced_bits(bits_val, n) {
        s += i64::from(b);
        if s > max_state2 {
            maxs = maxs.max(s);
        } else if s < -max_state2 {
            mins = mins.min(s);
        } else if s != 0 {
            *cnt.entry(s).or_insert(0) += 1;
        } else {
            cnts.push(std::mem::take(&mut cnt));
        }
    }
    cnts.push(cnt);

    let mut total_cnt: HashMap<i64, u64> = HashMap::new();
    for c in &cnts {
        for (&x, &v) in c {
            *total_cnt.entry(x).or_insert(0) += v;
        }
    }
    if maxs == 0 {
        maxs = total_cnt.keys().copied().max().unwrap_or(0);
    }
    if mins == 0 {
        mins = total_cnt.keys().copied().min().unwrap_or(0);
    }
    let excursions = cnts.len() as u64;

    let mut p_values = Vec::new();
    let max_dist_forward = maxs.max(-mins);
    let max_dist_backward = (maxs - s).max(s - mins);
    p_values.push(("cumulative sums forward".to_string(), cumulative_sums_p_value(n, max_dist_forward)));
    p_values.push(("cumulative sums reverse".to_string(), cumulative_sums_p_value(n, max_dist_backward)));

    if excursions >= 500 {
        for x in -max_state..=max_state {
            if x == 0 {
                continue;
            }
            let mut v = vec![0u64; max_cnt + 1];
            for c in &cnts {
                let observed = *c.get(&x).unwrap_or(&0);
                v[(observed as usize).min(max_cnt)] += 1;
            }
            let pi = random_excursions_distribution(x, max_cnt);
            let obs: f64 = (0..=max_cnt).map(|k| (v[k] as f64 - excursions as f64 * pi[k]).powi(2) / (excursions as f64 * pi[k])).sum();
            p_values.push((format!("random excursions {x}"), igamc(max_cnt as f64 / 2.0, obs / 2.0)));
        }
    }

    if excursions >= 500 {
        for x in -max_state_variant..=max_state_variant {
            if x == 0 {
                continue;
            }
            let observed = *total_cnt.get(&x).unwrap_or(&0) as i64;
            let obs = (excursions as i64 - observed).unsigned_abs() as f64 / (2.0 * excursions as f64 * (4.0 * x.unsigned_abs() as f64 - 2.0)).sqrt();
            p_values.push((format!("random excursions variant {x}"), erfc(obs)));
        }
    }
    p_values
}

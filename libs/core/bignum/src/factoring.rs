// [libs/core/bignum/src/factoring.rs]
/*!
 * =================================================================
 * APARATO: SPECIAL-CASE FACTORING (V1.0)
 * CLASIFICACIÓN: CORE NUMBER THEORY (ESTRATO L1)
 * RESPONSABILIDAD: FACTORIZACIÓN DE MÓDULOS RSA CON ESTRUCTURA DÉBIL
 *
 * Cada función aquí explota una forma distinta de debilidad estructural en
 * un módulo RSA n = p*q: cercanía de p y q (Fermat), coincidencia parcial de
 * bits altos/bajos, aproximaciones racionales de p/q (Lehman), p-1
 * powersmooth (Pollard), o bajo peso de Hamming de los factores.
 * =================================================================
 */

use crate::continued_fraction::continued_fraction;
use crate::dyadic::{inverse_2exp, inverse_sqrt_2exp};
use crate::errors::MathError;
use rug::Integer;
use std::collections::BinaryHeap;
use std::cmp::Ordering;

/// Factorización de Fermat: `n = a^2 - b^2 = (a+b)(a-b)`. Converge rápido
/// cuando los dos factores primos están próximos en magnitud.
pub fn fermat_factor(n: &Integer, max_steps: u64) -> Result<Option<(Integer, Integer)>, MathError> {
    if n.is_even() {
        return Ok(Some((Integer::from(2), Integer::from(n / 2))));
    }
    let floor_sqrt = n.clone().sqrt();
    if Integer::from(&floor_sqrt * &floor_sqrt) == *n {
        return Ok(Some((floor_sqrt.clone(), floor_sqrt)));
    }

    let mut a = floor_sqrt + 1;
    let mut b2 = Integer::from(&a * &a) - n;

    for _ in 0..max_steps {
        if b2.is_perfect_square() {
            let b = b2.sqrt();
            return Ok(Some((Integer::from(&a + &b), Integer::from(&a - &b))));
        }
        b2 += &a;
        a += 1;
        b2 += &a;
    }
    Ok(None)
}

/// Factoriza `n = p*q` cuando p y q comparten suficientes bits altos y
/// bajos: combina la raíz entera (bits altos de `(p+q)/2`) con una raíz
/// cuadrada 2-ádica (bits bajos de `(p+q)/2`).
pub fn factor_high_and_low_bits_equal(
    n: &Integer,
    middle_bits: u32,
) -> Result<Option<(Integer, Integer)>, MathError> {
    let bit_length = n.significant_bits();
    if bit_length < 6 {
        return Ok(None);
    }
    if Integer::from(n % 8) != 1 {
        return Ok(None);
    }

    let k = (bit_length + 1) / 2;
    let Some(inv_sqrt) = inverse_sqrt_2exp(n, k + 1)? else {
        return Ok(None);
    };
    let r0 = inverse_2exp(&inv_sqrt, k + 1)?;

    let a0: Integer = Integer::from(n - 1).sqrt() + 1;
    let candidates = [r0.clone(), (Integer::from(1) << k) - r0];

    for r in candidates {
        let mut s = a0.clone();
        for i in 0..k {
            let differing_bit = (Integer::from(&s ^ &r) >> i) & Integer::from(1);
            if differing_bit == 1 {
                let m = middle_bits.min(i);
                for _ in 0..(1u64 << m) {
                    s += Integer::from(1) << (i - m);
                    let d = Integer::from(&s * &s) - n;
                    if d >= 0 && d.is_perfect_square() {
                        let d_sqrt = d.sqrt();
                        return Ok(Some((Integer::from(&s - &d_sqrt), Integer::from(&s + &d_sqrt))));
                    }
                }
            }
        }
    }
    Ok(None)
}

/// Resultado de la búsqueda de fracción continua sobre `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContinuedFractionOutcome {
    /// El módulo no muestra un coeficiente anormalmente grande.
    Clean,
    /// Se encontró un coeficiente grande sin lograr factorizar.
    SuspiciousNoFactors,
    /// Factorización exitosa vía el polinomio cuadrático derivado.
    Factored(Integer, Integer),
}

/// Busca coeficientes anormalmente grandes en la fracción continua de `n`
/// respecto a la siguiente potencia de dos, e intenta factorizar vía el
/// polinomio cuadrático que resulta de la aproximación racional.
pub fn check_continued_fraction(n: &Integer, bound: &Integer) -> ContinuedFractionOutcome {
    let bit_length = n.significant_bits();
    let m = Integer::from(1) << bit_length;
    let x = Integer::from(1) << (bit_length / 2);

    for term in continued_fraction(n, &m) {
        let nv = Integer::from(n * &term.denominator);
        let (r, c) = crate::continued_fraction::divmod_rounded(&nv, &x);
        let (a, b) = crate::continued_fraction::divmod_rounded(&r, &x);
        if a != 0 && c != 0 {
            let discriminant = Integer::from(&b * &b) - Integer::from(4) * &a * &c;
            if discriminant >= 0 && discriminant.is_perfect_square() {
                let root = discriminant.sqrt();
                for signed_root in [root.clone(), -root] {
                    let candidate = Integer::from(2) * &a * &x + &b + signed_root;
                    let p = candidate.gcd(n);
                    if p > 1 && &p < n {
                        let q = Integer::from(n / &p);
                        return ContinuedFractionOutcome::Factored(p, q);
                    }
                }
            }
        }
        if &term.quotient >= bound {
            return ContinuedFractionOutcome::SuspiciousNoFactors;
        }
    }
    ContinuedFractionOutcome::Clean
}

/// Método de Lehman: factoriza `n` dada una aproximación `p0` de uno de sus
/// factores, explotando convergentes de la fracción continua de `p0/q0`.
pub fn factor_with_guess(n: &Integer, p0: &Integer) -> Result<Option<(Integer, Integer)>, MathError> {
    if *p0 == 0 {
        return Err(MathError::InvalidInput("p0 guess must be non-zero".into()));
    }
    let q0 = Integer::from(n / p0);
    let bits = n.significant_bits();
    let shift = (bits / 3).saturating_sub(52);
    let shifted = Integer::from(n >> (3 * shift));
    let bound = Integer::from(shifted.to_f64().cbrt() as i64) << shift;

    for term in continued_fraction(p0, &q0) {
        let (u, v) = (term.numerator.clone(), term.denominator.clone());
        let diff = Integer::from(&u * &q0) - Integer::from(&v * p0);
        if diff.clone().abs() < bound {
            let d = Integer::from(4) * &u * &v * n;
            let mut a = d.clone().sqrt();
            if Integer::from(&a * &a) < d {
                a += 1;
            }
            let a_sq_minus_d = Integer::from(&a * &a) - &d;
            if a_sq_minus_d >= 0 && a_sq_minus_d.is_perfect_square() {
                let b = a_sq_minus_d.sqrt();
                let g = Integer::from(&a + &b).gcd(n);
                if g > 1 && &g < n {
                    let other = Integer::from(n / &g);
                    return Ok(Some((g, other)));
                }
            }
            return Ok(None);
        }
    }
    Ok(None)
}

/// Busca `abs(p - q)` con una de las formas de brecha comúnmente mal
/// implementadas (malinterpretaciones del requisito de FIPS 186-4).
pub fn check_small_upper_differences(n: &Integer) -> Result<Option<(Integer, Integer)>, MathError> {
    let prime_size = n.significant_bits() / 2;
    if prime_size < 384 {
        return Ok(None);
    }

    let offsets: [u32; 6] = [100, 128, 160, 256, 2, 3];
    for offset in offsets {
        if prime_size <= offset {
            continue;
        }
        let diff = Integer::from(1) << (prime_size - offset);
        let half_diff = Integer::from(&diff / 2);
        let radicand = Integer::from(n + Integer::from(&half_diff * &half_diff));
        let p0 = radicand.sqrt() + &half_diff;
        if let Some(factors) = factor_with_guess(n, &p0)? {
            return Ok(Some(factors));
        }
    }
    Ok(None)
}

/// Resultado de un intento de Pollard p-1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollardOutcome {
    pub weak: bool,
    pub factors: Option<(Integer, Integer)>,
}

/// Prueba de Pollard p-1: detecta módulos donde `p - 1` (o `q - 1`) es
/// powersmooth respecto al exponente precalculado `m`.
pub fn pollard_pm1(n: &Integer, m: &Integer, gcd_bound: &Integer) -> PollardOutcome {
    let n_minus_1 = Integer::from(n - 1);
    if n_minus_1.clone().gcd(m) < *gcd_bound {
        return PollardOutcome { weak: false, factors: None };
    }
    let a = Integer::from(2).pow_mod(&n_minus_1, n).unwrap_or_else(|_| Integer::from(2));
    let b = a.pow_mod(m, n).unwrap_or_else(|_| Integer::from(0));
    let p = Integer::from(&b - 1).gcd(n);
    if p > 1 && &p < n {
        let q = Integer::from(n / &p);
        PollardOutcome { weak: true, factors: Some((p, q)) }
    } else if p == *n {
        PollardOutcome { weak: true, factors: None }
    } else {
        PollardOutcome { weak: false, factors: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HammingCandidate {
    heuristic: i64,
    hamming_weight: u32,
    remaining_bits: u32,
    p0: Integer,
    q0: Integer,
}

impl Ord for HammingCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap es un max-heap; se invierte para simular heapq (min-heap).
        other.heuristic.cmp(&self.heuristic)
    }
}
impl PartialOrd for HammingCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Resultado de la búsqueda de factores de bajo peso de Hamming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowHammingOutcome {
    pub potentially_weak: bool,
    pub factors: Option<(Integer, Integer)>,
}

/// Intenta factorizar `n` asumiendo que ambos factores primos tienen un
/// peso de Hamming inusualmente bajo, mediante una búsqueda de mejor-primero
/// sobre prefijos parciales de p y q.
pub fn check_low_hamming_weight(n: &Integer, cutoff: u64, maxsteps: u64) -> LowHammingOutcome {
    fn heuristic(hamming_weight: u32, rem_size: u32) -> i64 {
        rem_size as i64 + 5 * hamming_weight as i64
    }

    let bit_length = n.significant_bits();
    let threshold_cutoff = bit_length as i64;
    let threshold_weak = bit_length as i64 - 12;
    let psize = (bit_length + 1) / 2;

    let mut heap = BinaryHeap::new();
    let remainder = Integer::from(n - (Integer::from(1) << (2 * (psize - 1))));
    let mut minv = heuristic(2, remainder.significant_bits());
    heap.push(HammingCandidate {
        heuristic: minv,
        hamming_weight: 2,
        remaining_bits: psize - 1,
        p0: Integer::from(1),
        q0: Integer::from(1),
    });

    let mut steps = 0u64;
    while steps < maxsteps {
        let Some(top) = heap.pop() else { break };
        steps += 1;
        if steps == cutoff && minv >= threshold_cutoff {
            break;
        }
        if top.heuristic < minv {
            minv = top.heuristic;
        }

        let HammingCandidate { hamming_weight, mut remaining_bits, mut p0, mut q0, .. } = top;
        while remaining_bits >= 1 {
            p0 <<= 1;
            q0 <<= 1;
            remaining_bits -= 1;
            let n0 = Integer::from(n >> (2 * remaining_bits));

            let mut broke_out = false;
            for (dp, dq) in [(0u32, 1u32), (1, 0), (1, 1)] {
                let p_candidate = Integer::from(&p0 + dp);
                let q_candidate = Integer::from(&q0 + dq);
                let rem0 = Integer::from(&n0 - Integer::from(&p_candidate * &q_candidate));
                if rem0 < 0 {
                    broke_out = true;
                    break;
                }
                if remaining_bits > 0 {
                    if rem0 <= Integer::from(&p_candidate + &q_candidate) {
                        let rem_size = rem0.significant_bits() + 2 * remaining_bits;
                        if p_candidate <= q_candidate {
                            let candidate_hw = hamming_weight + dp + dq;
                            let v = heuristic(candidate_hw, rem_size);
                            heap.push(HammingCandidate {
                                heuristic: v,
                                hamming_weight: candidate_hw,
                                remaining_bits,
                                p0: p_candidate,
                                q0: q_candidate,
                            });
                        }
                    }
                } else if rem0 == 0 {
                    return LowHammingOutcome {
                        potentially_weak: true,
                        factors: Some((p_candidate, q_candidate)),
                    };
                }
            }
            if broke_out {
                break;
            }
        }
    }
    LowHammingOutcome { potentially_weak: minv <= threshold_weak, factors: None }
}

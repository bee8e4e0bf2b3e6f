// [libs/core/curve/src/dl.rs]
/*!
 * =================================================================
 * APARATO: BATCHED DISCRETE LOGARITHM (V1.0)
 * CLASIFICACIÓN: CORE EC KERNEL (ESTRATO L2)
 * RESPONSABILIDAD: BSGS POR LOTES, DL EXTENDIDO, DIFERENCIAS DE DL, HNP
 * =================================================================
 */

use crate::curve::Curve;
use crate::errors::CurveError;
use paranoid_models::prelude::AffinePoint;
use rug::Integer;
use std::collections::HashMap;
use tracing::instrument;

/// `BatchDL(points, bound)`: baby-step/giant-step. Precomputa una tabla de
/// pasos gigantes de tamaño ~ sqrt(bound) que mapea `[i*m]G -> i`; para cada
/// punto de entrada prueba `P + [j]G` para `j` en `[0, m)`, usando
/// `BatchAddSubtractX` para probar logaritmos positivos y negativos a la vez.
/// Retorna el logaritmo de cada entrada en `[-bound, bound]` o `None`.
#[instrument(skip(curve, points), level = "debug")]
pub fn batch_dl(curve: &Curve, points: &[AffinePoint], bound: &Integer) -> Result<Vec<Option<Integer>>, CurveError> {
    let m: Integer = Integer::from(bound.clone().sqrt()) + 1;
    let m_u64 = m.to_u64_wrapping();

    let g = AffinePoint::Finite(curve.params.g.0.clone(), curve.params.g.1.clone());
    let mg = curve.multiply(&g, &m);

    let mut giant_steps = HashMap::with_capacity(m_u64 as usize);
    let mut accumulator = AffinePoint::Infinity;
    for i in 0..=m_u64 {
        if let AffinePoint::Finite(x, _) = &accumulator {
            giant_steps.entry(x.clone()).or_insert(i);
        } else {
            giant_steps.entry(Integer::from(0) - 1).or_insert(i);
        }
        accumulator = curve.add_affine(&accumulator, &mg);
    }

    let mut baby_steps = Vec::with_capacity(m_u64 as usize);
    let mut step_point = AffinePoint::Infinity;
    for j in 0..m_u64 {
        baby_steps.push((j, step_point.clone()));
        step_point = curve.add_affine(&step_point, &g);
    }
    let baby_points: Vec<AffinePoint> = baby_steps.iter().map(|(_, p)| p.clone()).collect();

    let mut results = Vec::with_capacity(points.len());
    'point_loop: for point in points {
        let pairs = curve.batch_add_subtract_x(point, &baby_points)?;
        for (j, (sum_x, diff_x)) in pairs.into_iter().enumerate() {
            if let Some(x) = sum_x {
                if let Some(&i) = giant_steps.get(&x) {
                    // P + jG == [im]G  =>  log(P) == im - j
                    let candidate = Integer::from(i) * &m - j;
                    if candidate.clone().abs() <= *bound {
                        results.push(Some(candidate));
                        continue 'point_loop;
                    }
                }
            }
            if let Some(x) = diff_x {
                if let Some(&i) = giant_steps.get(&x) {
                    // P - jG == [im]G  =>  log(P) == im + j
                    let candidate = Integer::from(i) * &m + j;
                    if candidate.clone().abs() <= *bound {
                        results.push(Some(candidate));
                        continue 'point_loop;
                    }
                }
            }
        }
        results.push(None);
    }
    Ok(results)
}

/// `ExtendedBatchDL(points)`: ataca escalares privados con la forma
/// `sum a_i * 2^(32i)` con `a_i` pequeño, resolviendo una palabra de 32
/// bits a la vez vía `batch_dl`, restando su contribución y recursando.
pub fn extended_batch_dl(curve: &Curve, points: &[AffinePoint], words: u32, word_bound: u64) -> Result<Vec<Option<Integer>>, CurveError> {
    let mut remaining: Vec<AffinePoint> = points.to_vec();
    let mut accumulated = vec![Integer::from(0); points.len()];
    let mut solved = vec![true; points.len()];
    let g = AffinePoint::Finite(curve.params.g.0.clone(), curve.params.g.1.clone());

    for word in 0..words {
        let word_logs = batch_dl(curve, &remaining, &Integer::from(word_bound))?;
        for (i, log) in word_logs.into_iter().enumerate() {
            if !solved[i] {
                continue;
            }
            match log {
                Some(value) => {
                    accumulated[i] += Integer::from(&value << (32 * word));
                    let shift = Integer::from(1) << (32 * (word + 1));
                    let contribution = curve.multiply(&g, &Integer::from(&value << (32 * word)));
                    remaining[i] = curve.subtract_affine(&remaining[i], &contribution);
                    let _ = shift;
                }
                None => solved[i] = false,
            }
        }
    }

    Ok(accumulated
        .into_iter()
        .zip(solved)
        .map(|(value, ok)| ok.then_some(value))
        .collect())
}

/// `BatchDLOfDifferences(new_points, old_points, max_diff)`: detecta pares
/// cuyas claves privadas difieren en a lo sumo `max_diff`, computando
/// `BatchDL` sobre `P_i - P_j` para todos los pares (o nuevo-vs-viejo).
pub fn batch_dl_of_differences(
    curve: &Curve,
    new_points: &[AffinePoint],
    old_points: Option<&[AffinePoint]>,
    max_diff: &Integer,
) -> Result<Vec<((usize, usize), Integer)>, CurveError> {
    let reference = old_points.unwrap_or(new_points);
    let mut findings = Vec::new();

    for (i, p_i) in new_points.iter().enumerate() {
        let start = if old_points.is_some() { 0 } else { i + 1 };
        let candidates: Vec<AffinePoint> = reference[start..]
            .iter()
            .map(|p_j| curve.subtract_affine(p_i, p_j))
            .collect();
        if candidates.is_empty() {
            continue;
        }
        let logs = batch_dl(curve, &candidates, max_diff)?;
        for (offset, log) in logs.into_iter().enumerate() {
            if let Some(difference) = log {
                findings.push(((i, start + offset), difference));
            }
        }
    }
    Ok(findings)
}

/// `HiddenNumberParams(r, s, z)`: para una firma ECDSA, retorna `(a, b)`
/// tales que `k = a + b*x (mod n)` donde `k` es el nonce y `x` la clave
/// privada: `a = z/s mod n`, `b = r/s mod n`.
pub fn hidden_number_params(curve: &Curve, r: &Integer, s: &Integer, z: &Integer) -> Result<(Integer, Integer), CurveError> {
    let n = &curve.params.n;
    let s_inv = crate::field::inv_mod(s, n).map_err(|_| CurveError::InvalidInput("s has no inverse mod n".into()))?;
    let a = crate::field::mul_mod(z, &s_inv, n);
    let b = crate::field::mul_mod(r, &s_inv, n);
    Ok((a, b))
}

/// `TransformOrderLen(hash, hash_bit_len)`: trunca un hash ancho al número
/// de bits del orden de la curva, siguiendo la convención ECDSA/DSA.
#[must_use]
pub fn transform_order_len(curve: &Curve, hash: &Integer, hash_bit_len: u32) -> Integer {
    let n_bit_len = curve.params.n.significant_bits();
    if hash_bit_len <= n_bit_len {
        return hash.clone();
    }
    Integer::from(hash >> (hash_bit_len - n_bit_len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::lookup;

    #[test]
    fn batch_dl_recovers_small_known_scalars() {
        let curve = lookup("secp256k1").unwrap();
        let g = AffinePoint::Finite(curve.params.g.0.clone(), curve.params.g.1.clone());
        let scalars = [3u64, 17, 100, 777];
        let points: Vec<AffinePoint> = scalars.iter().map(|s| curve.multiply(&g, &Integer::from(*s))).collect();

        let logs = batch_dl(curve, &points, &Integer::from(2000u64)).unwrap();
        for (expected, found) in scalars.iter().zip(logs.iter()) {
            assert_eq!(found.as_ref().unwrap(), &Integer::from(*expected));
        }
    }

    #[test]
    fn batch_dl_of_differences_finds_close_pair() {
        let curve = lookup("secp256k1").unwrap();
        let g = AffinePoint::Finite(curve.params.g.0.clone(), curve.params.g.1.clone());
        let base = Integer::from(123_456_789u64);
        let p1 = curve.multiply(&g, &base);
        let p2 = curve.multiply(&g, &(base.clone() + 42));

        let findings = batch_dl_of_differences(curve, &[p1, p2], None, &Integer::from(100u64)).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].1.clone().abs(), Integer::from(42));
    }

    #[test]
    fn hidden_number_params_reconstructs_nonce_relation() {
        let curve = lookup("secp256k1").unwrap();
        let n = &curve.params.n;
        let x = Integer::from(999_999_937u64);
        let k = Integer::from(123_456u64);
        let r = Integer::from(42_000u64); // synthetic, relation-only test
        let s = crate::field::mul_mod(
            &crate::field::inv_mod(&k, n).unwrap(),
            &(Integer::from(&r * &x) + Integer::from(7)),
            n,
        );
        let z = Integer::from(7);

        let (a, b) = hidden_number_params(curve, &r, &s, &z).unwrap();
        let reconstructed_k = crate::field::add_mod(&a, &crate::field::mul_mod(&b, &x, n), n);
        assert_eq!(reconstructed_k, k);
    }
}

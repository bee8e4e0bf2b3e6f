// [libs/core/curve/src/field.rs]
/*!
 * =================================================================
 * APARATO: MODULAR FIELD ARITHMETIC (V1.0)
 * CLASIFICACIÓN: CORE EC KERNEL (ESTRATO L2)
 * RESPONSABILIDAD: ARITMÉTICA MODULAR GENÉRICA (MÓDULO DE ANCHO VARIABLE)
 *
 * A diferencia del kernel de la línea original (limbs fijos de 256 bits,
 * secp256k1 únicamente), este módulo opera sobre un módulo `p` arbitrario
 * pasado explícitamente, para servir P-192 hasta P-521 y las curvas
 * Brainpool con la misma aritmética.
 * =================================================================
 */

use crate::errors::CurveError;
use rug::Integer;

/// Reduce `x` al representante no negativo en `[0, p)`.
#[must_use]
pub fn reduce(x: &Integer, p: &Integer) -> Integer {
    let mut r = Integer::from(x % p);
    if r < 0 {
        r += p;
    }
    r
}

#[must_use]
pub fn add_mod(a: &Integer, b: &Integer, p: &Integer) -> Integer {
    reduce(&(Integer::from(a + b)), p)
}

#[must_use]
pub fn sub_mod(a: &Integer, b: &Integer, p: &Integer) -> Integer {
    reduce(&(Integer::from(a - b)), p)
}

#[must_use]
pub fn mul_mod(a: &Integer, b: &Integer, p: &Integer) -> Integer {
    reduce(&(Integer::from(a * b)), p)
}

#[must_use]
pub fn neg_mod(a: &Integer, p: &Integer) -> Integer {
    reduce(&(Integer::from(-a)), p)
}

/// Inversa modular vía el algoritmo extendido de Euclides (`rug::Integer::invert`).
pub fn inv_mod(a: &Integer, p: &Integer) -> Result<Integer, CurveError> {
    let reduced = reduce(a, p);
    reduced
        .clone()
        .invert(p)
        .map_err(|_| CurveError::NonInvertible(format!("{reduced} has no inverse mod {p}")))
}

/// Inversión por lotes vía el truco de Montgomery: una única inversión
/// modular más `O(m)` multiplicaciones, en vez de `m` inversiones.
/// Las entradas que son cero mod `p` producen `None` en la posición
/// correspondiente y no participan en el producto acumulado.
pub fn batch_invert(values: &[Integer], p: &Integer) -> Result<Vec<Option<Integer>>, CurveError> {
    let reduced: Vec<Integer> = values.iter().map(|v| reduce(v, p)).collect();

    let mut prefix = Vec::with_capacity(reduced.len() + 1);
    prefix.push(Integer::from(1));
    for value in &reduced {
        let previous = prefix.last().unwrap().clone();
        if *value == 0 {
            prefix.push(previous);
        } else {
            prefix.push(mul_mod(&previous, value, p));
        }
    }

    let total = prefix.last().unwrap().clone();
    let mut accumulated_inverse = inv_mod(&total, p)?;

    let mut results = vec![None; reduced.len()];
    for i in (0..reduced.len()).rev() {
        if reduced[i] == 0 {
            continue;
        }
        let inverse_i = mul_mod(&accumulated_inverse, &prefix[i], p);
        results[i] = Some(inverse_i);
        accumulated_inverse = mul_mod(&accumulated_inverse, &reduced[i], p);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_prime() -> Integer {
        Integer::from(1_000_003u64)
    }

    #[test]
    fn inv_mod_round_trips() {
        let p = small_prime();
        let a = Integer::from(123_456u64);
        let inverse = inv_mod(&a, &p).unwrap();
        assert_eq!(mul_mod(&a, &inverse, &p), Integer::from(1));
    }

    #[test]
    fn batch_invert_matches_pointwise_inverse() {
        let p = small_prime();
        let values: Vec<Integer> = (1u64..20).map(Integer::from).collect();
        let batched = batch_invert(&values, &p).unwrap();
        for (value, batched_inv) in values.iter().zip(batched.iter()) {
            let pointwise = inv_mod(value, &p).unwrap();
            assert_eq!(batched_inv.as_ref().unwrap(), &pointwise);
        }
    }

    #[test]
    fn batch_invert_skips_zero_entries() {
        let p = small_prime();
        let values = vec![Integer::from(0), Integer::from(5)];
        let batched = batch_invert(&values, &p).unwrap();
        assert!(batched[0].is_none());
        assert!(batched[1].is_some());
    }
}

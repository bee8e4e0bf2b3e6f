// [libs/core/bignum/src/dyadic.rs]
/*!
 * =================================================================
 * APARATO: DYADIC (2-ÁDICA) ARITHMETIC KERNEL (V1.0)
 * CLASIFICACIÓN: CORE NUMBER THEORY (ESTRATO L1)
 * RESPONSABILIDAD: INVERSAS Y RAÍCES CUADRADAS MÓDULO POTENCIAS DE DOS
 *
 * Newton-Hensel lifting: dado un invariante de bucle correcto módulo 2^t,
 * cada iteración duplica (o casi duplica) t hasta alcanzar k. Usado para
 * recuperar los bits bajos de (p+q)/2 en `FactorHighAndLowBitsEqual`.
 * =================================================================
 */

use crate::errors::MathError;
use rug::Integer;

fn low_bits(value: &Integer, bits: u32) -> Integer {
    let mut masked = value.clone();
    masked.keep_bits_mut(bits);
    masked
}

/// Inversa de `n` módulo `2^k`. Requiere `n` impar.
pub fn inverse_2exp(n: &Integer, k: u32) -> Result<Integer, MathError> {
    if n.is_even() {
        return Err(MathError::InvalidInput("inverse_2exp requires an odd value".into()));
    }
    if k == 0 {
        return Ok(Integer::from(0));
    }
    let mut a = low_bits(n, 2.min(k));
    let mut t = 2u32.min(k);
    while t < k {
        t = k.min(2 * t);
        // invariante de bucle: a*n % 2^t == 1
        let two_minus_an = Integer::from(2) - Integer::from(&a * n);
        a = low_bits(&(a * two_minus_an), t);
    }
    Ok(a)
}

/// Inversa de la raíz cuadrada de `n` módulo `2^k`: `a` tal que `a*a*n % 2^k == 1`.
/// Requiere `n % 8 == 1` para `k >= 3`.
pub fn inverse_sqrt_2exp(n: &Integer, k: u32) -> Result<Option<Integer>, MathError> {
    if k < 3 {
        let modulus = Integer::from(1) << k;
        let mut a = Integer::from(0);
        while a < modulus {
            let candidate = Integer::from(&a * &a) * n.clone() % &modulus;
            if candidate == 1 {
                return Ok(Some(a));
            }
            a += 1;
        }
        return Ok(None);
    }
    let residue = Integer::from(n % 8);
    if residue != 1 {
        return Ok(None);
    }
    let mut a = Integer::from(1);
    let mut t = 3u32;
    while t < k {
        t = k.min(2 * t - 2);
        // invariante de bucle: a^2 * n % 2^t == 1
        let a_sq_n = Integer::from(&a * &a) * n.clone();
        let m = (Integer::from(3) - a_sq_n) / 2;
        a = low_bits(&(a * m), t);
    }
    Ok(Some(a))
}

/// Todas las raíces cuadradas de `n` módulo `2^k` (`n` debe ser impar).
/// Existen 0 o 4 raíces para `k >= 3`.
pub fn sqrt_2exp(n: &Integer, k: u32) -> Result<Vec<Integer>, MathError> {
    if n.is_even() {
        return Err(MathError::InvalidInput(
            "sqrt_2exp is not implemented for even inputs".into(),
        ));
    }
    let modulus = Integer::from(1) << k;
    if k < 3 {
        let mut roots = Vec::new();
        let mut x = Integer::from(0);
        while x < modulus {
            if Integer::from(&x * &x - n) % &modulus == 0 {
                roots.push(x.clone());
            }
            x += 1;
        }
        return Ok(roots);
    }
    let Some(s) = inverse_sqrt_2exp(n, k)? else {
        return Ok(Vec::new());
    };
    let r = inverse_2exp(&s, k)?;
    let half = Integer::from(1) << (k - 1);
    let roots = vec![
        r.clone(),
        Integer::from(&modulus - &r),
        low_bits(&(Integer::from(&half - &r)), k),
        low_bits(&(Integer::from(&half + &r)), k),
    ];
    Ok(roots)
}

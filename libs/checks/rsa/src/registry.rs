// [libs/checks/rsa/src/registry.rs]
/*!
 * =================================================================
 * APARATO: RSA CHECK REGISTRY (V1.0)
 * CLASIFICACIÓN: RSA CHECKS (ESTRATO L2)
 * RESPONSABILIDAD: ORDEN FIJO DE EJECUCIÓN DE LOS 16 CHEQUEOS (§4.H)
 *
 * El orquestador itera este registro en orden y acumula el OR de cada
 * veredicto; el orden es estable entre llamadas para que los tiempos
 * reportados sean comparables.
 * =================================================================
 */

use crate::checks::{self, RsaCheckConfig, RsaCheckContext};
use paranoid_models::prelude::{RsaKey, TestInfo};

/// Un único chequeo registrado, ejecutable contra un lote de claves.
pub struct RsaCheckEntry {
    pub name: &'static str,
    pub run: fn(&[RsaKey], &mut [TestInfo], &RsaCheckContext) -> bool,
}

/// Retorna el registro ordenado de chequeos RSA, tal como lo consume
/// `CheckAllRSA` en paranoid-orchestrator.
#[must_use]
pub fn ordered_checks() -> &'static [RsaCheckEntry] {
    &[
        RsaCheckEntry { name: "CheckSizes", run: |k, i, _| checks::check_sizes(k, i) },
        RsaCheckEntry { name: "CheckExponents", run: |k, i, _| checks::check_exponents(k, i) },
        RsaCheckEntry { name: "CheckROCA", run: |k, i, _| checks::check_roca(k, i) },
        RsaCheckEntry { name: "CheckROCAVariant", run: |k, i, _| checks::check_roca_variant(k, i) },
        RsaCheckEntry {
            name: "CheckFermat",
            run: |k, i, _| checks::check_fermat(k, i, RsaCheckConfig::default().fermat_max_steps),
        },
        RsaCheckEntry {
            name: "CheckHighAndLowBitsEqual",
            run: |k, i, _| checks::check_high_and_low_bits_equal(k, i),
        },
        RsaCheckEntry {
            name: "CheckOpensslDenylist",
            run: |k, i, ctx| checks::check_openssl_denylist(k, i, ctx),
        },
        RsaCheckEntry {
            name: "CheckContinuedFractions",
            run: |k, i, _| checks::check_continued_fractions(k, i),
        },
        RsaCheckEntry { name: "CheckBitPatterns", run: |k, i, _| checks::check_bit_patterns(k, i) },
        RsaCheckEntry {
            name: "CheckPermutedBitPatterns",
            run: |k, i, _| checks::check_permuted_bit_patterns(k, i),
        },
        RsaCheckEntry {
            name: "CheckPollardpm1",
            run: |k, i, _| checks::check_pollard_pm1_default(k, i, &RsaCheckConfig::default()),
        },
        RsaCheckEntry {
            name: "CheckLowHammingWeight",
            run: |k, i, _| checks::check_low_hamming_weight(k, i, &RsaCheckConfig::default()),
        },
        RsaCheckEntry {
            name: "CheckUnseededRand",
            run: |k, i, ctx| checks::check_unseeded_rand(k, i, ctx),
        },
        RsaCheckEntry {
            name: "CheckSmallUpperDifferences",
            run: |k, i, _| checks::check_small_upper_differences(k, i),
        },
        RsaCheckEntry {
            name: "CheckKeypairDenylist",
            run: |k, i, ctx| checks::check_keypair_denylist(k, i, ctx),
        },
        RsaCheckEntry { name: "CheckGCD", run: |k, i, _| checks::check_gcd(k, i) },
        RsaCheckEntry {
            name: "CheckGCDN1",
            run: |k, i, _| checks::check_gcd_n1_default(k, i, &RsaCheckConfig::default()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_checks_lists_all_sixteen_in_spec_order() {
        let names: Vec<&str> = ordered_checks().iter().map(|c| c.name).collect();
        assert_eq!(names.len(), 16);
        assert_eq!(names[0], "CheckSizes");
        assert_eq!(names[names.len() - 1], "CheckGCDN1");
    }
}

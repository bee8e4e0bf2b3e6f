// [libs/checks/ec/src/registry.rs]
/*!
 * =================================================================
 * APARATO: EC/ECDSA CHECK REGISTRY (V1.0)
 * CLASIFICACIÓN: EC/ECDSA CHECKS (ESTRATO L2)
 * RESPONSABILIDAD: ORDEN FIJO DE EJECUCIÓN DE LOS 12 CHEQUEOS DE §4.G
 *
 * Dos registros, espejo de los dos puntos de entrada CheckAllEC y
 * CheckAllECDSASigs de paranoid-orchestrator: el primero opera sobre
 * `EcKey` (claves públicas desnudas), el segundo sobre `EcdsaSignature`
 * (firmas junto a su clave emisora).
 * =================================================================
 */

use crate::checks;
use paranoid_models::prelude::{EcKey, EcdsaSignature, TestInfo};

pub struct EcKeyCheckEntry {
    pub name: &'static str,
    pub run: fn(&[EcKey], &mut [TestInfo]) -> bool,
}

pub struct EcdsaSigCheckEntry {
    pub name: &'static str,
    pub run: fn(&[EcdsaSignature], &mut [TestInfo]) -> bool,
}

/// Los 3 chequeos de clave única más el agregado de diferencias (§4.G,
/// filas 1-4), tal como los consume `CheckAllEC`.
#[must_use]
pub fn ordered_ec_checks() -> &'static [EcKeyCheckEntry] {
    &[
        EcKeyCheckEntry { name: "CheckValidECKey", run: checks::check_valid_ec_key },
        EcKeyCheckEntry { name: "CheckWeakCurve", run: checks::check_weak_curve },
        EcKeyCheckEntry { name: "CheckWeakECPrivateKey", run: checks::check_weak_ec_private_key },
        EcKeyCheckEntry { name: "CheckECKeySmallDifference", run: checks::check_ec_key_small_difference },
    ]
}

/// Los 8 chequeos de firma ECDSA (§4.G, filas 5-8), tal como los consume
/// `CheckAllECDSASigs`. `CheckCr50U2f` propaga su `ArithmeticBug` como un
/// pánico: es un error de programación, nunca un veredicto "no débil".
#[must_use]
pub fn ordered_ecdsa_sig_checks() -> &'static [EcdsaSigCheckEntry] {
    &[
        EcdsaSigCheckEntry { name: "CheckLCGNonceGMP", run: checks::check_lcg_nonce_gmp },
        EcdsaSigCheckEntry { name: "CheckLCGNonceJavaUtilRandom", run: checks::check_lcg_nonce_java_util_random },
        EcdsaSigCheckEntry { name: "CheckNonceMSB", run: checks::check_nonce_msb },
        EcdsaSigCheckEntry { name: "CheckNonceCommonPrefix", run: checks::check_nonce_common_prefix },
        EcdsaSigCheckEntry { name: "CheckNonceCommonPostfix", run: checks::check_nonce_common_postfix },
        EcdsaSigCheckEntry { name: "CheckNonceGeneralized", run: checks::check_nonce_generalized },
        EcdsaSigCheckEntry { name: "CheckIssuerKey", run: checks::check_issuer_key },
        EcdsaSigCheckEntry {
            name: "CheckCr50U2f",
            run: |s, i| checks::check_cr50_u2f(s, i).expect("cr50 self-consistency check must never fail"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_ec_checks_lists_all_four() {
        let names: Vec<&str> = ordered_ec_checks().iter().map(|c| c.name).collect();
        assert_eq!(names, ["CheckValidECKey", "CheckWeakCurve", "CheckWeakECPrivateKey", "CheckECKeySmallDifference"]);
    }

    #[test]
    fn ordered_ecdsa_sig_checks_lists_all_eight() {
        let names: Vec<&str> = ordered_ecdsa_sig_checks().iter().map(|c| c.name).collect();
        assert_eq!(names.len(), 8);
        assert_eq!(names[0], "CheckLCGNonceGMP");
        assert_eq!(names[names.len() - 1], "CheckCr50U2f");
    }
}

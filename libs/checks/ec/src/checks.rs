// [libs/checks/ec/src/checks.rs]
/*!
 * =================================================================
 * APARATO: EC AND ECDSA-SIGNATURE CHECKS (V1.0)
 * CLASIFICACIÓN: EC/ECDSA CHECKS (ESTRATO L2)
 * RESPONSABILIDAD: LOS 10 CHEQUEOS DE §4.G
 *
 * Tres familias de entrada: chequeos de clave única (`EcKey`), el
 * agregado de diferencias (`EcKey` por lotes agrupados por curva), y los
 * chequeos de firma ECDSA (`EcdsaSignature`, agrupados por emisor). Todos
 * los chequeos de firma deduplican triples (r,s,z) antes de construir el
 * problema HNP/Cr50, y una debilidad de emisor se propaga a TODAS las
 * firmas de ese emisor en el lote.
 * =================================================================
 */

use crate::errors::CheckError;
use crate::lcg::{gmp_lc_catalog, java_util_random_catalog};
use paranoid_core_curve::dl::{batch_dl_of_differences, extended_batch_dl, hidden_number_params};
use paranoid_core_curve::registry::{approved_curve_ids, lookup};
use paranoid_lattice::cr50::{solve_cr50_u2f, EcdsaSample};
use paranoid_lattice::hnp::{solve as solve_hnp, solve_for_curve_with_catalog, BiasKind, SearchStrategy};
use paranoid_models::prelude::*;
use std::collections::{BTreeMap, HashSet};
use tracing::instrument;

const WEAK_PRIVATE_KEY_WORD_BOUND: u64 = 1 << 20;
const SMALL_DIFFERENCE_BOUND_BITS: u32 = 24;
const HNP_SUBSET_SIZES: [usize; 3] = [24, 48, 120];

/// Parámetros ajustables de los chequeos de firma EC/ECDSA acotados por
/// heurísticas sin un valor canónico único en la fuente original (§10.3).
#[derive(Debug, Clone)]
pub struct EcCheckConfig {
    /// El sesgo w por defecto de la retícula HNP se toma como
    /// `2^(bitlen(n) / hnp_bias_bit_fraction)`.
    pub hnp_bias_bit_fraction: u32,
}

impl Default for EcCheckConfig {
    fn default() -> Self {
        Self { hnp_bias_bit_fraction: 4 }
    }
}

/// Ventana de sesgo asumida para el problema del número oculto, sustituyendo
/// la tabla ajustada por experimentos de la línea original (ver DESIGN.md).
fn default_bias_window(n: &rug::Integer, config: &EcCheckConfig) -> rug::Integer {
    rug::Integer::from(1) << (n.significant_bits() / config.hnp_bias_bit_fraction)
}

fn issuer_group_key(key: &EcKey) -> String {
    match &key.point {
        AffinePoint::Finite(x, y) => format!("{}|{x}|{y}", key.curve_id),
        AffinePoint::Infinity => format!("{}|inf", key.curve_id),
    }
}

fn group_ec_keys_by_curve(keys: &[EcKey]) -> BTreeMap<String, Vec<usize>> {
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, key) in keys.iter().enumerate() {
        groups.entry(key.curve_id.clone()).or_default().push(i);
    }
    groups
}

fn group_sigs_by_issuer(sigs: &[EcdsaSignature]) -> BTreeMap<String, Vec<usize>> {
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, sig) in sigs.iter().enumerate() {
        groups.entry(issuer_group_key(&sig.issuer)).or_default().push(i);
    }
    groups
}

/// Conserva un índice representativo por cada triple (r,s,hash) distinto,
/// en el orden de aparición.
fn dedupe_by_triple(indices: &[usize], sigs: &[EcdsaSignature]) -> Vec<usize> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for &i in indices {
        let sig = &sigs[i];
        let key = (sig.r.to_string(), sig.s.to_string(), sig.message_hash.to_string());
        if seen.insert(key) {
            unique.push(i);
        }
    }
    unique
}

fn mark_indices(infos: &mut [TestInfo], indices: &[usize], check_name: &str, severity: Severity, weak: bool) {
    for &i in indices {
        infos[i].record_check(check_name, severity, weak);
    }
}

fn attach_evidence_to(infos: &mut [TestInfo], indices: &[usize], key: &str, value: &str) {
    for &i in indices {
        infos[i].attach_evidence(key, value);
    }
}

#[instrument(skip(keys, infos))]
pub fn check_valid_ec_key(keys: &[EcKey], infos: &mut [TestInfo]) -> bool {
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let weak = match &key.point {
            AffinePoint::Infinity => true,
            AffinePoint::Finite(..) => match lookup(&key.curve_id) {
                Ok(curve) => !curve.on_curve(&key.point),
                Err(_) => true,
            },
        };
        any_weak |= weak;
        info.record_check("CheckValidECKey", Severity::Critical, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos))]
pub fn check_weak_curve(keys: &[EcKey], infos: &mut [TestInfo]) -> bool {
    let approved: HashSet<&str> = approved_curve_ids().collect();
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let weak = !approved.contains(key.curve_id.as_str());
        any_weak |= weak;
        info.record_check("CheckWeakCurve", Severity::High, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos))]
pub fn check_weak_ec_private_key(keys: &[EcKey], infos: &mut [TestInfo]) -> bool {
    let mut any_weak = false;
    for (curve_id, indices) in group_ec_keys_by_curve(keys) {
        let Ok(curve) = lookup(&curve_id) else { continue };
        let points: Vec<AffinePoint> = indices.iter().map(|&i| keys[i].point.clone()).collect();
        let words = curve.params.n.significant_bits().div_ceil(32);
        let Ok(scalars) = extended_batch_dl(curve, &points, words, WEAK_PRIVATE_KEY_WORD_BOUND) else { continue };

        for (&i, scalar) in indices.iter().zip(scalars.into_iter()) {
            let weak = match &scalar {
                Some(x) => curve.multiply_g(x) == keys[i].point,
                None => false,
            };
            if weak {
                infos[i].attach_evidence("private_key", scalar.unwrap().to_string());
            }
            any_weak |= weak;
            infos[i].record_check("CheckWeakECPrivateKey", Severity::Critical, weak);
        }
    }
    any_weak
}

#[instrument(skip(keys, infos))]
pub fn check_ec_key_small_difference(keys: &[EcKey], infos: &mut [TestInfo]) -> bool {
    let max_diff = rug::Integer::from(1) << SMALL_DIFFERENCE_BOUND_BITS;
    let mut any_weak = false;
    for (_, indices) in group_ec_keys_by_curve(keys) {
        if indices.len() < 2 {
            mark_indices(infos, &indices, "CheckECKeySmallDifference", Severity::High, false);
            continue;
        }
        let Ok(curve) = lookup(&keys[indices[0]].curve_id) else {
            mark_indices(infos, &indices, "CheckECKeySmallDifference", Severity::High, false);
            continue;
        };
        let points: Vec<AffinePoint> = indices.iter().map(|&i| keys[i].point.clone()).collect();
        let Ok(findings) = batch_dl_of_differences(curve, &points, None, &max_diff) else {
            mark_indices(infos, &indices, "CheckECKeySmallDifference", Severity::High, false);
            continue;
        };

        let mut weak_local: HashSet<usize> = HashSet::new();
        for ((local_i, local_j), difference) in findings {
            let (i, j) = (indices[local_i], indices[local_j]);
            attach_evidence_to(infos, &[i, j], "private_key_difference", &difference.to_string());
            weak_local.insert(local_i);
            weak_local.insert(local_j);
        }
        any_weak |= !weak_local.is_empty();
        for (local_i, &i) in indices.iter().enumerate() {
            infos[i].record_check("CheckECKeySmallDifference", Severity::High, weak_local.contains(&local_i));
        }
    }
    any_weak
}

/// Ejecuta los tres chequeos de clave única sobre conjeturas HNP/LCG
/// contrastándolas con `curve.MultiplyG` y el punto emisor conocido.
fn match_guesses_against_issuer(
    curve: &paranoid_core_curve::curve::Curve,
    guesses: &[rug::Integer],
    issuer_point: &AffinePoint,
) -> Option<rug::Integer> {
    guesses.iter().find(|g| curve.multiply_g(g) == *issuer_point).cloned()
}

fn run_bias_check(sigs: &[EcdsaSignature], infos: &mut [TestInfo], kind: BiasKind, check_name: &str, config: &EcCheckConfig) -> bool {
    let mut any_weak = false;
    for (_, indices) in group_sigs_by_issuer(sigs) {
        let unique = dedupe_by_triple(&indices, sigs);
        let issuer = &sigs[indices[0]].issuer;
        let Ok(curve) = lookup(&issuer.curve_id) else {
            mark_indices(infos, &indices, check_name, Severity::Critical, false);
            continue;
        };
        let n = &curve.params.n;
        let w = default_bias_window(n, config);

        let mut weak = false;
        'sizes: for &size in &HNP_SUBSET_SIZES {
            let exhausted = unique.len() <= size;
            let chunks: Vec<&[usize]> = if exhausted { vec![&unique[..]] } else { unique.chunks(size).collect() };
            for window in chunks {
                let params: Vec<(rug::Integer, rug::Integer)> = window
                    .iter()
                    .filter_map(|&i| hidden_number_params(curve, &sigs[i].r, &sigs[i].s, &sigs[i].message_hash).ok())
                    .collect();
                if params.len() != window.len() {
                    continue;
                }
                let (a, b): (Vec<rug::Integer>, Vec<rug::Integer>) = params.into_iter().unzip();
                let Ok(guesses) = solve_hnp(kind, n, &w, &a, &b) else { continue };
                if let Some(x) = match_guesses_against_issuer(curve, &guesses, &issuer.point) {
                    attach_evidence_to(infos, &indices, "private_key", &x.to_string());
                    weak = true;
                    break 'sizes;
                }
            }
            if exhausted {
                break;
            }
        }
        any_weak |= weak;
        mark_indices(infos, &indices, check_name, Severity::Critical, weak);
    }
    any_weak
}

pub fn check_nonce_msb(sigs: &[EcdsaSignature], infos: &mut [TestInfo]) -> bool {
    run_bias_check(sigs, infos, BiasKind::Msb, "CheckNonceMSB", &EcCheckConfig::default())
}

pub fn check_nonce_common_prefix(sigs: &[EcdsaSignature], infos: &mut [TestInfo]) -> bool {
    run_bias_check(sigs, infos, BiasKind::CommonPrefix, "CheckNonceCommonPrefix", &EcCheckConfig::default())
}

pub fn check_nonce_common_postfix(sigs: &[EcdsaSignature], infos: &mut [TestInfo]) -> bool {
    run_bias_check(sigs, infos, BiasKind::CommonPostfix, "CheckNonceCommonPostfix", &EcCheckConfig::default())
}

pub fn check_nonce_generalized(sigs: &[EcdsaSignature], infos: &mut [TestInfo]) -> bool {
    run_bias_check(sigs, infos, BiasKind::Generalized, "CheckNonceGeneralized", &EcCheckConfig::default())
}

/// Ejecuta un catálogo LCG completo contra las firmas de cada emisor,
/// generando los subconjuntos SLIDING/SINGLE/INCLUDE_KEY de §4.E para cada
/// entrada del catálogo en vez de un único test sobre el lote completo.
fn run_lcg_check(sigs: &[EcdsaSignature], infos: &mut [TestInfo], catalog: &[paranoid_lattice::hnp::LcgCatalogEntry], check_name: &str) -> bool {
    let mut any_weak = false;
    for (_, indices) in group_sigs_by_issuer(sigs) {
        let unique = dedupe_by_triple(&indices, sigs);
        let issuer = &sigs[indices[0]].issuer;
        let Ok(curve) = lookup(&issuer.curve_id) else {
            mark_indices(infos, &indices, check_name, Severity::Critical, false);
            continue;
        };
        if unique.is_empty() {
            mark_indices(infos, &indices, check_name, Severity::Critical, false);
            continue;
        }
        let n = &curve.params.n;

        let mut a = Vec::with_capacity(unique.len());
        let mut b = Vec::with_capacity(unique.len());
        for &i in &unique {
            let sig = &sigs[i];
            if let Ok((ai, bi)) = hidden_number_params(curve, &sig.r, &sig.s, &sig.message_hash) {
                a.push(ai);
                b.push(bi);
            }
        }

        let weak = if a.len() == unique.len() {
            match solve_for_curve_with_catalog(n, &a, &b, catalog, SearchStrategy::DEFAULT) {
                Ok(guesses) => match_guesses_against_issuer(curve, &guesses, &issuer.point)
                    .map(|x| {
                        attach_evidence_to(infos, &indices, "private_key", &x.to_string());
                        true
                    })
                    .unwrap_or(false),
                Err(_) => false,
            }
        } else {
            false
        };
        any_weak |= weak;
        mark_indices(infos, &indices, check_name, Severity::Critical, weak);
    }
    any_weak
}

pub fn check_lcg_nonce_gmp(sigs: &[EcdsaSignature], infos: &mut [TestInfo]) -> bool {
    run_lcg_check(sigs, infos, &gmp_lc_catalog(), "CheckLCGNonceGMP")
}

pub fn check_lcg_nonce_java_util_random(sigs: &[EcdsaSignature], infos: &mut [TestInfo]) -> bool {
    run_lcg_check(sigs, infos, &java_util_random_catalog(), "CheckLCGNonceJavaUtilRandom")
}

/// Deduplica las claves emisoras presentes en `sigs`, aplica recursivamente
/// los chequeos de clave única, y propaga la severidad más alta de
/// cualquier chequeo hijo que resultó débil a todas las firmas del emisor.
#[instrument(skip(sigs, infos))]
pub fn check_issuer_key(sigs: &[EcdsaSignature], infos: &mut [TestInfo]) -> bool {
    let groups = group_sigs_by_issuer(sigs);
    let issuer_keys: Vec<EcKey> = groups.values().map(|idxs| sigs[idxs[0]].issuer.clone()).collect();
    let mut issuer_infos: Vec<TestInfo> = issuer_keys.iter().map(|_| TestInfo::new()).collect();

    check_valid_ec_key(&issuer_keys, &mut issuer_infos);
    check_weak_curve(&issuer_keys, &mut issuer_infos);
    check_weak_ec_private_key(&issuer_keys, &mut issuer_infos);

    let mut any_weak = false;
    for ((_, indices), issuer_info) in groups.iter().zip(issuer_infos.iter()) {
        let highest = issuer_info
            .results()
            .filter(|r| r.result)
            .map(|r| r.severity)
            .max();
        let weak = highest.is_some();
        any_weak |= weak;
        let severity = highest.unwrap_or(Severity::Unknown);
        mark_indices(infos, indices, "CheckIssuerKey", severity, weak);
    }
    any_weak
}

/// Sonda de una sola firma usada por `CheckCr50U2f` cuando no hay un
/// segundo miembro de ventana disponible (`r2=1, s2=1, z2=0`).
fn synthetic_single_sig_probe() -> EcdsaSample {
    EcdsaSample { r: rug::Integer::from(1), s: rug::Integer::from(1), z: rug::Integer::from(0) }
}

/// Ventana deslizante de 2 firmas por emisor, seguida de una última sonda
/// de una sola firma (§4.G): sólo la firma más reciente del emisor se
/// combina con la sonda sintética, igual que el original sólo prueba
/// `unique_vals[-1]`.
#[instrument(skip(sigs, infos))]
pub fn check_cr50_u2f(sigs: &[EcdsaSignature], infos: &mut [TestInfo]) -> Result<bool, CheckError> {
    let mut any_weak = false;
    for (_, indices) in group_sigs_by_issuer(sigs) {
        let unique = dedupe_by_triple(&indices, sigs);
        let issuer = &sigs[indices[0]].issuer;
        let Ok(curve) = lookup(&issuer.curve_id) else {
            mark_indices(infos, &indices, "CheckCr50U2f", Severity::Critical, false);
            continue;
        };
        let n = &curve.params.n;

        let samples: Vec<EcdsaSample> = unique
            .iter()
            .map(|&i| EcdsaSample { r: sigs[i].r.clone(), s: sigs[i].s.clone(), z: sigs[i].message_hash.clone() })
            .collect();

        let mut weak = false;
        for window in samples.windows(2) {
            let guesses = solve_cr50_u2f(n, &window[0], &window[1])?;
            if let Some(x) = match_guesses_against_issuer(curve, &guesses, &issuer.point) {
                attach_evidence_to(infos, &indices, "private_key", &x.to_string());
                weak = true;
                break;
            }
        }
        if !weak {
            if let Some(last) = samples.last() {
                let probe = synthetic_single_sig_probe();
                let guesses = solve_cr50_u2f(n, last, &probe)?;
                if let Some(x) = match_guesses_against_issuer(curve, &guesses, &issuer.point) {
                    attach_evidence_to(infos, &indices, "private_key", &x.to_string());
                    weak = true;
                }
            }
        }
        any_weak |= weak;
        mark_indices(infos, &indices, "CheckCr50U2f", Severity::Critical, weak);
    }
    Ok(any_weak)
}

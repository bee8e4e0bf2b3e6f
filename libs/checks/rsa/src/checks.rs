// [libs/checks/rsa/src/checks.rs]
/*!
 * =================================================================
 * APARATO: RSA SINGLE-KEY AND AGGREGATE CHECKS (V1.0)
 * CLASIFICACIÓN: RSA CHECKS (ESTRATO L2)
 * RESPONSABILIDAD: LOS 16 CHEQUEOS DE §4.C CONTRA UN LOTE DE RsaKey
 *
 * Cada chequeo recorre `keys` y `infos` en paralelo (un `TestInfo` por
 * clave) y retorna el OR acumulado de sus veredictos. Los chequeos no
 * comparten estado mutable entre sí: el orquestador (paranoid-orchestrator)
 * los ejecuta en un orden fijo y registra su duración.
 * =================================================================
 */

use crate::roca::{is_roca_variant_weak, is_roca_weak};
use paranoid_core_bignum::prelude::*;
use paranoid_forensics::prelude::*;
use paranoid_lattice::prelude::*;
use paranoid_models::prelude::*;
use tracing::instrument;

/// Contexto compartido por los chequeos que consultan datos estáticos
/// de sólo lectura (denylist de OpenSSL, tabla Keypair, candidatos de
/// PRNGs no sembradas).
pub struct RsaCheckContext<'a> {
    pub provider: &'a dyn StaticDataProvider,
}

/// Parámetros ajustables de los chequeos RSA acotados por pasos/cotas (§5,
/// §10.3): cuántos pasos probar antes de abandonar, y qué cotas de tamaño
/// separan "sospechoso" de "no concluyente".
#[derive(Debug, Clone)]
pub struct RsaCheckConfig {
    /// Tope de iteraciones de `CheckFermat` (§4.C: 100 000 por defecto).
    pub fermat_max_steps: u64,
    /// Bound de criba (en bits) usado para precomputar `M` en `CheckPollardpm1`.
    pub pollard_smooth_bound_bits: u32,
    /// Cota powersmooth (en bits) de cada factor primo de `M`.
    pub pollard_powersmooth_bound_bits: u32,
    /// `gcd(n-1, M)` debe alcanzar esta cota (en bits) para intentar Pollard p-1.
    pub pollard_gcd_bound_bits: u32,
    /// Pasos del heap antes de la primera comprobación de poda en
    /// `CheckLowHammingWeight`.
    pub low_hamming_cutoff: u64,
    /// Tope de pasos de `CheckLowHammingWeight` (§5: por defecto 10⁶, techo 10⁷).
    pub low_hamming_max_steps: u64,
    /// Cota (en bits) de `gcd(n-1, ...)` compartido entre claves en `CheckGCDN1`.
    pub gcd_n1_bound_bits: u32,
}

impl Default for RsaCheckConfig {
    fn default() -> Self {
        Self {
            fermat_max_steps: 100_000,
            pollard_smooth_bound_bits: 20,
            pollard_powersmooth_bound_bits: 64,
            pollard_gcd_bound_bits: 60,
            low_hamming_cutoff: 2000,
            low_hamming_max_steps: 1_000_000,
            gcd_n1_bound_bits: 128,
        }
    }
}

fn attach_factors(info: &mut TestInfo, p: &Integer, q: &Integer) {
    info.attach_evidence("n_factors", p.to_string());
    info.attach_evidence("n_factors", q.to_string());
}

#[instrument(skip(keys, infos))]
pub fn check_sizes(keys: &[RsaKey], infos: &mut [TestInfo]) -> bool {
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let weak = key.bit_length() < 2048;
        any_weak |= weak;
        info.record_check("CheckSizes", Severity::Medium, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos))]
pub fn check_exponents(keys: &[RsaKey], infos: &mut [TestInfo]) -> bool {
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let weak = key.e != 65537u64;
        any_weak |= weak;
        info.record_check("CheckExponents", Severity::Medium, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos))]
pub fn check_roca(keys: &[RsaKey], infos: &mut [TestInfo]) -> bool {
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let weak = is_roca_weak(&key.n);
        any_weak |= weak;
        info.record_check("CheckROCA", Severity::High, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos))]
pub fn check_roca_variant(keys: &[RsaKey], infos: &mut [TestInfo]) -> bool {
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let weak = is_roca_variant_weak(&key.n);
        any_weak |= weak;
        info.record_check("CheckROCAVariant", Severity::Medium, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos))]
pub fn check_fermat(keys: &[RsaKey], infos: &mut [TestInfo], max_steps: u64) -> bool {
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let weak = match fermat_factor(&key.n, max_steps) {
            Ok(Some((p, q))) => {
                attach_factors(info, &p, &q);
                true
            }
            _ => false,
        };
        any_weak |= weak;
        info.record_check("CheckFermat", Severity::Critical, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos))]
pub fn check_high_and_low_bits_equal(keys: &[RsaKey], infos: &mut [TestInfo]) -> bool {
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let weak = match factor_high_and_low_bits_equal(&key.n, 3) {
            Ok(Some((p, q))) => {
                attach_factors(info, &p, &q);
                true
            }
            _ => false,
        };
        any_weak |= weak;
        info.record_check("CheckHighAndLowBitsEqual", Severity::Critical, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos, ctx))]
pub fn check_openssl_denylist(keys: &[RsaKey], infos: &mut [TestInfo], ctx: &RsaCheckContext) -> bool {
    let denylist = ctx.provider.get_openssl_denylist();
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let weak = denylist.contains(&openssl_denylist_key(&key.n));
        any_weak |= weak;
        info.record_check("CheckOpensslDenylist", Severity::Critical, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos))]
pub fn check_continued_fractions(keys: &[RsaKey], infos: &mut [TestInfo]) -> bool {
    let bound = Integer::from(1u64) << 48;
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let weak = match check_continued_fraction(&key.n, &bound) {
            ContinuedFractionOutcome::Factored(p, q) => {
                attach_factors(info, &p, &q);
                true
            }
            ContinuedFractionOutcome::SuspiciousNoFactors => true,
            ContinuedFractionOutcome::Clean => false,
        };
        any_weak |= weak;
        info.record_check("CheckContinuedFractions", Severity::Critical, weak);
    }
    any_weak
}

fn default_bit_pattern_sizes() -> Vec<u32> {
    let mut sizes: Vec<u32> = (1..16).step_by(2).collect();
    sizes.extend([31, 63, 127, 255, 511, 8, 16, 32, 64, 128, 256]);
    sizes
}

#[instrument(skip(keys, infos))]
pub fn check_bit_patterns(keys: &[RsaKey], infos: &mut [TestInfo]) -> bool {
    let pattern_sizes = default_bit_pattern_sizes();
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let max_pattern_size = key.bit_length() / 8;
        let mut weak = false;
        for &pattern_size in &pattern_sizes {
            if pattern_size > max_pattern_size {
                continue;
            }
            let d = Integer::from((Integer::from(1) << pattern_size) - 1);
            if let Some((p, q)) = check_fraction(&key.n, &d) {
                attach_factors(info, &p, &q);
                weak = true;
                break;
            }
        }
        any_weak |= weak;
        info.record_check("CheckBitPatterns", Severity::Critical, weak);
    }
    any_weak
}

/// `d = (2^psize - 1)*(2^(psize*wsize) + 1) / (2^wsize + 1)`, exacta por
/// construcción para los (psize, wsize) probados.
fn permuted_pattern_denominator(psize: u32, wsize: u32) -> Integer {
    let lhs = Integer::from((Integer::from(1) << psize) - 1);
    let rhs = Integer::from((Integer::from(1) << (psize * wsize)) + 1);
    let numerator = Integer::from(&lhs * &rhs);
    let denominator = Integer::from((Integer::from(1) << wsize) + 1);
    numerator / denominator
}

#[instrument(skip(keys, infos))]
pub fn check_permuted_bit_patterns(keys: &[RsaKey], infos: &mut [TestInfo]) -> bool {
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let max_dsize = key.bit_length() / 8;
        let mut weak = false;
        'wsize: for wsize in [8u32, 16, 32, 64] {
            let mut psize = 3u32;
            while psize < wsize {
                let d = permuted_pattern_denominator(psize, wsize);
                if d.significant_bits() > max_dsize {
                    break;
                }
                if let Some((p, q)) = check_fraction(&key.n, &d) {
                    attach_factors(info, &p, &q);
                    weak = true;
                    break 'wsize;
                }
                psize += 2;
            }
        }
        any_weak |= weak;
        info.record_check("CheckPermutedBitPatterns", Severity::Critical, weak);
    }
    any_weak
}

/// Precomputa `M`, el producto `bound`-powersmooth de la especificación:
/// los primeros 150 primos elevados a la potencia máxima que mantiene
/// `p^k <= 2^pollard_powersmooth_bound_bits`, multiplicados con una criba
/// hasta `2^pollard_smooth_bound_bits`.
fn default_pollard_modulus(config: &RsaCheckConfig) -> Integer {
    let primes = sieve(1u64 << config.pollard_smooth_bound_bits);
    let powersmooth_bound = 1u64 << config.pollard_powersmooth_bound_bits;
    let mut powers: Vec<Integer> = Vec::with_capacity(primes.len());
    for (i, &p) in primes.iter().enumerate() {
        if i < 150 {
            let mut power = Integer::from(p);
            let mut accumulated = Integer::from(p);
            while Integer::from(&accumulated * p) <= powersmooth_bound {
                accumulated *= p;
                power *= p;
            }
            powers.push(power);
        } else {
            powers.push(Integer::from(p));
        }
    }
    fast_product(&powers)
}

#[instrument(skip(keys, infos, m))]
pub fn check_pollard_pm1(keys: &[RsaKey], infos: &mut [TestInfo], m: &Integer, gcd_bound_bits: u32) -> bool {
    let gcd_bound = Integer::from(1u64) << gcd_bound_bits;
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let outcome = pollard_pm1(&key.n, m, &gcd_bound);
        if let Some((p, q)) = &outcome.factors {
            attach_factors(info, p, q);
        }
        any_weak |= outcome.weak;
        info.record_check("CheckPollardpm1", Severity::Critical, outcome.weak);
    }
    any_weak
}

/// Variante de conveniencia que precalcula `M` con los parámetros de
/// `config` (por defecto: smooth = 2^20, powersmooth = 2^64).
pub fn check_pollard_pm1_default(keys: &[RsaKey], infos: &mut [TestInfo], config: &RsaCheckConfig) -> bool {
    let m = default_pollard_modulus(config);
    check_pollard_pm1(keys, infos, &m, config.pollard_gcd_bound_bits)
}

#[instrument(skip(keys, infos, config))]
pub fn check_low_hamming_weight(keys: &[RsaKey], infos: &mut [TestInfo], config: &RsaCheckConfig) -> bool {
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let outcome: LowHammingOutcome = paranoid_core_bignum::factoring::check_low_hamming_weight(
            &key.n,
            config.low_hamming_cutoff,
            config.low_hamming_max_steps,
        );
        let weak = outcome.factors.is_some() || outcome.potentially_weak;
        let severity = if outcome.factors.is_some() { Severity::Critical } else { Severity::Unknown };
        if let Some((p, q)) = &outcome.factors {
            attach_factors(info, p, q);
        }
        any_weak |= weak;
        info.record_check("CheckLowHammingWeight", severity, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos, ctx))]
pub fn check_unseeded_rand(keys: &[RsaKey], infos: &mut [TestInfo], ctx: &RsaCheckContext) -> bool {
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let psize = (key.bit_length() + 1) / 2;
        let candidates = ctx.provider.get_unseeded_rands(psize);
        let msb_1 = Integer::from(1) << (psize - 1);
        let msb_11 = Integer::from(&msb_1 | &(Integer::from(1) << (psize - 2)));

        let mut weak = false;
        'candidates: for p0 in &candidates {
            for variant in [p0.clone(), Integer::from(p0 | &msb_1), Integer::from(p0 | &msb_11)] {
                if let Ok(Some((p, q))) = factor_with_guess(&key.n, &variant) {
                    attach_factors(info, &p, &q);
                    weak = true;
                    break 'candidates;
                }
            }
        }
        any_weak |= weak;
        info.record_check("CheckUnseededRand", Severity::Critical, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos))]
pub fn check_small_upper_differences(keys: &[RsaKey], infos: &mut [TestInfo]) -> bool {
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let weak = match paranoid_core_bignum::factoring::check_small_upper_differences(&key.n) {
            Ok(Some((p, q))) => {
                attach_factors(info, &p, &q);
                true
            }
            _ => false,
        };
        any_weak |= weak;
        info.record_check("CheckSmallUpperDifferences", Severity::Critical, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos, ctx))]
pub fn check_keypair_denylist(keys: &[RsaKey], infos: &mut [TestInfo], ctx: &RsaCheckContext) -> bool {
    let table = ctx.provider.get_keypair_data();
    let mut any_weak = false;
    for (key, info) in keys.iter().zip(infos.iter_mut()) {
        let weak = if let Some((p, q)) = paranoid_forensics::keypair::check_keypair_denylist(&key.n, table) {
            attach_factors(info, &p, &q);
            true
        } else {
            false
        };
        any_weak |= weak;
        info.record_check("CheckKeypairDenylist", Severity::Critical, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos))]
pub fn check_gcd(keys: &[RsaKey], infos: &mut [TestInfo]) -> bool {
    let values: Vec<Integer> = keys.iter().map(|k| k.n.clone()).collect();
    let gcds = batch_gcd(&values, None);
    let mut any_weak = false;
    for ((key, info), g) in keys.iter().zip(infos.iter_mut()).zip(gcds.iter()) {
        let weak = *g != 1;
        if weak {
            let other = Integer::from(&key.n / g);
            attach_factors(info, g, &other);
        }
        any_weak |= weak;
        info.record_check("CheckGCD", Severity::Critical, weak);
    }
    any_weak
}

#[instrument(skip(keys, infos))]
pub fn check_gcd_n1(keys: &[RsaKey], infos: &mut [TestInfo], gcd_bound: &Integer) -> bool {
    let values: Vec<Integer> = keys.iter().map(|k| Integer::from(&k.n - 1)).collect();
    let gcds = batch_gcd(&values, None);
    let mut any_weak = false;
    for ((_key, info), g) in keys.iter().zip(infos.iter_mut()).zip(gcds.iter()) {
        let weak = g >= gcd_bound;
        if weak {
            info.attach_evidence("nm1_factors", g.to_string());
        }
        any_weak |= weak;
        info.record_check("CheckGCDN1", Severity::Unknown, weak);
    }
    any_weak
}

/// Variante de conveniencia con el límite de `config` (por defecto: 2^128, §10.3).
pub fn check_gcd_n1_default(keys: &[RsaKey], infos: &mut [TestInfo], config: &RsaCheckConfig) -> bool {
    let gcd_bound = Integer::from(1u64) << config.gcd_n1_bound_bits;
    check_gcd_n1(keys, infos, &gcd_bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn fresh_infos(n: usize) -> Vec<TestInfo> {
        (0..n).map(|_| TestInfo::new()).collect()
    }

    #[test]
    fn check_sizes_flags_short_moduli() {
        let keys = vec![RsaKey::new(Integer::from(15u64), Integer::from(3u64)).unwrap()];
        let mut infos = fresh_infos(1);
        assert!(check_sizes(&keys, &mut infos));
        assert!(infos[0].is_weak());
    }

    #[test]
    fn check_exponents_flags_non_standard_exponent() {
        let keys = vec![RsaKey::new(Integer::from(15u64), Integer::from(3u64)).unwrap()];
        let mut infos = fresh_infos(1);
        assert!(check_exponents(&keys, &mut infos));
    }

    #[test]
    fn check_exponents_accepts_standard_exponent() {
        let keys = vec![RsaKey::new(Integer::from(15u64), Integer::from(65_537u64)).unwrap()];
        let mut infos = fresh_infos(1);
        assert!(!check_exponents(&keys, &mut infos));
    }

    #[test]
    fn check_fermat_factors_close_primes() {
        let p = Integer::from(100_003u64);
        let q = Integer::from(100_019u64);
        let n = Integer::from(&p * &q);
        let keys = vec![RsaKey::new(n, Integer::from(65_537u64)).unwrap()];
        let mut infos = fresh_infos(1);
        assert!(check_fermat(&keys, &mut infos, 1000));
        assert_eq!(infos[0].evidence("n_factors").unwrap().len(), 2);
    }

    #[test]
    fn check_gcd_detects_shared_prime_factor() {
        let p = Integer::from(104_729u64);
        let q1 = Integer::from(99_991u64);
        let q2 = Integer::from(99_989u64);
        let keys = vec![
            RsaKey::new(Integer::from(&p * &q1), Integer::from(65_537u64)).unwrap(),
            RsaKey::new(Integer::from(&p * &q2), Integer::from(65_537u64)).unwrap(),
        ];
        let mut infos = fresh_infos(2);
        assert!(check_gcd(&keys, &mut infos));
    }

    #[test]
    fn check_openssl_denylist_matches_planted_entry() {
        let n = Integer::from_str_radix("ffeeddccbbaa99887766554433221101", 16).unwrap();
        let key = RsaKey::new(n.clone(), Integer::from(65_537u64)).unwrap();
        let entry = openssl_denylist_key(&n);
        let provider = InMemoryStaticDataProvider::new().with_denylist_entry(entry);
        let ctx = RsaCheckContext { provider: &provider };
        let mut infos = fresh_infos(1);
        assert!(check_openssl_denylist(&[key], &mut infos, &ctx));
    }

    #[test]
    fn check_keypair_denylist_misses_without_a_planted_record() {
        let provider = InMemoryStaticDataProvider::new();
        let ctx = RsaCheckContext { provider: &provider };
        let key = RsaKey::new(Integer::from(999_999_937u64 * 15u64), Integer::from(65_537u64)).unwrap();
        let mut infos = fresh_infos(1);
        assert!(!check_keypair_denylist(&[key], &mut infos, &ctx));
        let _ = HashMap::<u64, Vec<u8>>::new();
    }
}

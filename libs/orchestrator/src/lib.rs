// [libs/orchestrator/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PARANOID ORCHESTRATOR (V1.0)
 * CLASIFICACIÓN: ORCHESTRATION (ESTRATO L3)
 * RESPONSABILIDAD: §4.H — CheckAllRSA, CheckAllEC, CheckAllECDSASigs
 *
 * Cada punto de entrada recorre el registro fijo de su familia de
 * chequeos (`paranoid_checks_rsa::registry::ordered_checks`,
 * `paranoid_checks_ec::registry::{ordered_ec_checks, ordered_ecdsa_sig_checks}`),
 * cronometra y registra cada chequeo vía `tracing`, y acumula el OR de
 * los veredictos en el `TestInfo` de cada artefacto. `CheckCr50U2f`
 * propaga su fallo de autoconsistencia como un pánico desde el propio
 * registro de `paranoid-checks-ec`: este orquestador nunca lo atrapa ni lo
 * traduce a "no débil" (§5 Concurrency/Resource Model).
 * =================================================================
 */

use std::time::Instant;

use paranoid_checks_ec::registry::{ordered_ec_checks, ordered_ecdsa_sig_checks};
use paranoid_checks_rsa::registry::ordered_checks as ordered_rsa_checks;
use paranoid_checks_rsa::checks::RsaCheckContext;
use paranoid_forensics::prelude::StaticDataProvider;
use paranoid_models::prelude::{EcKey, EcdsaSignature, RsaKey, TestInfo};
use paranoid_telemetry::LogLevel;

fn should_log(log_level: LogLevel, floor: LogLevel) -> bool {
    log_level >= floor
}

/// Ejecuta el registro RSA completo (§4.C, 16 chequeos) contra un lote de
/// claves, devolviendo un `TestInfo` por clave en el mismo orden que `keys`.
#[must_use]
pub fn check_all_rsa(keys: &[RsaKey], provider: &dyn StaticDataProvider, log_level: LogLevel) -> Vec<TestInfo> {
    paranoid_telemetry::install_subscriber(log_level);
    let mut infos: Vec<TestInfo> = keys.iter().map(|_| TestInfo::new()).collect();
    let ctx = RsaCheckContext { provider };
    for entry in ordered_rsa_checks() {
        let start = Instant::now();
        let any_weak = (entry.run)(keys, &mut infos, &ctx);
        let elapsed = start.elapsed();
        if should_log(log_level, LogLevel::Info) {
            tracing::info!(check = entry.name, weak = any_weak, elapsed_secs = elapsed.as_secs_f64(), "rsa check complete");
        }
    }
    infos
}

/// Ejecuta los 4 chequeos de clave única EC (§4.G, filas 1-4) contra un lote
/// de claves públicas desnudas.
#[must_use]
pub fn check_all_ec(keys: &[EcKey], log_level: LogLevel) -> Vec<TestInfo> {
    paranoid_telemetry::install_subscriber(log_level);
    let mut infos: Vec<TestInfo> = keys.iter().map(|_| TestInfo::new()).collect();
    for entry in ordered_ec_checks() {
        let start = Instant::now();
        let any_weak = (entry.run)(keys, &mut infos);
        let elapsed = start.elapsed();
        if should_log(log_level, LogLevel::Info) {
            tracing::info!(check = entry.name, weak = any_weak, elapsed_secs = elapsed.as_secs_f64(), "ec check complete");
        }
    }
    infos
}

/// Ejecuta los 8 chequeos de firma ECDSA (§4.G, filas 5-8) contra un lote de
/// firmas. `CheckCr50U2f` puede entrar en pánico: eso es intencional, un
/// `ArithmeticBug` nunca debe leerse como "firma no débil".
#[must_use]
pub fn check_all_ecdsa_sigs(signatures: &[EcdsaSignature], log_level: LogLevel) -> Vec<TestInfo> {
    paranoid_telemetry::install_subscriber(log_level);
    let mut infos: Vec<TestInfo> = signatures.iter().map(|_| TestInfo::new()).collect();
    for entry in ordered_ecdsa_sig_checks() {
        let start = Instant::now();
        let any_weak = (entry.run)(signatures, &mut infos);
        let elapsed = start.elapsed();
        if should_log(log_level, LogLevel::Info) {
            tracing::info!(check = entry.name, weak = any_weak, elapsed_secs = elapsed.as_secs_f64(), "ecdsa signature check complete");
        }
    }
    infos
}

pub mod prelude {
    pub use crate::{check_all_ec, check_all_ecdsa_sigs, check_all_rsa};
    pub use paranoid_telemetry::LogLevel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use paranoid_forensics::prelude::InMemoryStaticDataProvider;

    #[test]
    fn check_all_rsa_returns_one_test_info_per_key() {
        let keys = vec![RsaKey { n: rug::Integer::from(35u64), e: rug::Integer::from(3u64) }; 2];
        let provider = InMemoryStaticDataProvider::new();
        let infos = check_all_rsa(&keys, &provider, LogLevel::Silent);
        assert_eq!(infos.len(), 2);
    }

    #[test]
    fn check_all_rsa_of_an_empty_batch_produces_no_test_infos() {
        let provider = InMemoryStaticDataProvider::new();
        let infos = check_all_rsa(&[], &provider, LogLevel::Silent);
        assert!(infos.is_empty());
    }
}

// [libs/telemetry/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PARANOID TELEMETRY (V1.0)
 * CLASIFICACIÓN: SHARED UTILITY (ESTRATO L1)
 * RESPONSABILIDAD: INICIALIZACIÓN DE TRAZADO DE UN SOLO DISPARO
 *
 * El orquestador (§4.H) acepta un `LogLevel` por llamada a `CheckAllRSA` /
 * `CheckAllEC` / `CheckAllECDSASigs`; este aparato traduce ese nivel a un
 * `EnvFilter` y garantiza una única instalación del suscriptor global vía
 * `std::sync::Once`, de modo que llamadas repetidas no entren en pánico.
 * =================================================================
 */

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as formatting_layer, EnvFilter};

static INSTALL_GUARD: Once = Once::new();

/// Nivel de registro aceptado por el orquestador, sustituyendo el
/// `log_level` informal de la especificación original por un enum tipado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Instala el suscriptor global de trazado. Segura ante múltiples llamadas:
/// sólo la primera invocación tiene efecto, per el guardián de un solo
/// disparo exigido por el modelo de concurrencia (§5).
pub fn install_subscriber(log_level: LogLevel) {
    INSTALL_GUARD.call_once(|| {
        let environmental_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(log_level.as_filter_directive()));

        let install_result = tracing_subscriber::registry()
            .with(environmental_filter)
            .with(formatting_layer::layer().compact().with_target(false))
            .try_init();

        if install_result.is_err() {
            // Otro suscriptor ya ocupaba el slot global (p.ej. el del binario
            // anfitrión); respetar esa instalación en vez de entrar en pánico.
            tracing::debug!("global tracing subscriber already installed, skipping");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_subscriber_is_idempotent_across_repeated_calls() {
        install_subscriber(LogLevel::Debug);
        install_subscriber(LogLevel::Trace);
        tracing::info!("telemetry smoke test");
    }
}

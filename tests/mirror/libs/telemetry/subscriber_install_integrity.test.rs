// [tests/mirror/libs/telemetry/subscriber_install_integrity.test.rs]
//! Certificación de integridad: instalar el suscriptor repetidamente, desde
//! distintos niveles, nunca entra en pánico (modelo de concurrencia §5: el
//! guardián de inicialización es de un solo disparo).

use paranoid_telemetry::{install_subscriber, LogLevel};

#[test]
fn repeated_installs_across_all_levels_never_panic() {
    for level in [
        LogLevel::Silent,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        install_subscriber(level);
    }
    tracing::info!("post-install smoke event");
}

// [tests/mirror/libs/models/test_info_accumulation_integrity.test.rs]
//! Certificación de integridad: `TestInfo` respeta la semántica de
//! acumulación monotónica a través de múltiples rondas de escritura,
//! simulando dos ejecuciones completas del orquestador sobre la misma clave.

use paranoid_models::prelude::*;

#[test]
fn round_trip_twice_keeps_weak_flag_and_factor_union_idempotent() {
    let mut info = TestInfo::new();

    info.record_check("CheckSizes", Severity::Medium, false);
    info.record_check("CheckFermat", Severity::Critical, true);
    info.attach_evidence("factors", "65537");
    info.attach_evidence("factors", "104729");

    let weak_after_first_run = info.is_weak();
    let evidence_after_first_run = info.evidence("factors").cloned();

    // Segunda ejecución "idéntica" del orquestador sobre el mismo artefacto.
    info.record_check("CheckSizes", Severity::Medium, false);
    info.record_check("CheckFermat", Severity::Critical, true);
    info.attach_evidence("factors", "65537");
    info.attach_evidence("factors", "104729");

    assert_eq!(info.is_weak(), weak_after_first_run);
    assert_eq!(info.evidence("factors").cloned(), evidence_after_first_run);
}

#[test]
fn library_version_is_stamped_on_construction() {
    let info = TestInfo::new();
    assert_eq!(info.library_version(), LIBRARY_VERSION);
}

//! End-to-end tests of the session state machine.
//!
//! Backend responses are injected directly into the `*_finished` operations;
//! a request descriptor returned by a `begin_*` operation stands for a
//! network call that would have been issued, and a local-validation `Err`
//! stands for a call that never was.

use std::path::PathBuf;

use dcs_api::{ApiError, Preview, ProcessAck};
use dcs_model::{ColumnMap, ColumnMapError, UploadedFile, Variant};
use dcs_session::{Session, Stage, WorkflowError};

fn catalog_preview() -> Preview {
    Preview {
        columns: ColumnMap::from_columns(
            vec![
                "PLU".into(),
                "COLOR".into(),
                "ID MARCA".into(),
                "DESC PLU".into(),
                "CONTENIDO".into(),
            ],
            vec![
                "plu".into(),
                "color".into(),
                "id_marca".into(),
                "desc_plu".into(),
                "contenido".into(),
            ],
        )
        .unwrap(),
        rows: Some(250),
        sample: serde_json::Map::new(),
    }
}

/// Drive a session to the Preview stage with the catalog columns loaded.
fn session_in_preview() -> Session {
    let mut session = Session::new();
    session.pick_file(PathBuf::from("catalogo.xlsx"));

    let upload = session.begin_upload().unwrap();
    let preview_call = session
        .upload_finished(
            upload.generation,
            Ok(UploadedFile::new(7, "catalogo.xlsx")),
        )
        .expect("upload success must chain into preview");
    assert_eq!(preview_call.file_id, 7);

    session.preview_finished(preview_call.generation, Ok(catalog_preview()));
    assert_eq!(session.stage(), Stage::Preview);
    assert!(!session.is_loading());
    session
}

#[test]
fn upload_without_a_file_is_rejected_locally() {
    let mut session = Session::new();

    let err = session.begin_upload().unwrap_err();
    assert_eq!(err, WorkflowError::NoFileSelected);

    // No call was armed: stage unchanged, guard unarmed, error surfaced.
    assert_eq!(session.stage(), Stage::Upload);
    assert!(!session.is_loading());
    assert_eq!(session.error(), Some(&WorkflowError::NoFileSelected));
}

#[test]
fn upload_failure_stays_in_upload_and_allows_retry() {
    let mut session = Session::new();
    session.pick_file(PathBuf::from("catalogo.xlsx"));

    let upload = session.begin_upload().unwrap();
    assert!(session.is_loading());

    let follow_up = session.upload_finished(
        upload.generation,
        Err(ApiError::Status {
            status: 500,
            body: String::new(),
        }),
    );
    assert!(follow_up.is_none());
    assert_eq!(session.stage(), Stage::Upload);
    assert!(!session.is_loading());
    assert!(session.error().is_some());

    // The picked file survives, so the user can simply retry.
    assert!(session.begin_upload().is_ok());
}

#[test]
fn upload_success_chains_into_preview_before_the_stage_advances() {
    let mut session = Session::new();
    session.pick_file(PathBuf::from("catalogo.xlsx"));

    let upload = session.begin_upload().unwrap();
    let preview_call = session
        .upload_finished(upload.generation, Ok(UploadedFile::new(3, "catalogo.xlsx")))
        .unwrap();

    // Upload completed and its file id was captured, but the Preview stage
    // is not ready until the preview call lands.
    assert_eq!(session.stage(), Stage::Upload);
    assert!(session.is_loading());
    assert_eq!(session.file().map(|f| f.id), Some(3));

    session.preview_finished(preview_call.generation, Ok(catalog_preview()));
    assert_eq!(session.stage(), Stage::Preview);
    assert!(!session.is_loading());
    assert_eq!(session.columns().map(ColumnMap::len), Some(5));
}

#[test]
fn preview_ingestion_mismatch_is_fatal_and_returns_to_upload() {
    let mut session = Session::new();
    session.pick_file(PathBuf::from("catalogo.xlsx"));

    let upload = session.begin_upload().unwrap();
    let preview_call = session
        .upload_finished(upload.generation, Ok(UploadedFile::new(3, "catalogo.xlsx")))
        .unwrap();

    session.preview_finished(
        preview_call.generation,
        Err(ApiError::Ingestion(ColumnMapError::LengthMismatch {
            labels: 5,
            keys: 4,
        })),
    );

    assert_eq!(session.stage(), Stage::Upload);
    assert!(!session.is_loading());
    assert!(session.columns().is_none());
    assert!(matches!(
        session.error(),
        Some(WorkflowError::Api(ApiError::Ingestion(_)))
    ));
}

#[test]
fn selection_stores_normalized_keys_in_toggle_order() {
    let mut session = session_in_preview();

    session.toggle_column("CONTENIDO");
    session.toggle_column("PLU");
    session.toggle_column("COLOR");

    assert_eq!(session.selection().keys(), ["contenido", "plu", "color"]);

    // Toggling again removes.
    session.toggle_column("COLOR");
    assert_eq!(session.selection().keys(), ["contenido", "plu"]);
}

#[test]
fn gate_scenario_from_the_catalog_preview() {
    let mut session = session_in_preview();

    for label in ["PLU", "ID MARCA", "DESC PLU"] {
        session.toggle_column(label);
        assert!(!session.can_generate_names());
    }

    session.toggle_column("CONTENIDO");
    assert!(session.can_generate_names());
    assert!(session.missing_columns().is_empty());

    session.set_generate_names(true);
    assert!(session.generate_names());

    // Deselecting a required column closes the gate and forces the flag off.
    session.toggle_column("PLU");
    assert!(!session.can_generate_names());
    assert!(!session.generate_names());
    assert_eq!(session.missing_columns(), ["PLU"]);
}

#[test]
fn flag_cannot_be_enabled_while_the_gate_is_closed() {
    let mut session = session_in_preview();
    session.toggle_column("PLU");

    session.set_generate_names(true);
    assert!(!session.generate_names());
}

#[test]
fn reorder_only_changes_the_order() {
    let mut session = session_in_preview();
    session.toggle_column("PLU");
    session.toggle_column("COLOR");
    session.toggle_column("CONTENIDO");

    session.reorder(2, 0).unwrap();
    assert_eq!(session.selection().keys(), ["contenido", "plu", "color"]);

    // Out-of-bounds indices are rejected without touching the selection.
    assert!(session.reorder(0, 9).is_err());
    assert_eq!(session.selection().keys(), ["contenido", "plu", "color"]);
}

#[test]
fn process_with_empty_selection_never_issues_a_call() {
    let mut session = session_in_preview();

    let err = session.begin_process().unwrap_err();
    assert_eq!(err, WorkflowError::EmptySelection);
    assert_eq!(session.stage(), Stage::Preview);
    assert!(!session.is_loading());
}

#[test]
fn process_payload_carries_resolved_keys_in_order() {
    let mut session = session_in_preview();
    session.toggle_column("DESC PLU");
    session.toggle_column("PLU");

    let process = session.begin_process().unwrap();
    assert_eq!(process.file_id, 7);
    assert_eq!(process.columns, ["desc_plu", "plu"]);
    assert!(!process.generate_image_names);
}

#[test]
fn process_failure_keeps_the_selection() {
    let mut session = session_in_preview();
    session.toggle_column("PLU");
    session.toggle_column("COLOR");

    let process = session.begin_process().unwrap();
    session.process_finished(
        process.generation,
        Err(ApiError::Network("timed out".to_string())),
    );

    assert_eq!(session.stage(), Stage::Preview);
    assert!(!session.is_loading());
    assert!(session.error().is_some());
    assert_eq!(session.selection().keys(), ["plu", "color"]);

    // Manual retry works with the retained selection.
    assert!(session.begin_process().is_ok());
}

#[test]
fn downloads_exist_only_in_the_result_stage() {
    let mut session = session_in_preview();
    assert!(session.download_request(Variant::Comma).is_none());

    session.toggle_column("PLU");
    let process = session.begin_process().unwrap();
    session.process_finished(process.generation, Ok(ProcessAck { rows: Some(200) }));

    assert_eq!(session.stage(), Stage::Result);
    assert_eq!(session.cleaned_rows(), Some(200));

    let download = session.download_request(Variant::Semicolon).unwrap();
    assert_eq!(download.file_id, 7);
    assert_eq!(download.variant, Variant::Semicolon);
}

#[test]
fn reset_from_result_returns_to_an_empty_upload() {
    let mut session = session_in_preview();
    session.toggle_column("PLU");
    let process = session.begin_process().unwrap();
    session.process_finished(process.generation, Ok(ProcessAck::default()));
    assert_eq!(session.stage(), Stage::Result);

    session.reset();

    assert_eq!(session.stage(), Stage::Upload);
    assert!(session.file().is_none());
    assert!(session.picked_file().is_none());
    assert!(session.columns().is_none());
    assert!(session.selection().is_empty());
    assert!(!session.generate_names());
    assert!(session.error().is_none());
    assert!(session.cleaned_rows().is_none());
}

#[test]
fn stale_responses_after_reset_are_discarded() {
    let mut session = Session::new();
    session.pick_file(PathBuf::from("catalogo.xlsx"));
    let upload = session.begin_upload().unwrap();

    // Reset while the upload is in flight.
    session.reset();

    // The response eventually arrives with the old generation token.
    let follow_up =
        session.upload_finished(upload.generation, Ok(UploadedFile::new(9, "catalogo.xlsx")));
    assert!(follow_up.is_none());
    assert!(session.file().is_none());
    assert!(!session.is_loading());

    // Same for a stale preview response.
    session.preview_finished(upload.generation, Ok(catalog_preview()));
    assert_eq!(session.stage(), Stage::Upload);
    assert!(session.columns().is_none());
}

#[test]
fn in_flight_guard_rejects_reentrant_calls() {
    let mut session = Session::new();
    session.pick_file(PathBuf::from("catalogo.xlsx"));

    session.begin_upload().unwrap();
    let err = session.begin_upload().unwrap_err();
    assert_eq!(err, WorkflowError::Busy);
}

#[test]
fn existing_upload_skips_straight_to_the_preview_call() {
    let mut session = Session::new();

    let preview_call = session
        .begin_existing(UploadedFile::new(42, "anterior.csv"))
        .unwrap();
    assert_eq!(preview_call.file_id, 42);
    assert!(session.is_loading());

    session.preview_finished(preview_call.generation, Ok(catalog_preview()));
    assert_eq!(session.stage(), Stage::Preview);
    assert_eq!(session.file().map(|f| f.id), Some(42));
}

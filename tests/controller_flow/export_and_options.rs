use cloud_sketch::export::read_first_path_data;
use cloud_sketch::{AppCommand, AppController, AppIntent, AppState, EditorOptions};
use cloud_sketch::SelectionRecord;
use glam::DVec2;

use crate::draw_rect;

fn submit(controller: &mut AppController, state: &mut AppState, dir: &std::path::Path) {
    controller
        .handle_intent(
            state,
            AppIntent::SubmitSelectionRequested {
                record_path: Some(dir.join("selection.json")),
                svg_path: Some(dir.join("selection.svg")),
                timestamp: "2026-03-01T12:00:00.000Z".to_string(),
            },
        )
        .expect("Absenden sollte funktionieren");
}

#[test]
fn test_submit_writes_record_and_svg_then_clears() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");

    draw_rect(
        &mut controller,
        &mut state,
        1,
        DVec2::new(10.0, 10.0),
        DVec2::new(90.0, 70.0),
    );
    let shape = state.selection().expect("Form erwartet").clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SelectionFieldsEdited {
                what: " Hase ".to_string(),
                name: "Lotta".to_string(),
            },
        )
        .expect("Felder setzen sollte funktionieren");
    submit(&mut controller, &mut state, dir.path());

    let json = std::fs::read_to_string(dir.path().join("selection.json")).expect("JSON-Datei");
    let record = SelectionRecord::from_json(&json).expect("gültiger Datensatz");
    assert_eq!(record.what, "Hase");
    assert_eq!(record.name, "Lotta");
    assert_eq!(record.path_data, shape.path_data());
    assert_eq!(record.points(), shape.points());
    assert_eq!(record.timestamp, "2026-03-01T12:00:00.000Z");

    let svg = std::fs::read_to_string(dir.path().join("selection.svg")).expect("SVG-Datei");
    assert!(svg.contains("viewBox=\"0 0 1920 1080\""));
    assert_eq!(
        read_first_path_data(&svg).expect("gültiges SVG").as_deref(),
        Some(shape.path_data())
    );

    assert!(state.selection().is_none());
    assert!(!state.selection_fields.is_complete());
    assert_eq!(state.last_export.as_ref(), Some(&record));
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::ClearDrawing)
    ));
}

#[test]
fn test_submit_without_fields_writes_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");

    draw_rect(
        &mut controller,
        &mut state,
        1,
        DVec2::new(10.0, 10.0),
        DVec2::new(90.0, 70.0),
    );
    submit(&mut controller, &mut state, dir.path());

    assert!(!dir.path().join("selection.json").exists());
    assert!(state.selection().is_some());
    assert!(state.last_export.is_none());
}

#[test]
fn test_export_command_without_selection_is_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_command(
        &mut state,
        AppCommand::ExportSelection {
            record_path: None,
            svg_path: None,
            timestamp: "t".to_string(),
        },
    );

    assert!(result.is_err());
}

#[test]
fn test_options_changed_applies_stroke_threshold() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let options = EditorOptions {
        min_point_distance: 500.0,
        ..EditorOptions::default()
    };

    controller
        .handle_intent(
            &mut state,
            AppIntent::OptionsChanged {
                options: Box::new(options.clone()),
            },
        )
        .expect("OptionsChanged sollte funktionieren");
    assert_eq!(state.options, options);
    assert_eq!(state.surface.config().min_point_distance, 500.0);

    // Alle Bewegungen liegen unter dem Mindestabstand → Antippen
    draw_rect(
        &mut controller,
        &mut state,
        1,
        DVec2::new(0.0, 0.0),
        DVec2::new(100.0, 100.0),
    );
    assert!(state.selection().is_none());
}

#[test]
fn test_save_options_writes_loadable_toml() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.outline_stroke_width = 3.0;
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = dir.path().join("cloud_sketch.toml");

    controller
        .handle_intent(&mut state, AppIntent::SaveOptionsRequested { path: path.clone() })
        .expect("SaveOptionsRequested sollte funktionieren");

    assert_eq!(EditorOptions::load_from_file(&path), state.options);
}

#[test]
fn test_save_options_to_missing_directory_is_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");

    let result = controller.handle_intent(
        &mut state,
        AppIntent::SaveOptionsRequested {
            path: dir.path().join("fehlt").join("cloud_sketch.toml"),
        },
    );

    assert!(result.is_err());
}

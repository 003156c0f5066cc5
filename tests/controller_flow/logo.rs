use cloud_sketch::{AppController, AppIntent, AppState};
use glam::DVec2;

#[test]
fn test_logo_nudge_translates_attached_controls() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::LogoPathLoaded {
                path_data: "M 0 0 C 10 0, 20 10, 20 20 L 0 20 Z".to_string(),
            },
        )
        .expect("LogoPathLoaded sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::LogoAnchorNudged {
                index: 1,
                delta: DVec2::new(5.0, -5.0),
            },
        )
        .expect("LogoAnchorNudged sollte funktionieren");

    let scene = controller.build_render_scene(&state);
    assert_eq!(
        scene.logo_path_data.as_deref(),
        Some("M 0 0 C 10 0, 25 5, 25 15 L 0 20 Z")
    );
}

#[test]
fn test_logo_nudge_without_logo_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::LogoAnchorNudged {
                index: 0,
                delta: DVec2::ONE,
            },
        )
        .expect("No-op sollte keinen Fehler liefern");

    assert!(state.logo.is_none());
}

#[test]
fn test_logo_file_loads_first_path() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = dir.path().join("logo.svg");
    std::fs::write(
        &path,
        r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="m 10 10 h 20 v 20 z"/></svg>"#,
    )
    .expect("Schreiben");

    controller
        .handle_intent(&mut state, AppIntent::LogoFileSelected { path })
        .expect("LogoFileSelected sollte funktionieren");

    let logo = state.logo.as_ref().expect("Logo erwartet");
    assert_eq!(logo.anchor_count(), 3);
    assert_eq!(logo.to_path_data(), "M 10 10 L 30 10 L 30 30 Z");
}

#[test]
fn test_logo_file_missing_is_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::LogoFileSelected {
            path: "/nicht/vorhanden/logo.svg".into(),
        },
    );

    assert!(result.is_err());
    assert!(state.logo.is_none());
}

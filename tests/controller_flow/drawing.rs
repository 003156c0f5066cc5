use cloud_sketch::engine::{PointerBinding, StrokeOutcome};
use cloud_sketch::{AppController, AppIntent, AppState};
use glam::DVec2;

use crate::draw_rect;

#[test]
fn test_tap_without_movement_discards_stroke() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pointer_id: 1,
                pos: DVec2::new(20.0, 20.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pointer_id: 1,
                pos: DVec2::new(21.0, 21.0),
            },
        )
        .expect("PointerMoved sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::PointerReleased { pointer_id: 1 })
        .expect("PointerReleased sollte funktionieren");

    assert_eq!(state.last_stroke, Some(StrokeOutcome::Discarded));
    assert!(state.selection().is_none());
    assert!(!controller.build_render_scene(&state).has_mask());
}

#[test]
fn test_stroke_commits_closed_shape_and_mask() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw_rect(
        &mut controller,
        &mut state,
        1,
        DVec2::new(0.0, 0.0),
        DVec2::new(100.0, 100.0),
    );

    let shape = state.selection().expect("Form erwartet");
    assert!(shape.path_data().starts_with("M 0 0 C "));
    assert!(shape.path_data().ends_with(" Z"));
    assert_eq!(state.surface.binding(), PointerBinding::Idle);

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.mask_path_data, shape.path_data());
    assert_eq!(scene.handles.len(), shape.anchor_count());
    assert!(scene.preview_points.is_empty());
}

#[test]
fn test_new_stroke_replaces_previous_shape() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw_rect(
        &mut controller,
        &mut state,
        1,
        DVec2::new(0.0, 0.0),
        DVec2::new(100.0, 100.0),
    );
    draw_rect(
        &mut controller,
        &mut state,
        1,
        DVec2::new(300.0, 300.0),
        DVec2::new(400.0, 350.0),
    );

    assert_eq!(state.surface.editor().shapes().len(), 1);
    let shape = state.selection().expect("Form erwartet");
    assert_eq!(shape.points()[0], DVec2::new(300.0, 300.0));
}

#[test]
fn test_tap_clears_previous_drawing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw_rect(
        &mut controller,
        &mut state,
        1,
        DVec2::new(0.0, 0.0),
        DVec2::new(100.0, 100.0),
    );
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pointer_id: 1,
                pos: DVec2::new(500.0, 500.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::PointerCancelled { pointer_id: 1 })
        .expect("PointerCancelled sollte funktionieren");

    assert!(state.selection().is_none());
    assert_eq!(state.last_stroke, Some(StrokeOutcome::Discarded));
}

#[test]
fn test_foreign_pointer_is_not_logged() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pointer_id: 1,
                pos: DVec2::ZERO,
            },
        )
        .expect("PointerPressed sollte funktionieren");
    let logged = state.command_log.len();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pointer_id: 2,
                pos: DVec2::new(50.0, 50.0),
            },
        )
        .expect("zweiter Zeiger sollte ignoriert werden");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pointer_id: 2,
                pos: DVec2::new(80.0, 80.0),
            },
        )
        .expect("zweiter Zeiger sollte ignoriert werden");

    assert_eq!(state.command_log.len(), logged);
    assert_eq!(state.surface.session().raw_points(), &[DVec2::ZERO]);
}

#[test]
fn test_leaving_sketch_view_blocks_drawing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    draw_rect(
        &mut controller,
        &mut state,
        1,
        DVec2::new(0.0, 0.0),
        DVec2::new(100.0, 100.0),
    );
    controller
        .handle_intent(&mut state, AppIntent::SketchViewToggled { active: false })
        .expect("SketchViewToggled sollte funktionieren");

    assert!(state.selection().is_none());
    assert!(!state.surface.interaction_enabled());

    draw_rect(
        &mut controller,
        &mut state,
        1,
        DVec2::new(0.0, 0.0),
        DVec2::new(100.0, 100.0),
    );
    assert!(state.selection().is_none());

    controller
        .handle_intent(&mut state, AppIntent::SketchViewToggled { active: true })
        .expect("SketchViewToggled sollte funktionieren");
    draw_rect(
        &mut controller,
        &mut state,
        1,
        DVec2::new(0.0, 0.0),
        DVec2::new(100.0, 100.0),
    );
    assert!(state.selection().is_some());
}

use cloud_sketch::engine::build_closed_path_data;
use cloud_sketch::{AppController, AppIntent, AppState};
use glam::DVec2;

/// Strich, der genau vier vereinfachte Punkte ergibt.
fn draw_square(controller: &mut AppController, state: &mut AppState) {
    let intents = [
        AppIntent::PointerPressed {
            pointer_id: 1,
            pos: DVec2::new(0.0, 0.0),
        },
        AppIntent::PointerMoved {
            pointer_id: 1,
            pos: DVec2::new(100.0, 0.0),
        },
        AppIntent::PointerMoved {
            pointer_id: 1,
            pos: DVec2::new(100.0, 100.0),
        },
        AppIntent::PointerMoved {
            pointer_id: 1,
            pos: DVec2::new(0.0, 100.0),
        },
        AppIntent::PointerReleased { pointer_id: 1 },
    ];
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Zeichnen sollte funktionieren");
    }
}

#[test]
fn test_anchor_drag_updates_only_dragged_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_square(&mut controller, &mut state);

    let before = state.selection().expect("Form erwartet").clone();
    assert_eq!(before.anchor_count(), 4);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pointer_id: 4,
                pos: DVec2::new(101.0, 99.0),
            },
        )
        .expect("Griff greifen sollte funktionieren");
    assert!(!state.surface.session().is_active());

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pointer_id: 4,
                pos: DVec2::new(5.0, 5.0),
            },
        )
        .expect("Anker ziehen sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::PointerReleased { pointer_id: 4 })
        .expect("Loslassen sollte funktionieren");

    let after = state.selection().expect("Form erwartet");
    assert_eq!(after.anchor_count(), 4);
    assert_eq!(after.points()[2], DVec2::new(5.0, 5.0));
    for i in [0, 1, 3] {
        assert_eq!(after.points()[i], before.points()[i]);
    }
    assert_ne!(after.path_data(), before.path_data());
    assert_eq!(after.path_data(), build_closed_path_data(after.points()));
    assert!(state.surface.editor().dragging().is_none());
}

#[test]
fn test_anchor_move_request_out_of_range_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_square(&mut controller, &mut state);
    let before = state.selection().expect("Form erwartet").clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::AnchorMoveRequested {
                shape: 0,
                index: 17,
                pos: DVec2::new(1.0, 1.0),
            },
        )
        .expect("No-op sollte keinen Fehler liefern");
    controller
        .handle_intent(
            &mut state,
            AppIntent::AnchorMoveRequested {
                shape: 3,
                index: 0,
                pos: DVec2::new(1.0, 1.0),
            },
        )
        .expect("No-op sollte keinen Fehler liefern");

    assert_eq!(state.selection(), Some(&before));
}

#[test]
fn test_anchor_move_request_regenerates_path() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_square(&mut controller, &mut state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::AnchorMoveRequested {
                shape: 0,
                index: 1,
                pos: DVec2::new(120.0, -20.0),
            },
        )
        .expect("AnchorMoveRequested sollte funktionieren");

    let shape = state.selection().expect("Form erwartet");
    assert_eq!(shape.points()[1], DVec2::new(120.0, -20.0));
    assert_eq!(
        controller.build_render_scene(&state).handles[1].center,
        DVec2::new(120.0, -20.0)
    );
}

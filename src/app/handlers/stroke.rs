//! Handler für Zeigereingaben auf der Zeichenfläche.

use crate::app::AppState;
use glam::DVec2;

/// Greift einen Anker-Griff oder beginnt einen neuen Strich.
pub fn begin_pointer(state: &mut AppState, pointer_id: u64, pos: DVec2) {
    let outcome = state.surface.pointer_down(pointer_id, pos);
    log::debug!("Zeiger {} gedrückt bei {:?}: {:?}", pointer_id, pos, outcome);
}

/// Verlängert den Strich bzw. bewegt den gezogenen Anker.
pub fn move_pointer(state: &mut AppState, pointer_id: u64, pos: DVec2) {
    if state.surface.pointer_move(pointer_id, pos) {
        sync_selection_fields(state);
    }
}

/// Beendet Strich oder Drag.
pub fn release_pointer(state: &mut AppState, pointer_id: u64) {
    if let Some(outcome) = state.surface.pointer_up(pointer_id) {
        state.last_stroke = Some(outcome);
    }
    sync_selection_fields(state);
}

/// Verwirft alle Formen, den laufenden Strich und die Auswahlfelder.
pub fn clear(state: &mut AppState) {
    state.surface.clear();
    state.selection_fields.clear();
}

/// Sperrt oder erlaubt Zeigereingaben.
pub fn set_interaction_enabled(state: &mut AppState, enabled: bool) {
    state.surface.set_interaction_enabled(enabled);
}

/// Ohne Auswahl gibt es nichts zu beschriften.
fn sync_selection_fields(state: &mut AppState) {
    if state.selection().is_none() {
        state.selection_fields.clear();
    }
}

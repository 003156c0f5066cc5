//! Handler für direktes Anker-Editing.

use crate::app::AppState;
use glam::DVec2;

/// Setzt Anker `(shape, index)`; ungültige Indizes sind ein No-op.
pub fn move_anchor(state: &mut AppState, shape: usize, index: usize, pos: DVec2) {
    state.surface.move_anchor(shape, index, pos);
}

//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let editor = state.surface.editor();

    RenderScene {
        preview_points: state.surface.session().raw_points().to_vec(),
        outlines: editor
            .shapes()
            .iter()
            .map(|shape| shape.path_data().to_string())
            .collect(),
        handles: editor.handles(),
        mask_path_data: state.surface.mask_path_data().to_string(),
        logo_path_data: state.logo.as_ref().map(|logo| logo.to_path_data()),
        options: state.options.clone(),
    }
}

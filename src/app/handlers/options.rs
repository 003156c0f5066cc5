//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;
use anyhow::Context;
use std::path::Path;

/// Übernimmt neue Optionen und reicht die Strich-Parameter an die Fläche weiter.
pub fn apply(state: &mut AppState, options: EditorOptions) {
    state.surface.set_config(options.sketch_config());
    state.options = options;
}

/// Speichert die aktuellen Optionen als TOML.
pub fn save(state: &AppState, path: &Path) -> anyhow::Result<()> {
    state
        .options
        .save_to_file(path)
        .with_context(|| format!("Optionen nicht speicherbar: {}", path.display()))
}

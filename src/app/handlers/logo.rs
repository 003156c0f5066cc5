//! Handler für den editierbaren Logo-Pfad.

use crate::app::AppState;
use crate::export::read_first_path_data;
use anyhow::Context;
use cloud_sketch_engine::LogoPath;
use glam::DVec2;
use std::path::Path;

/// Zerlegt einen Pfad-String in Logo-Anker.
pub fn load_path_data(state: &mut AppState, path_data: &str) {
    let logo = LogoPath::from_path_data(path_data);
    log::info!(
        "Logo-Pfad geladen: {} Anker, {} Segmente",
        logo.anchor_count(),
        logo.segment_count()
    );
    state.logo = Some(logo);
}

/// Lädt den ersten `<path>` einer SVG-Datei als Logo.
pub fn load_file(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Logo-Datei nicht lesbar: {}", path.display()))?;
    let path_data = read_first_path_data(&content)
        .with_context(|| format!("Logo-Datei ungültig: {}", path.display()))?
        .with_context(|| format!("Kein <path> in {}", path.display()))?;
    load_path_data(state, &path_data);
    Ok(())
}

/// Verschiebt einen Logo-Anker; ohne Logo oder bei ungültigem Index ein No-op.
pub fn move_anchor(state: &mut AppState, index: usize, delta: DVec2) {
    match state.logo.as_mut() {
        Some(logo) => {
            logo.move_anchor(index, delta);
        }
        None => log::debug!("Kein Logo geladen, Anker-Verschiebung ignoriert"),
    }
}

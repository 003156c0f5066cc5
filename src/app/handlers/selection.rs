//! Handler für Auswahlfelder und Export der Auswahl.

use crate::app::AppState;
use crate::export::{build_selection_svg, SelectionFields, SelectionRecord};
use anyhow::Context;
use std::path::PathBuf;

/// Übernimmt die Freitextfelder der Auswahl.
pub fn set_fields(state: &mut AppState, what: &str, name: &str) {
    state.selection_fields = SelectionFields::new(what, name);
}

/// Exportiert die aktuelle Auswahl als Datensatz und/oder SVG.
///
/// Der Datensatz bleibt in `state.last_export` erhalten, auch wenn
/// keine Datei angegeben ist.
pub fn export(
    state: &mut AppState,
    record_path: Option<PathBuf>,
    svg_path: Option<PathBuf>,
    timestamp: &str,
) -> anyhow::Result<()> {
    let shape = state
        .selection()
        .context("Keine Auswahl zum Exportieren vorhanden")?;
    let record = SelectionRecord::from_shape(shape, &state.selection_fields, timestamp);

    if let Some(path) = record_path {
        record.write_to_file(&path)?;
    }

    if let Some(path) = svg_path {
        let svg = build_selection_svg(
            &record.path_data,
            state.options.surface_size,
            &state.options.outline_stroke_color,
            state.options.outline_stroke_width,
        );
        std::fs::write(&path, svg)
            .with_context(|| format!("SVG nicht schreibbar: {}", path.display()))?;
        log::info!("Umriss-SVG gespeichert nach: {}", path.display());
    }

    state.last_export = Some(record);
    Ok(())
}

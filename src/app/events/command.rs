use crate::shared::EditorOptions;
use glam::DVec2;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Griff greifen oder Strich beginnen
    BeginPointer { pointer_id: u64, pos: DVec2 },
    /// Strich verlängern bzw. gezogenen Anker bewegen
    MovePointer { pointer_id: u64, pos: DVec2 },
    /// Strich festschreiben/verwerfen bzw. Drag lösen
    ReleasePointer { pointer_id: u64 },
    /// Alle Formen und Auswahlfelder verwerfen
    ClearDrawing,
    /// Zeigereingaben sperren oder erlauben
    SetInteractionEnabled { enabled: bool },
    /// Anker direkt setzen
    MoveAnchor {
        shape: usize,
        index: usize,
        pos: DVec2,
    },
    /// Freitextfelder übernehmen
    SetSelectionFields { what: String, name: String },
    /// Aktuelle Auswahl exportieren
    ExportSelection {
        record_path: Option<PathBuf>,
        svg_path: Option<PathBuf>,
        timestamp: String,
    },
    /// Logo-Pfad aus Pfad-String zerlegen
    LoadLogoPath { path_data: String },
    /// Logo-Pfad aus SVG-Datei laden
    LoadLogoFile { path: PathBuf },
    /// Logo-Anker verschieben
    MoveLogoAnchor { index: usize, delta: DVec2 },
    /// Optionen anwenden
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen als TOML speichern
    SaveOptions { path: PathBuf },
}

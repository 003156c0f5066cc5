//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::export::{SelectionFields, SelectionRecord};
use crate::shared::EditorOptions;
use cloud_sketch_engine::{LogoPath, Shape, SketchSurface, StrokeOutcome};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Zeichenfläche: Strich-Sitzung, Formen, Zeigerbindung
    pub surface: SketchSurface,
    /// Freitextfelder der aktuellen Auswahl
    pub selection_fields: SelectionFields,
    /// Editierbarer Logo-Pfad (None = kein Logo geladen)
    pub logo: Option<LogoPath>,
    /// Ergebnis des zuletzt beendeten Strichs
    pub last_stroke: Option<StrokeOutcome>,
    /// Zuletzt exportierter Datensatz
    pub last_export: Option<SelectionRecord>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Schwellen, Farben, Export)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            surface: SketchSurface::new(options.sketch_config()),
            selection_fields: SelectionFields::default(),
            logo: None,
            last_stroke: None,
            last_export: None,
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Aktuelle Auswahl (zuletzt festgeschriebene Form).
    pub fn selection(&self) -> Option<&Shape> {
        self.surface.selection()
    }

    /// Absenden möglich: Auswahl vorhanden und beide Felder ausgefüllt.
    pub fn can_submit(&self) -> bool {
        self.selection().is_some_and(|s| !s.path_data().is_empty())
            && self.selection_fields.is_complete()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

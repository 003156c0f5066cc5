use crate::shared::EditorOptions;
use glam::DVec2;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger auf der Zeichenfläche gedrückt (lokale Pixelkoordinaten)
    PointerPressed { pointer_id: u64, pos: DVec2 },
    /// Zeiger bewegt
    PointerMoved { pointer_id: u64, pos: DVec2 },
    /// Zeiger losgelassen
    PointerReleased { pointer_id: u64 },
    /// Zeiger vom System abgebrochen (wird wie Loslassen behandelt)
    PointerCancelled { pointer_id: u64 },
    /// Zeichnung verwerfen
    ClearRequested,
    /// Zeichenansicht betreten/verlassen
    SketchViewToggled { active: bool },
    /// Anker einer Form direkt setzen (z.B. per Tastatur)
    AnchorMoveRequested {
        shape: usize,
        index: usize,
        pos: DVec2,
    },
    /// Freitextfelder der Auswahl geändert
    SelectionFieldsEdited { what: String, name: String },
    /// Auswahl absenden: Datensatz und/oder SVG schreiben, danach Fläche leeren
    SubmitSelectionRequested {
        record_path: Option<PathBuf>,
        svg_path: Option<PathBuf>,
        timestamp: String,
    },
    /// Logo-Pfad als Pfad-String laden
    LogoPathLoaded { path_data: String },
    /// Logo-Pfad aus einer SVG-Datei laden
    LogoFileSelected { path: PathBuf },
    /// Logo-Anker um Delta verschieben
    LogoAnchorNudged { index: usize, delta: DVec2 },
    /// Optionen wurden geändert (sofort anwenden)
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen speichern
    SaveOptionsRequested { path: PathBuf },
}

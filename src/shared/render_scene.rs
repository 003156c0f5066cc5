//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Host-Renderer sie konsumiert.

use super::options::EditorOptions;
use cloud_sketch_engine::AnchorHandle;
use glam::DVec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Rohe Zeigerspur des laufenden Strichs (Polyline-Vorschau)
    pub preview_points: Vec<DVec2>,
    /// Pfad-Strings aller festgeschriebenen Formen
    pub outlines: Vec<String>,
    /// Anker-Griffe in Zeichenreihenfolge
    pub handles: Vec<AnchorHandle>,
    /// Pfad der Auswahlmaske; leer = keine Überlagerung
    pub mask_path_data: String,
    /// Aktueller Logo-Pfad (falls geladen)
    pub logo_path_data: Option<String>,
    /// Laufzeit-Optionen für Farben und Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob die Maskenüberlagerung gezeichnet werden soll.
    pub fn has_mask(&self) -> bool {
        !self.mask_path_data.is_empty()
    }

    /// Gibt zurück, ob gerade ein Strich als Vorschau läuft.
    pub fn has_preview(&self) -> bool {
        !self.preview_points.is_empty()
    }
}

//! Auswahl-Datensatz für Persistenz-Collaborators.
//!
//! JSON-Form: `{timestamp, what, name, pathData, points: [{x, y}]}`.

use anyhow::Context;
use cloud_sketch_engine::Shape;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Freitextfelder zur Auswahl ("Was ist zu sehen?" und Name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionFields {
    pub what: String,
    pub name: String,
}

impl SelectionFields {
    /// Erstellt die Felder; Leerraum an den Rändern wird entfernt.
    pub fn new(what: &str, name: &str) -> Self {
        Self {
            what: what.trim().to_string(),
            name: name.trim().to_string(),
        }
    }

    /// Absenden ist erst möglich, wenn beide Felder ausgefüllt sind.
    pub fn is_complete(&self) -> bool {
        !self.what.trim().is_empty() && !self.name.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.what.clear();
        self.name.clear();
    }
}

/// Punkt im Datensatz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordPoint {
    pub x: f64,
    pub y: f64,
}

impl From<DVec2> for RecordPoint {
    fn from(p: DVec2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Exportierte Auswahl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRecord {
    pub timestamp: String,
    pub what: String,
    pub name: String,
    pub path_data: String,
    pub points: Vec<RecordPoint>,
}

impl SelectionRecord {
    /// Baut den Datensatz aus einer festgeschriebenen Form.
    pub fn from_shape(shape: &Shape, fields: &SelectionFields, timestamp: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            what: fields.what.trim().to_string(),
            name: fields.name.trim().to_string(),
            path_data: shape.path_data().to_string(),
            points: shape.points().iter().copied().map(RecordPoint::from).collect(),
        }
    }

    /// JSON mit zwei Leerzeichen Einrückung.
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Auswahl konnte nicht serialisiert werden")
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("Ungültiger Auswahl-Datensatz")
    }

    /// Schreibt den Datensatz als JSON-Datei.
    pub fn write_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = self.to_json_pretty()?;
        std::fs::write(path, content)
            .with_context(|| format!("Datensatz nicht schreibbar: {}", path.display()))?;
        log::info!("Auswahl-Datensatz gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Punkte als Vektoren.
    pub fn points(&self) -> Vec<DVec2> {
        self.points.iter().map(|p| DVec2::new(p.x, p.y)).collect()
    }

    /// Galerie-Beschriftung: `what — name`, ohne Name nur `what`.
    pub fn caption(&self) -> String {
        if self.name.is_empty() {
            self.what.trim().to_string()
        } else {
            format!("{} — {}", self.what, self.name).trim().to_string()
        }
    }
}

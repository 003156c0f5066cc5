//! Zentrale Konfiguration für Cloud-Sketch.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use cloud_sketch_engine::config::{ANCHOR_HANDLE_SIZE, MIN_POINT_DISTANCE, SIMPLIFY_EPSILON};
use cloud_sketch_engine::SketchConfig;
use serde::{Deserialize, Serialize};

// ── Umriss ──────────────────────────────────────────────────────────

/// Strichfarbe von Umriss und Live-Vorschau.
pub const OUTLINE_STROKE_COLOR: &str = "#00b7ff";
/// Strichbreite von Umriss und Live-Vorschau (Pixel).
pub const OUTLINE_STROKE_WIDTH: f64 = 1.5;

// ── Maske ───────────────────────────────────────────────────────────

/// Abdunklung außerhalb der Auswahl (RGBA).
pub const MASK_OVERLAY_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.25];

// ── Export ──────────────────────────────────────────────────────────

/// Größe der Zeichenfläche für den SVG-Export [Breite, Höhe].
pub const SURFACE_SIZE: [f64; 2] = [1920.0, 1080.0];
/// Rand um die Pfad-Bounding-Box in der Galerie-Vorschau.
pub const PREVIEW_PADDING: f64 = 8.0;
/// Referenzrahmen, auf den die Vorschau-ViewBox geklemmt wird.
pub const PREVIEW_FRAME_SIZE: [f64; 2] = [1920.0, 1080.0];

/// Laufzeit-Optionen, als TOML neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Strich ──────────────────────────────────────────────────────
    /// Mindestabstand zwischen aufgenommenen Punkten
    #[serde(default = "default_min_point_distance")]
    pub min_point_distance: f64,
    /// Douglas-Peucker-Toleranz
    #[serde(default = "default_simplify_epsilon")]
    pub simplify_epsilon: f64,
    /// Kantenlänge der Anker-Griffe
    #[serde(default = "default_anchor_handle_size")]
    pub anchor_handle_size: f64,

    // ── Darstellung ─────────────────────────────────────────────────
    #[serde(default = "default_outline_stroke_color")]
    pub outline_stroke_color: String,
    #[serde(default = "default_outline_stroke_width")]
    pub outline_stroke_width: f64,
    #[serde(default = "default_mask_overlay_color")]
    pub mask_overlay_color: [f32; 4],

    // ── Export ──────────────────────────────────────────────────────
    #[serde(default = "default_surface_size")]
    pub surface_size: [f64; 2],
    #[serde(default = "default_preview_padding")]
    pub preview_padding: f64,
    #[serde(default = "default_preview_frame_size")]
    pub preview_frame_size: [f64; 2],
}

fn default_min_point_distance() -> f64 {
    MIN_POINT_DISTANCE
}

fn default_simplify_epsilon() -> f64 {
    SIMPLIFY_EPSILON
}

fn default_anchor_handle_size() -> f64 {
    ANCHOR_HANDLE_SIZE
}

fn default_outline_stroke_color() -> String {
    OUTLINE_STROKE_COLOR.to_string()
}

fn default_outline_stroke_width() -> f64 {
    OUTLINE_STROKE_WIDTH
}

fn default_mask_overlay_color() -> [f32; 4] {
    MASK_OVERLAY_COLOR
}

fn default_surface_size() -> [f64; 2] {
    SURFACE_SIZE
}

fn default_preview_padding() -> f64 {
    PREVIEW_PADDING
}

fn default_preview_frame_size() -> [f64; 2] {
    PREVIEW_FRAME_SIZE
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            min_point_distance: MIN_POINT_DISTANCE,
            simplify_epsilon: SIMPLIFY_EPSILON,
            anchor_handle_size: ANCHOR_HANDLE_SIZE,
            outline_stroke_color: OUTLINE_STROKE_COLOR.to_string(),
            outline_stroke_width: OUTLINE_STROKE_WIDTH,
            mask_overlay_color: MASK_OVERLAY_COLOR,
            surface_size: SURFACE_SIZE,
            preview_padding: PREVIEW_PADDING,
            preview_frame_size: PREVIEW_FRAME_SIZE,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler → Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("cloud-sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("cloud_sketch.toml")
    }

    /// Parameter für den Geometrie-Kern.
    pub fn sketch_config(&self) -> SketchConfig {
        SketchConfig {
            min_point_distance: self.min_point_distance,
            simplify_epsilon: self.simplify_epsilon,
            anchor_handle_size: self.anchor_handle_size,
        }
    }
}

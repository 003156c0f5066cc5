//! Parameter der Strich-Verarbeitung.
//!
//! Die `const`-Werte sind die Standardwerte und bleiben als Fallback erhalten.

use serde::{Deserialize, Serialize};

/// Mindestabstand (Pixel) zum zuletzt aufgenommenen Punkt, damit ein
/// Zeigerereignis als neuer Punkt zählt.
pub const MIN_POINT_DISTANCE: f64 = 3.0;
/// Toleranz (Pixel) der Douglas-Peucker-Vereinfachung.
pub const SIMPLIFY_EPSILON: f64 = 2.5;
/// Kantenlänge (Pixel) der quadratischen Anker-Griffe.
pub const ANCHOR_HANDLE_SIZE: f64 = 6.0;

/// Laufzeit-Parameter für Aufnahme, Vereinfachung und Anker-Griffe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SketchConfig {
    /// Rauschfilter für Zeigerbewegungen
    #[serde(default = "default_min_point_distance")]
    pub min_point_distance: f64,
    /// Vereinfachungs-Toleranz
    #[serde(default = "default_simplify_epsilon")]
    pub simplify_epsilon: f64,
    /// Griffgröße für Hit-Tests
    #[serde(default = "default_anchor_handle_size")]
    pub anchor_handle_size: f64,
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

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            min_point_distance: MIN_POINT_DISTANCE,
            simplify_epsilon: SIMPLIFY_EPSILON,
            anchor_handle_size: ANCHOR_HANDLE_SIZE,
        }
    }
}

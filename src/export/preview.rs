//! ViewBox für Galerie-Vorschaubilder einer gespeicherten Auswahl.

use cloud_sketch_engine::{parse_path_data, path_bounds};
use std::fmt;

/// Ausschnitt `x y width height` im Koordinatensystem der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// Bounding-Box des Pfads plus `padding`, geklemmt auf den Referenzrahmen.
///
/// Der Ursprung wird auf ≥ 0 geklemmt, Breite und Höhe auf die Rahmengröße.
/// `None` für leere oder unlesbare Pfade (Vorschau nicht verfügbar).
pub fn preview_view_box(path_data: &str, padding: f64, frame_size: [f64; 2]) -> Option<ViewBox> {
    let (min, max) = path_bounds(&parse_path_data(path_data))?;
    let size = max - min;
    Some(ViewBox {
        x: (min.x - padding).max(0.0),
        y: (min.y - padding).max(0.0),
        width: (size.x + padding * 2.0).min(frame_size[0]),
        height: (size.y + padding * 2.0).min(frame_size[1]),
    })
}

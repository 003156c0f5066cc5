//! Pfad-Beschreibung (SVG-`d`-Attribut): Befehle, Ausgabe, toleranter Parser.
//!
//! Aufgeteilt in:
//! - `format` — Befehle → String (bitgenaues Ausgabeformat)
//! - `parser` — String → Befehle (best effort, überspringt Unbekanntes)
//! - `bounds` — Überführung nach `kurbo` und exakte Bounding-Box

mod bounds;
mod format;
mod parser;


pub use bounds::{path_bounds, to_bez_path};
pub use format::format_path_data;
pub(crate) use format::format_number;
pub use parser::parse_path_data;

use glam::DVec2;

/// Ein absoluter Zeichenbefehl.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x y` — neuen Teilpfad beginnen
    MoveTo(DVec2),
    /// `L x y` — gerade Linie
    LineTo(DVec2),
    /// `C c1x c1y, c2x c2y, x y` — kubische Bézier-Kurve
    CurveTo(DVec2, DVec2, DVec2),
    /// `Z` — Teilpfad schließen
    Close,
}

impl PathCommand {
    /// Endpunkt des Befehls (`None` für `Close`).
    pub fn end_point(&self) -> Option<DVec2> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::CurveTo(_, _, p) => {
                Some(p)
            }
            PathCommand::Close => None,
        }
    }
}

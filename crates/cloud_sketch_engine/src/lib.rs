//! Cloud-Sketch Engine.
//!
//! Reiner Geometrie- und Zustandskern des Freihand-Werkzeugs:
//! Zeigerspur aufnehmen, per Douglas-Peucker vereinfachen, als geschlossenen
//! Catmull-Rom-Pfad ausgeben und einzelne Anker nachträglich verschieben.
//! Keine I/O und kein Rendering: der Host zieht sich die Daten selbst.

pub mod anchor_editor;
pub mod config;
pub mod geometry;
pub mod logo;
pub mod path_data;
pub mod session;
pub mod simplify;
pub mod spline;
pub mod surface;

pub use anchor_editor::{AnchorEditor, AnchorHandle, Shape};
pub use config::SketchConfig;
pub use geometry::{bounds, distance, point_to_segment_distance};
pub use logo::LogoPath;
pub use path_data::{format_path_data, parse_path_data, path_bounds, to_bez_path, PathCommand};
pub use session::{MoveOutcome, StrokeOutcome, StrokeSession};
pub use simplify::simplify_rdp;
pub use spline::{build_closed_path_data, build_path_data};
pub use surface::{PointerBinding, PointerDownOutcome, SketchSurface};

/// Punkt in lokalen Zeichenflächen-Koordinaten (Pixel).
pub type Point = glam::DVec2;

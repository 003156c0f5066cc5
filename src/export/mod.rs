//! Export der Auswahl: JSON-Datensatz, Umriss-SVG und Galerie-ViewBox.
//!
//! Außerdem das Einlesen eines Logo-Pfads aus einer SVG-Datei.

mod preview;
mod record;
mod svg;

pub use preview::{preview_view_box, ViewBox};
pub use record::{RecordPoint, SelectionFields, SelectionRecord};
pub use svg::{build_selection_svg, read_first_path_data};

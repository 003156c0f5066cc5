//! Cloud-Sketch Library.
//! Freihand-Wolkenauswahl als Library exportiert für Tests und Wiederverwendung.
//!
//! Der Geometrie-Kern liegt im Crate `cloud_sketch_engine`; hier leben
//! Application-Layer, Optionen, Export und das Replay-Werkzeug.

pub mod app;
pub mod export;
pub mod replay;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use cloud_sketch_engine as engine;
pub use export::{SelectionFields, SelectionRecord};
pub use replay::{PointerEvent, PointerEventKind};
pub use shared::{EditorOptions, RenderScene};

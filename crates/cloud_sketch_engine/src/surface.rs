//! Zeichenfläche: verbindet Strich-Sitzung, Anker-Editor und Zeigerbindung.
//!
//! Genau ein Zeiger kann gebunden sein, entweder zum Zeichnen oder zum
//! Ziehen eines Ankers. Abbrechen wird wie Loslassen behandelt.

use glam::DVec2;

use crate::anchor_editor::{AnchorEditor, Shape};
use crate::config::SketchConfig;
use crate::session::{MoveOutcome, StrokeOutcome, StrokeSession};

/// Wofür der aktive Zeiger gebunden ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerBinding {
    #[default]
    Idle,
    Drawing {
        pointer_id: u64,
    },
    DraggingAnchor {
        pointer_id: u64,
        shape: usize,
        index: usize,
    },
}

impl PointerBinding {
    /// Gebundene Zeiger-ID.
    pub fn pointer_id(&self) -> Option<u64> {
        match *self {
            PointerBinding::Idle => None,
            PointerBinding::Drawing { pointer_id }
            | PointerBinding::DraggingAnchor { pointer_id, .. } => Some(pointer_id),
        }
    }
}

/// Ergebnis eines Zeiger-Drucks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDownOutcome {
    /// Interaktion gesperrt oder anderer Zeiger bereits gebunden
    Ignored,
    StrokeStarted,
    AnchorGrabbed { shape: usize, index: usize },
}

/// Zustand der Freihand-Auswahl auf einer Zeichenfläche.
#[derive(Debug, Clone)]
pub struct SketchSurface {
    session: StrokeSession,
    editor: AnchorEditor,
    binding: PointerBinding,
    interaction_enabled: bool,
}

impl Default for SketchSurface {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl SketchSurface {
    /// Leere Fläche mit den gegebenen Parametern; Interaktion aktiv.
    pub fn new(config: SketchConfig) -> Self {
        Self {
            session: StrokeSession::new(config),
            editor: AnchorEditor::new(config.anchor_handle_size),
            binding: PointerBinding::Idle,
            interaction_enabled: true,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        self.session.config()
    }

    /// Übernimmt neue Parameter für Filter, Toleranz und Griffgröße.
    pub fn set_config(&mut self, config: SketchConfig) {
        self.editor.set_handle_size(config.anchor_handle_size);
        self.session.set_config(config);
    }

    pub fn session(&self) -> &StrokeSession {
        &self.session
    }

    pub fn editor(&self) -> &AnchorEditor {
        &self.editor
    }

    pub fn binding(&self) -> PointerBinding {
        self.binding
    }

    pub fn interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// Sperrt oder erlaubt Zeigereingaben. Beim Sperren wird ein laufender
    /// Strich verworfen und ein Drag gelöst.
    pub fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
        if !enabled && self.binding != PointerBinding::Idle {
            log::debug!("Interaktion gesperrt, Bindung {:?} gelöst", self.binding);
            self.session.reset();
            self.editor.end_drag();
            self.binding = PointerBinding::Idle;
        }
    }

    /// Aktuelle Auswahl: die zuletzt festgeschriebene Form.
    pub fn selection(&self) -> Option<&Shape> {
        self.editor.latest()
    }

    /// Pfad für die Maskenüberlagerung; leer = keine Maske.
    pub fn mask_path_data(&self) -> &str {
        self.selection().map(Shape::path_data).unwrap_or("")
    }

    /// Zeiger gedrückt: Griff unter `pos` greifen oder neuen Strich beginnen.
    pub fn pointer_down(&mut self, pointer_id: u64, pos: DVec2) -> PointerDownOutcome {
        if !self.interaction_enabled || self.binding != PointerBinding::Idle {
            return PointerDownOutcome::Ignored;
        }
        if let Some((shape, index)) = self.editor.hit_test(pos) {
            if self.editor.begin_drag(shape, index) {
                self.binding = PointerBinding::DraggingAnchor {
                    pointer_id,
                    shape,
                    index,
                };
                return PointerDownOutcome::AnchorGrabbed { shape, index };
            }
        }
        if !self.session.begin(pointer_id, pos) {
            return PointerDownOutcome::Ignored;
        }
        self.binding = PointerBinding::Drawing { pointer_id };
        PointerDownOutcome::StrokeStarted
    }

    /// Zeiger bewegt. Liefert `true`, wenn sich sichtbarer Zustand geändert hat.
    pub fn pointer_move(&mut self, pointer_id: u64, pos: DVec2) -> bool {
        match self.binding {
            PointerBinding::DraggingAnchor { pointer_id: id, .. } if id == pointer_id => {
                self.editor.drag_to(pos)
            }
            PointerBinding::Drawing { pointer_id: id } if id == pointer_id => {
                match self.session.extend(pointer_id, pos) {
                    MoveOutcome::Ignored => false,
                    MoveOutcome::Started => {
                        // Neuer Strich ersetzt die bisherige Zeichnung
                        self.editor.clear();
                        true
                    }
                    MoveOutcome::Appended => true,
                }
            }
            _ => false,
        }
    }

    /// Zeiger losgelassen oder abgebrochen.
    ///
    /// Liefert das Strich-Ergebnis, wenn ein Strich endete; `None` nach
    /// einem Anker-Drag oder für ungebundene Zeiger.
    pub fn pointer_up(&mut self, pointer_id: u64) -> Option<StrokeOutcome> {
        match self.binding {
            PointerBinding::DraggingAnchor { pointer_id: id, .. } if id == pointer_id => {
                self.editor.end_drag();
                self.binding = PointerBinding::Idle;
                None
            }
            PointerBinding::Drawing { pointer_id: id } if id == pointer_id => {
                self.binding = PointerBinding::Idle;
                let outcome = self.session.finish(pointer_id)?;
                match &outcome {
                    // Antippen löscht die bisherige Zeichnung
                    StrokeOutcome::Discarded => self.editor.clear(),
                    StrokeOutcome::Committed { points, .. } => {
                        self.editor.commit(points.clone());
                    }
                }
                Some(outcome)
            }
            _ => None,
        }
    }

    /// Verschiebt einen Anker direkt (ohne Zeigerbindung).
    pub fn move_anchor(&mut self, shape: usize, index: usize, pos: DVec2) -> bool {
        self.editor.move_anchor(shape, index, pos)
    }

    /// Entfernt alle Formen und setzt Strich und Bindung zurück.
    pub fn clear(&mut self) {
        self.session.reset();
        self.editor.clear();
        self.binding = PointerBinding::Idle;
    }
}

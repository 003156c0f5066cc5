//! Festgeschriebene Formen und das Verschieben einzelner Anker.
//!
//! Jeder Punkt einer Form ist ein Anker-Griff `(Form, Index)`. Wird ein
//! Anker verschoben, ändert sich nur dieser Punkt; der geschlossene Pfad
//! der Form wird aus allen Punkten neu erzeugt.

use glam::DVec2;

use crate::config::ANCHOR_HANDLE_SIZE;
use crate::spline::build_closed_path_data;

/// Eine festgeschriebene Auswahlform: vereinfachte Punkte und ihr Pfad.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    points: Vec<DVec2>,
    path_data: String,
}

impl Shape {
    /// Erzeugt die Form und leitet den geschlossenen Pfad ab.
    pub fn new(points: Vec<DVec2>) -> Self {
        let path_data = build_closed_path_data(&points);
        Self { points, path_data }
    }

    /// Anker in Reihenfolge.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Aktueller Pfad-String (immer aus `points` abgeleitet).
    pub fn path_data(&self) -> &str {
        &self.path_data
    }

    /// Anzahl der Anker.
    pub fn anchor_count(&self) -> usize {
        self.points.len()
    }

    /// Setzt Anker `index` und erzeugt den Pfad neu. `false` bei ungültigem Index.
    fn set_point(&mut self, index: usize, pos: DVec2) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        *point = pos;
        self.path_data = build_closed_path_data(&self.points);
        true
    }
}

/// Quadratischer Griff um einen Anker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorHandle {
    /// Index der Form im Editor
    pub shape: usize,
    /// Index des Punkts innerhalb der Form
    pub index: usize,
    /// Mittelpunkt (= Ankerposition)
    pub center: DVec2,
    /// Kantenlänge
    pub size: f64,
}

impl AnchorHandle {
    /// Linke obere Ecke.
    pub fn min(&self) -> DVec2 {
        self.center - DVec2::splat(self.size / 2.0)
    }

    /// Rechte untere Ecke.
    pub fn max(&self) -> DVec2 {
        self.center + DVec2::splat(self.size / 2.0)
    }

    /// `true`, wenn `pos` im Griff liegt (Rand eingeschlossen).
    pub fn contains(&self, pos: DVec2) -> bool {
        let (min, max) = (self.min(), self.max());
        pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y
    }
}

/// Verwaltet die Formen und den aktuell gezogenen Anker.
#[derive(Debug, Clone)]
pub struct AnchorEditor {
    shapes: Vec<Shape>,
    handle_size: f64,
    dragging: Option<(usize, usize)>,
}

impl Default for AnchorEditor {
    fn default() -> Self {
        Self::new(ANCHOR_HANDLE_SIZE)
    }
}

impl AnchorEditor {
    /// Leerer Editor mit gegebener Griffgröße.
    pub fn new(handle_size: f64) -> Self {
        Self {
            shapes: Vec::new(),
            handle_size,
            dragging: None,
        }
    }

    /// Alle Formen in Einfügereihenfolge.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Form `index`, falls vorhanden.
    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Zuletzt festgeschriebene Form (die aktuelle Auswahl).
    pub fn latest(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    /// `true`, wenn keine Form existiert.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Griffgröße.
    pub fn handle_size(&self) -> f64 {
        self.handle_size
    }

    /// Setzt die Griffgröße für Hit-Tests und Griff-Ausgabe.
    pub fn set_handle_size(&mut self, size: f64) {
        self.handle_size = size;
    }

    /// Fügt eine Form hinzu und liefert ihren Index.
    pub fn commit(&mut self, points: Vec<DVec2>) -> usize {
        self.shapes.push(Shape::new(points));
        self.shapes.len() - 1
    }

    /// Entfernt alle Formen und beendet einen laufenden Drag.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.dragging = None;
    }

    /// Verschiebt Anker `(shape, index)` nach `pos`.
    ///
    /// Ungültige Indizes sind ein stiller No-op (`false`).
    pub fn move_anchor(&mut self, shape: usize, index: usize, pos: DVec2) -> bool {
        let moved = self
            .shapes
            .get_mut(shape)
            .is_some_and(|s| s.set_point(index, pos));
        if !moved {
            log::debug!("Anker ({shape}, {index}) existiert nicht, ignoriert");
        }
        moved
    }

    /// Griffe aller Formen in Zeichenreihenfolge.
    pub fn handles(&self) -> Vec<AnchorHandle> {
        self.shapes
            .iter()
            .enumerate()
            .flat_map(|(shape, s)| {
                s.points.iter().enumerate().map(move |(index, &center)| AnchorHandle {
                    shape,
                    index,
                    center,
                    size: self.handle_size,
                })
            })
            .collect()
    }

    /// Oberster Griff unter `pos`: neueste Form zuerst, spätere Indizes zuerst.
    pub fn hit_test(&self, pos: DVec2) -> Option<(usize, usize)> {
        self.shapes.iter().enumerate().rev().find_map(|(shape, s)| {
            s.points
                .iter()
                .enumerate()
                .rev()
                .find(|&(index, &center)| {
                    AnchorHandle {
                        shape,
                        index,
                        center,
                        size: self.handle_size,
                    }
                    .contains(pos)
                })
                .map(|(index, _)| (shape, index))
        })
    }

    /// Bindet den Drag an Anker `(shape, index)`. `false` bei ungültigem Anker.
    pub fn begin_drag(&mut self, shape: usize, index: usize) -> bool {
        let valid = self
            .shapes
            .get(shape)
            .is_some_and(|s| index < s.anchor_count());
        if valid {
            self.dragging = Some((shape, index));
        }
        valid
    }

    /// Aktuell gezogener Anker.
    pub fn dragging(&self) -> Option<(usize, usize)> {
        self.dragging
    }

    /// Verschiebt den gezogenen Anker. `false` ohne aktiven Drag.
    pub fn drag_to(&mut self, pos: DVec2) -> bool {
        match self.dragging {
            Some((shape, index)) => self.move_anchor(shape, index, pos),
            None => false,
        }
    }

    /// Löst die Drag-Bindung; sonst keine Änderung.
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }
}

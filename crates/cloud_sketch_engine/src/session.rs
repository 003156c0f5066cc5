//! Zustandsautomat für einen einzelnen Freihand-Strich.
//!
//! `Idle → Active → {Committed | Discarded}`. Die Sitzung ist an eine
//! Zeiger-ID gebunden; Ereignisse anderer Zeiger werden ignoriert.

use glam::DVec2;

use crate::config::SketchConfig;
use crate::simplify::simplify_rdp;
use crate::spline::build_closed_path_data;

/// Ergebnis einer Zeigerbewegung während eines aktiven Strichs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Fremder Zeiger, keine Sitzung oder unter dem Mindestabstand
    Ignored,
    /// Erster Punkt, der den Mindestabstand überschreitet.
    /// Vorher festgeschriebene Formen sind ab jetzt zu verwerfen.
    Started,
    /// Weiterer Punkt angehängt
    Appended,
}

/// Abschluss eines Strichs.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeOutcome {
    /// Antippen ohne Bewegung über den Mindestabstand: keine Form
    Discarded,
    /// Vereinfachte Punkte plus geschlossener Pfad
    Committed {
        points: Vec<DVec2>,
        path_data: String,
    },
}

#[derive(Debug, Clone, Default)]
enum SessionState {
    #[default]
    Idle,
    Active {
        pointer_id: u64,
        points: Vec<DVec2>,
    },
}

/// Nimmt die rohe Zeigerspur auf und schreibt sie beim Loslassen fest.
#[derive(Debug, Clone, Default)]
pub struct StrokeSession {
    state: SessionState,
    config: SketchConfig,
}

impl StrokeSession {
    /// Erstellt eine leere Sitzung mit den gegebenen Parametern.
    pub fn new(config: SketchConfig) -> Self {
        Self {
            state: SessionState::Idle,
            config,
        }
    }

    /// Aktuelle Parameter.
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Ersetzt die Parameter; wirkt ab dem nächsten Ereignis.
    pub fn set_config(&mut self, config: SketchConfig) {
        self.config = config;
    }

    /// `true`, solange ein Strich aufgenommen wird.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    /// Gebundene Zeiger-ID der aktiven Sitzung.
    pub fn pointer_id(&self) -> Option<u64> {
        match self.state {
            SessionState::Active { pointer_id, .. } => Some(pointer_id),
            SessionState::Idle => None,
        }
    }

    /// Rohe Spur für die Live-Vorschau (leer im Leerlauf).
    pub fn raw_points(&self) -> &[DVec2] {
        match &self.state {
            SessionState::Active { points, .. } => points,
            SessionState::Idle => &[],
        }
    }

    /// Startet einen Strich. Liefert `false`, wenn bereits einer läuft.
    pub fn begin(&mut self, pointer_id: u64, pos: DVec2) -> bool {
        if self.is_active() {
            return false;
        }
        self.state = SessionState::Active {
            pointer_id,
            points: vec![pos],
        };
        true
    }

    /// Hängt `pos` an, falls der Mindestabstand zum letzten Punkt erreicht ist.
    pub fn extend(&mut self, pointer_id: u64, pos: DVec2) -> MoveOutcome {
        let min_distance = self.config.min_point_distance;
        let SessionState::Active {
            pointer_id: bound,
            points,
        } = &mut self.state
        else {
            return MoveOutcome::Ignored;
        };
        if *bound != pointer_id {
            return MoveOutcome::Ignored;
        }
        let Some(&last) = points.last() else {
            return MoveOutcome::Ignored;
        };
        if last.distance(pos) < min_distance {
            return MoveOutcome::Ignored;
        }
        points.push(pos);
        if points.len() == 2 {
            MoveOutcome::Started
        } else {
            MoveOutcome::Appended
        }
    }

    /// Beendet den Strich (Loslassen oder Abbruch werden gleich behandelt).
    ///
    /// `None` bei fremdem Zeiger oder ohne aktive Sitzung.
    pub fn finish(&mut self, pointer_id: u64) -> Option<StrokeOutcome> {
        if self.pointer_id() != Some(pointer_id) {
            return None;
        }
        let SessionState::Active { points, .. } = std::mem::take(&mut self.state) else {
            return None;
        };
        if points.len() < 2 {
            log::debug!("Strich verworfen: Antippen ohne Bewegung");
            return Some(StrokeOutcome::Discarded);
        }
        let simplified = simplify_rdp(&points, self.config.simplify_epsilon);
        let path_data = build_closed_path_data(&simplified);
        log::debug!(
            "Strich festgeschrieben: {} → {} Punkte",
            points.len(),
            simplified.len()
        );
        Some(StrokeOutcome::Committed {
            points: simplified,
            path_data,
        })
    }

    /// Verwirft einen laufenden Strich ohne Ergebnis.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }
}

//! Editierbarer Logo-Pfad: vorhandener Pfad-String, zerlegt in Anker.
//!
//! Kontrollpunkte werden als Versatz zu ihrem Anker gespeichert: der
//! führende Kontrollpunkt eines Segments relativ zum Startanker, der
//! nachlaufende relativ zum Endanker. Ein verschobener Anker nimmt seine
//! Kontrollpunkte dadurch um dasselbe Delta mit. Die Kurve wird nicht
//! neu angepasst.

use glam::DVec2;

use crate::path_data::{format_path_data, parse_path_data, PathCommand};

#[derive(Debug, Clone, Copy, PartialEq)]
enum LogoElement {
    Move {
        anchor: usize,
    },
    Line {
        to: usize,
    },
    Curve {
        from: usize,
        to: usize,
        lead_offset: DVec2,
        trail_offset: DVec2,
    },
    Close,
}

/// Logo-Pfad mit verschiebbaren Ankern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogoPath {
    anchors: Vec<DVec2>,
    elements: Vec<LogoElement>,
}

impl LogoPath {
    /// Zerlegt einen Pfad-String. Nicht unterstützte Teile werden übersprungen.
    pub fn from_path_data(data: &str) -> Self {
        Self::from_commands(&parse_path_data(data))
    }

    /// Zerlegt absolute Pfad-Befehle in Anker und Segmente.
    pub fn from_commands(commands: &[PathCommand]) -> Self {
        let mut logo = Self::default();
        let mut current: Option<usize> = None;
        let mut subpath_start: Option<usize> = None;

        for (i, command) in commands.iter().enumerate() {
            let closes_next = matches!(
                commands.get(i + 1),
                None | Some(PathCommand::Close) | Some(PathCommand::MoveTo(_))
            );
            match *command {
                PathCommand::MoveTo(p) => {
                    let anchor = logo.push_anchor(p);
                    logo.elements.push(LogoElement::Move { anchor });
                    current = Some(anchor);
                    subpath_start = Some(anchor);
                }
                PathCommand::LineTo(p) => {
                    logo.ensure_current(&mut current, &mut subpath_start);
                    let to = logo.end_anchor(p, subpath_start, closes_next);
                    logo.elements.push(LogoElement::Line { to });
                    current = Some(to);
                }
                PathCommand::CurveTo(c1, c2, p) => {
                    let from = logo.ensure_current(&mut current, &mut subpath_start);
                    let to = logo.end_anchor(p, subpath_start, closes_next);
                    logo.elements.push(LogoElement::Curve {
                        from,
                        to,
                        lead_offset: c1 - logo.anchors[from],
                        trail_offset: c2 - logo.anchors[to],
                    });
                    current = Some(to);
                }
                PathCommand::Close => {
                    if subpath_start.is_some() {
                        logo.elements.push(LogoElement::Close);
                        current = subpath_start;
                    }
                }
            }
        }
        logo
    }

    fn push_anchor(&mut self, p: DVec2) -> usize {
        self.anchors.push(p);
        self.anchors.len() - 1
    }

    /// Pfade ohne führendes `M` beginnen am Ursprung.
    fn ensure_current(
        &mut self,
        current: &mut Option<usize>,
        subpath_start: &mut Option<usize>,
    ) -> usize {
        if let Some(anchor) = *current {
            return anchor;
        }
        let anchor = self.push_anchor(DVec2::ZERO);
        self.elements.push(LogoElement::Move { anchor });
        *current = Some(anchor);
        *subpath_start = Some(anchor);
        anchor
    }

    /// Endanker eines Segments; ein Schlusssegment zurück zum Start teilt dessen Anker.
    fn end_anchor(&mut self, p: DVec2, subpath_start: Option<usize>, closes: bool) -> usize {
        match subpath_start {
            Some(start) if closes && self.anchors[start] == p => start,
            _ => self.push_anchor(p),
        }
    }

    /// Ankerpositionen in Reihenfolge des ersten Auftretens.
    pub fn anchors(&self) -> &[DVec2] {
        &self.anchors
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Anzahl gezeichneter Segmente (Linien und Kurven).
    pub fn segment_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, LogoElement::Line { .. } | LogoElement::Curve { .. }))
            .count()
    }

    /// Verschiebt Anker `index` um `delta` samt angehängter Kontrollpunkte.
    ///
    /// Ungültiger Index → No-op (`false`).
    pub fn move_anchor(&mut self, index: usize, delta: DVec2) -> bool {
        let Some(anchor) = self.anchors.get_mut(index) else {
            log::debug!("Logo-Anker {index} existiert nicht, ignoriert");
            return false;
        };
        *anchor += delta;
        true
    }

    /// Setzt Anker `index` auf `pos` (Delta-Verschiebung relativ zur alten Lage).
    pub fn set_anchor(&mut self, index: usize, pos: DVec2) -> bool {
        match self.anchors.get(index) {
            Some(&old) => self.move_anchor(index, pos - old),
            None => false,
        }
    }

    /// Aktuelle absolute Befehle.
    pub fn to_commands(&self) -> Vec<PathCommand> {
        self.elements
            .iter()
            .map(|element| match *element {
                LogoElement::Move { anchor } => PathCommand::MoveTo(self.anchors[anchor]),
                LogoElement::Line { to } => PathCommand::LineTo(self.anchors[to]),
                LogoElement::Curve {
                    from,
                    to,
                    lead_offset,
                    trail_offset,
                } => PathCommand::CurveTo(
                    self.anchors[from] + lead_offset,
                    self.anchors[to] + trail_offset,
                    self.anchors[to],
                ),
                LogoElement::Close => PathCommand::Close,
            })
            .collect()
    }

    /// Aktueller Pfad-String.
    pub fn to_path_data(&self) -> String {
        format_path_data(&self.to_commands())
    }
}

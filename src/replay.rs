//! Aufgezeichnete Zeigerereignisse (JSON) für das Replay-Werkzeug.
//!
//! Format: `[{"kind": "down", "pointer_id": 1, "x": 10.0, "y": 20.0}, ...]`.
//! `up`/`cancel` brauchen keine Koordinaten.

use crate::app::{AppController, AppIntent, AppState};
use anyhow::Context;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Art des Zeigerereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Ein aufgezeichnetes Zeigerereignis in lokalen Flächenkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    #[serde(default)]
    pub pointer_id: u64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl PointerEvent {
    /// Übersetzt das Ereignis in den passenden Intent.
    pub fn to_intent(&self) -> AppIntent {
        let pointer_id = self.pointer_id;
        let pos = DVec2::new(self.x, self.y);
        match self.kind {
            PointerEventKind::Down => AppIntent::PointerPressed { pointer_id, pos },
            PointerEventKind::Move => AppIntent::PointerMoved { pointer_id, pos },
            PointerEventKind::Up => AppIntent::PointerReleased { pointer_id },
            PointerEventKind::Cancel => AppIntent::PointerCancelled { pointer_id },
        }
    }
}

/// Parst eine JSON-Liste von Zeigerereignissen.
pub fn parse_events(content: &str) -> anyhow::Result<Vec<PointerEvent>> {
    serde_json::from_str(content).context("Ungültige Ereignisliste")
}

/// Lädt eine Ereignisliste aus einer Datei.
pub fn load_events(path: &std::path::Path) -> anyhow::Result<Vec<PointerEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Ereignisdatei nicht lesbar: {}", path.display()))?;
    parse_events(&content).with_context(|| format!("In Datei {}", path.display()))
}

/// Spielt alle Ereignisse der Reihe nach über den Controller ab.
pub fn replay(
    controller: &mut AppController,
    state: &mut AppState,
    events: &[PointerEvent],
) -> anyhow::Result<()> {
    let before = state.command_log.pointer_command_count();
    for event in events {
        controller.handle_intent(state, event.to_intent())?;
    }
    let applied = state.command_log.pointer_command_count() - before;
    if applied < events.len() {
        log::info!(
            "{} von {} Zeigerereignissen verworfen (fremder Zeiger oder gesperrt)",
            events.len() - applied,
            events.len()
        );
    }
    log::debug!("{} Zeigerereignisse abgespielt", events.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_events_with_optional_coordinates() {
        let events = parse_events(
            r#"[{"kind":"down","pointer_id":2,"x":1.5,"y":2},{"kind":"cancel","pointer_id":2}]"#,
        )
        .expect("gültige Ereignisse");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, PointerEventKind::Down);
        assert_eq!(events[0].y, 2.0);
        assert!(matches!(
            events[1].to_intent(),
            AppIntent::PointerCancelled { pointer_id: 2 }
        ));
    }

    #[test]
    fn replay_skips_foreign_pointer_events() {
        let events = parse_events(
            r#"[{"kind":"down","pointer_id":1,"x":0,"y":0},
                {"kind":"move","pointer_id":2,"x":50,"y":50},
                {"kind":"up","pointer_id":1}]"#,
        )
        .expect("gültige Ereignisse");
        let mut controller = AppController::new();
        let mut state = AppState::new();
        replay(&mut controller, &mut state, &events).expect("Replay");
        assert_eq!(state.command_log.pointer_command_count(), 2);
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(parse_events(r#"[{"kind":"hover"}]"#).is_err());
    }
}

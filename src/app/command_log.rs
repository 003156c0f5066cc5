//! Verlauf der ausgeführten Commands.
//!
//! Das Replay-Werkzeug und die Controller-Tests lesen daraus ab, welche
//! Zeiger-, Export- und Logo-Commands ein Intent tatsächlich ausgelöst hat.

use super::AppCommand;

/// Obergrenze; beim Erreichen fällt die ältere Hälfte weg.
const CAPACITY: usize = 1000;

/// Ausgeführte Commands in Ausführungsreihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    /// Zähler seit Erstellung, auch für bereits verworfene Einträge
    pointer_commands: usize,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt `command` an; hält höchstens `CAPACITY` Einträge.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= CAPACITY {
            self.entries.drain(..CAPACITY / 2);
        }
        if matches!(
            command,
            AppCommand::BeginPointer { .. }
                | AppCommand::MovePointer { .. }
                | AppCommand::ReleasePointer { .. }
        ) {
            self.pointer_commands += 1;
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Anzahl aller je aufgezeichneten Zeiger-Commands (Drücken, Bewegen,
    /// Loslassen), unabhängig von der Kappung.
    ///
    /// Für Replay-Diagnose: weicht die Differenz von der Zahl abgespielter
    /// Ereignisse ab, wurden Ereignisse als fremd oder gesperrt verworfen.
    pub fn pointer_command_count(&self) -> usize {
        self.pointer_commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn record_drops_older_half_at_capacity() {
        let mut log = CommandLog::new();
        for _ in 0..CAPACITY {
            log.record(&AppCommand::ClearDrawing);
        }
        assert_eq!(log.len(), CAPACITY);

        log.record(&AppCommand::SetInteractionEnabled { enabled: false });
        assert_eq!(log.len(), CAPACITY / 2 + 1);
        assert!(matches!(
            log.entries().last(),
            Some(AppCommand::SetInteractionEnabled { enabled: false })
        ));
    }

    #[test]
    fn pointer_count_survives_capping() {
        let mut log = CommandLog::new();
        for _ in 0..CAPACITY + 10 {
            log.record(&AppCommand::ReleasePointer { pointer_id: 1 });
        }
        assert!(log.len() < CAPACITY);
        assert_eq!(log.pointer_command_count(), CAPACITY + 10);
    }

    #[test]
    fn pointer_command_count_ignores_other_commands() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::BeginPointer {
            pointer_id: 1,
            pos: DVec2::ZERO,
        });
        log.record(&AppCommand::MovePointer {
            pointer_id: 1,
            pos: DVec2::new(10.0, 0.0),
        });
        log.record(&AppCommand::ClearDrawing);
        log.record(&AppCommand::ReleasePointer { pointer_id: 1 });
        assert_eq!(log.pointer_command_count(), 3);
    }
}

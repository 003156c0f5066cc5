//! Toleranter Parser für Pfad-Strings.
//!
//! Unterstützt `M L C Z H V` absolut und relativ (`m l c z h v`).
//! Unbekannte Befehlszeichen werden samt ihrer Operanden übersprungen,
//! unvollständige Operandengruppen verworfen. Der Parser bricht nie ab.

use glam::DVec2;

use super::PathCommand;

/// Token des Pfad-Strings.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
    /// Unbekanntes Zeichen — schaltet auf "Operanden überspringen"
    Unknown,
}

const COMMAND_CHARS: &str = "MmLlCcZzHhVv";

/// Zerlegt den String in Befehle, Zahlen und unbekannte Zeichen.
fn tokenize(data: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    fn flush(current: &mut String, tokens: &mut Vec<Token>) {
        if current.is_empty() {
            return;
        }
        // Unparsebare Zahlen fallen still heraus
        if let Ok(value) = current.parse::<f64>() {
            if value.is_finite() {
                tokens.push(Token::Number(value));
            }
        }
        current.clear();
    }

    for ch in data.chars() {
        match ch {
            c if c.is_whitespace() || c == ',' => flush(&mut current, &mut tokens),
            c if COMMAND_CHARS.contains(c) => {
                flush(&mut current, &mut tokens);
                tokens.push(Token::Command(c));
            }
            '+' | '-' => {
                // Vorzeichen beginnt eine neue Zahl, außer direkt nach einem Exponenten
                if !current.is_empty() && !current.ends_with(|c: char| c == 'e' || c == 'E') {
                    flush(&mut current, &mut tokens);
                }
                current.push(ch);
            }
            '.' => {
                // "0.5.5" bedeutet 0.5 und .5, "1e5.5" bedeutet 1e5 und .5
                if current.contains(|c: char| c == '.' || c == 'e' || c == 'E') {
                    flush(&mut current, &mut tokens);
                }
                current.push(ch);
            }
            'e' | 'E' if current.chars().any(|c| c.is_ascii_digit()) => current.push(ch),
            c if c.is_ascii_digit() => current.push(c),
            _ => {
                flush(&mut current, &mut tokens);
                tokens.push(Token::Unknown);
            }
        }
    }
    flush(&mut current, &mut tokens);
    tokens
}

/// Anzahl Operanden pro Befehl.
fn arity(command: char) -> usize {
    match command.to_ascii_uppercase() {
        'M' | 'L' => 2,
        'C' => 6,
        'H' | 'V' => 1,
        _ => 0,
    }
}

/// Parser-Zustand: aktueller Punkt und Start des Teilpfads.
struct PathState {
    commands: Vec<PathCommand>,
    current: DVec2,
    subpath_start: DVec2,
}

impl PathState {
    fn emit(&mut self, command: char, operands: &[f64]) {
        let relative = command.is_ascii_lowercase();
        let origin = if relative { self.current } else { DVec2::ZERO };
        let point = |i: usize| origin + DVec2::new(operands[i], operands[i + 1]);

        let emitted = match command.to_ascii_uppercase() {
            'M' => {
                let p = point(0);
                self.subpath_start = p;
                PathCommand::MoveTo(p)
            }
            'L' => PathCommand::LineTo(point(0)),
            'C' => PathCommand::CurveTo(point(0), point(2), point(4)),
            'H' => {
                let x = if relative { self.current.x + operands[0] } else { operands[0] };
                PathCommand::LineTo(DVec2::new(x, self.current.y))
            }
            'V' => {
                let y = if relative { self.current.y + operands[0] } else { operands[0] };
                PathCommand::LineTo(DVec2::new(self.current.x, y))
            }
            _ => return,
        };
        if let Some(end) = emitted.end_point() {
            self.current = end;
        }
        self.commands.push(emitted);
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
        self.current = self.subpath_start;
    }
}

/// Parst einen Pfad-String in absolute Befehle (best effort).
pub fn parse_path_data(data: &str) -> Vec<PathCommand> {
    let mut state = PathState {
        commands: Vec::new(),
        current: DVec2::ZERO,
        subpath_start: DVec2::ZERO,
    };
    let mut active: Option<char> = None;
    let mut operands: Vec<f64> = Vec::with_capacity(6);

    for token in tokenize(data) {
        match token {
            Token::Command(c) => {
                if !operands.is_empty() {
                    log::debug!("Unvollständige Operanden für '{:?}' verworfen", active);
                    operands.clear();
                }
                if c.eq_ignore_ascii_case(&'z') {
                    state.close();
                    active = None;
                } else {
                    active = Some(c);
                }
            }
            Token::Unknown => {
                operands.clear();
                active = None;
            }
            Token::Number(value) => {
                let Some(command) = active else {
                    continue;
                };
                operands.push(value);
                if operands.len() == arity(command) {
                    state.emit(command, &operands);
                    operands.clear();
                    // Weitere Koordinatenpaare nach M sind implizite L-Befehle
                    active = match command {
                        'M' => Some('L'),
                        'm' => Some('l'),
                        other => Some(other),
                    };
                }
            }
        }
    }
    state.commands
}

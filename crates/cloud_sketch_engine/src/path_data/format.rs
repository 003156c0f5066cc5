//! Ausgabe von Pfad-Befehlen im Format des Zeichenwerkzeugs.
//!
//! Format: `M x y`, `L x y`, `C c1x c1y, c2x c2y, x y`, `Z`,
//! durch genau ein Leerzeichen getrennt. Konsumenten rendern den String
//! unverändert und parsen ihn erneut; das Format ist bitgenau festgelegt.

use std::fmt::Write;

use super::PathCommand;

/// Formatiert eine Zahl wie ECMAScript `Number#toString`.
///
/// Kürzeste verlustfreie Ziffernfolge; Exponentenform unter `1e-6` und
/// ab `1e21`. `-0` wird als `0` ausgegeben.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    ryu_js::Buffer::new().format(value).to_string()
}

/// Wandelt eine Befehlsliste in den Pfad-String um. Leere Liste → leerer String.
pub fn format_path_data(commands: &[PathCommand]) -> String {
    let mut out = String::new();
    for (i, command) in commands.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // write! auf String kann nicht fehlschlagen
        let _ = match *command {
            PathCommand::MoveTo(p) => {
                write!(out, "M {} {}", format_number(p.x), format_number(p.y))
            }
            PathCommand::LineTo(p) => {
                write!(out, "L {} {}", format_number(p.x), format_number(p.y))
            }
            PathCommand::CurveTo(c1, c2, p) => write!(
                out,
                "C {} {}, {} {}, {} {}",
                format_number(c1.x),
                format_number(c1.y),
                format_number(c2.x),
                format_number(c2.y),
                format_number(p.x),
                format_number(p.y)
            ),
            PathCommand::Close => write!(out, "Z"),
        };
    }
    out
}

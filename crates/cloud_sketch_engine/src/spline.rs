//! Catmull-Rom-Pfade durch eine geordnete Punktfolge.
//!
//! Für das Segment `p1 → p2` mit Nachbarn `p0`, `p3` gilt:
//! `cp1 = p1 + (p2 − p0) / 6`, `cp2 = p2 − (p3 − p1) / 6`.
//! Die offene Variante klemmt fehlende Nachbarn auf den Endpunkt,
//! die geschlossene Variante läuft zyklisch und endet mit `Z`.

use glam::DVec2;

use crate::path_data::{format_path_data, PathCommand};

/// Kontrollpunkte des Catmull-Rom-Segments `p1 → p2`.
fn catmull_rom_controls(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> (DVec2, DVec2) {
    let cp1 = p1 + (p2 - p0) / 6.0;
    let cp2 = p2 - (p3 - p1) / 6.0;
    (cp1, cp2)
}

/// Degenerierter Pfad: `M` zum ersten Punkt, `L` zu allen weiteren.
fn polyline_commands(points: &[DVec2]) -> Vec<PathCommand> {
    let Some((first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo(*first));
    commands.extend(rest.iter().map(|&p| PathCommand::LineTo(p)));
    commands
}

/// Befehle der offenen Variante.
pub fn open_path_commands(points: &[DVec2]) -> Vec<PathCommand> {
    if points.len() < 3 {
        return polyline_commands(points);
    }
    let last = points.len() - 1;
    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo(points[0]));
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];
        let (cp1, cp2) = catmull_rom_controls(p0, p1, p2, p3);
        commands.push(PathCommand::CurveTo(cp1, cp2, p2));
    }
    commands
}

/// Befehle der geschlossenen Variante.
pub fn closed_path_commands(points: &[DVec2]) -> Vec<PathCommand> {
    match points.len() {
        0 | 1 => open_path_commands(points),
        2 => {
            let mut commands = polyline_commands(points);
            commands.push(PathCommand::Close);
            commands
        }
        n => {
            let mut commands = Vec::with_capacity(n + 2);
            commands.push(PathCommand::MoveTo(points[0]));
            for i in 0..n {
                let p0 = points[(i + n - 1) % n];
                let p1 = points[i];
                let p2 = points[(i + 1) % n];
                let p3 = points[(i + 2) % n];
                let (cp1, cp2) = catmull_rom_controls(p0, p1, p2, p3);
                commands.push(PathCommand::CurveTo(cp1, cp2, p2));
            }
            commands.push(PathCommand::Close);
            commands
        }
    }
}

/// Offener Pfad-String durch alle Punkte. Keine Punkte → leerer String.
pub fn build_path_data(points: &[DVec2]) -> String {
    format_path_data(&open_path_commands(points))
}

/// Geschlossener Pfad-String durch alle Punkte, zurück zum Start.
///
/// Ein einzelner Punkt ergibt die offene Variante (`"M x y"`, ohne
/// abschließendes Leerzeichen), zwei Punkte eine geschlossene Linie ohne
/// Glättung.
pub fn build_closed_path_data(points: &[DVec2]) -> String {
    format_path_data(&closed_path_commands(points))
}

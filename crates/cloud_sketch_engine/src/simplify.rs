//! Douglas-Peucker-Vereinfachung einer Zeigerspur.
//!
//! Arbeitet auf Index-Bereichen eines einzigen Puffers: Statt Teil-Listen zu
//! kopieren, markiert eine Keep-Maske die behaltenen Punkte. Ein expliziter
//! Arbeits-Stack ersetzt die Rekursion (lange Striche, flache Stack-Tiefe).
//! Das Ergebnis ist identisch zur rekursiven Formulierung.

use glam::DVec2;

use crate::geometry::point_to_segment_distance;

/// Vereinfacht eine Polyline mit Toleranz `epsilon`.
///
/// - ≤ 2 Punkte → unverändert
/// - Erster und letzter Punkt bleiben immer erhalten
/// - Kein verworfener Punkt weicht um mehr als `epsilon` von der Sehne
///   zwischen seinen behaltenen Nachbarn ab
///
/// Negatives oder NaN-`epsilon` wird als 0 behandelt.
pub fn simplify_rdp(points: &[DVec2], epsilon: f64) -> Vec<DVec2> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let epsilon = if epsilon.is_nan() { 0.0 } else { epsilon.max(0.0) };

    let keep = keep_mask(points, epsilon);
    points
        .iter()
        .zip(&keep)
        .filter_map(|(p, &k)| k.then_some(*p))
        .collect()
}

/// Markiert alle Punkte, die die Vereinfachung überleben.
fn keep_mask(points: &[DVec2], epsilon: f64) -> Vec<bool> {
    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut stack = vec![(0usize, last)];
    while let Some((start, end)) = stack.pop() {
        if end - start < 2 {
            continue;
        }
        let Some((index, max_distance)) = farthest_interior(points, start, end) else {
            continue;
        };
        if max_distance > epsilon {
            keep[index] = true;
            stack.push((index, end));
            stack.push((start, index));
        }
    }
    keep
}

/// Innerer Punkt mit maximalem Abstand zur Sehne `start` → `end`.
///
/// Strikter Vergleich ab 0: bei Gleichstand gewinnt der erste Punkt,
/// bei ausschließlich Abstand 0 gibt es keinen Kandidaten.
fn farthest_interior(points: &[DVec2], start: usize, end: usize) -> Option<(usize, f64)> {
    let (a, b) = (points[start], points[end]);
    let mut best: Option<(usize, f64)> = None;
    let mut max_distance = 0.0;
    for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
        let d = point_to_segment_distance(p, a, b);
        if d > max_distance {
            max_distance = d;
            best = Some((i, d));
        }
    }
    best
}

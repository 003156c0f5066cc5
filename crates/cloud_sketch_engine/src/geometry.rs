//! Geometrie-Grundfunktionen auf `DVec2`.

use glam::DVec2;

/// Euklidischer Abstand zweier Punkte.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Abstand eines Punkts zum Liniensegment `start` → `end`.
///
/// Degeneriertes Segment (Länge 0) → Abstand zum gemeinsamen Endpunkt.
/// Sonst wird auf die Gerade projiziert und der Parameter auf [0, 1]
/// geklemmt, damit der nächste Punkt auf dem Segment liegt.
pub fn point_to_segment_distance(point: DVec2, start: DVec2, end: DVec2) -> f64 {
    let d = end - start;
    if d.x == 0.0 && d.y == 0.0 {
        return point.distance(start);
    }
    let t = (point - start).dot(d) / d.length_squared();
    let projection = start + d * t.clamp(0.0, 1.0);
    point.distance(projection)
}

/// Achsparallele Bounding-Box `(min, max)`; `None` bei leerer Eingabe.
pub fn bounds(points: &[DVec2]) -> Option<(DVec2, DVec2)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .skip(1)
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
    )
}

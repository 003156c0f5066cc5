//! Bounding-Box eines Pfads, inklusive Extrema kubischer Segmente.
//!
//! Die Befehle werden in einen `kurbo::BezPath` überführt; die Box ist die
//! Vereinigung der exakten Segment-Boxen, wie sie ein Renderer meldet.
//! Kontrollpunkte selbst liegen meist außerhalb.

use glam::DVec2;
use kurbo::{BezPath, ParamCurveExtrema, Point, Rect};

use super::PathCommand;

fn to_kurbo(p: DVec2) -> Point {
    Point::new(p.x, p.y)
}

/// Baut einen `BezPath` nach SVG-Semantik.
///
/// Zeichenbefehle ohne offenen Teilpfad (Pfadanfang oder nach `Z`)
/// beginnen einen neuen Teilpfad am aktuellen Punkt.
pub fn to_bez_path(commands: &[PathCommand]) -> BezPath {
    let mut path = BezPath::new();
    let mut current = DVec2::ZERO;
    let mut subpath_start = DVec2::ZERO;
    let mut open = false;

    for command in commands {
        match *command {
            PathCommand::MoveTo(p) => {
                path.move_to(to_kurbo(p));
                current = p;
                subpath_start = p;
                open = true;
            }
            PathCommand::LineTo(p) | PathCommand::CurveTo(_, _, p) => {
                if !open {
                    path.move_to(to_kurbo(current));
                    subpath_start = current;
                    open = true;
                }
                match *command {
                    PathCommand::CurveTo(c1, c2, _) => {
                        path.curve_to(to_kurbo(c1), to_kurbo(c2), to_kurbo(p))
                    }
                    _ => path.line_to(to_kurbo(p)),
                }
                current = p;
            }
            PathCommand::Close => {
                if open {
                    path.close_path();
                    current = subpath_start;
                    open = false;
                }
            }
        }
    }
    path
}

/// Bounding-Box `(min, max)` der gerenderten Geometrie; `None` für leere Pfade.
///
/// Einzelne `M` ohne Segment zählen als Punkt.
pub fn path_bounds(commands: &[PathCommand]) -> Option<(DVec2, DVec2)> {
    let path = to_bez_path(commands);

    let mut acc: Option<Rect> = None;
    let mut include = |rect: Rect| {
        acc = Some(match acc {
            Some(bounds) => bounds.union(rect),
            None => rect,
        });
    };

    for element in path.elements() {
        if let kurbo::PathEl::MoveTo(p) = *element {
            include(Rect::from_points(p, p));
        }
    }
    for segment in path.segments() {
        include(segment.bounding_box());
    }

    acc.map(|rect| (DVec2::new(rect.x0, rect.y0), DVec2::new(rect.x1, rect.y1)))
}

#![no_main]

use cloud_sketch_engine::{build_closed_path_data, parse_path_data, simplify_rdp};
use glam::DVec2;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let epsilon = f64::from(data[0]) / 8.0;
    let points: Vec<DVec2> = data[1..]
        .chunks_exact(2)
        .map(|pair| DVec2::new(f64::from(pair[0]), f64::from(pair[1])))
        .collect();

    let simplified = simplify_rdp(&points, epsilon);
    assert_eq!(simplified.first(), points.first());
    assert_eq!(simplified.last(), points.last());

    // Ergebnis ist eine Teilfolge der Eingabe
    let mut remaining = points.iter();
    for kept in &simplified {
        assert!(remaining.any(|p| p == kept));
    }

    let path_data = build_closed_path_data(&simplified);
    assert!(!parse_path_data(&path_data).is_empty());
});

#![no_main]

use cloud_sketch_engine::{format_path_data, parse_path_data, path_bounds, LogoPath};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let commands = parse_path_data(text);
        let _ = path_bounds(&commands);

        // Ausgabe muss sich verlustfrei wieder einlesen lassen
        let formatted = format_path_data(&commands);
        if formatted.contains("Infinity") || formatted.contains("NaN") {
            // Relative Befehle können über f64::MAX hinaus summieren
            return;
        }
        assert_eq!(parse_path_data(&formatted), commands);

        let mut logo = LogoPath::from_commands(&commands);
        logo.move_anchor(0, glam::DVec2::ONE);
        let _ = logo.to_path_data();
    }
});

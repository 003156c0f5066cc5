//! SVG-Ausgabe des Umrisses und Einlesen von Pfaden aus SVG-Dateien.

use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Erzeugt ein SVG-Dokument mit dem Umriss als ungefülltem Pfad.
///
/// Die ViewBox entspricht der Zeichenfläche `[Breite, Höhe]`.
pub fn build_selection_svg(
    path_data: &str,
    surface_size: [f64; 2],
    stroke_color: &str,
    stroke_width: f64,
) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n  \
         <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />\n\
         </svg>",
        surface_size[0],
        surface_size[1],
        escape_xml(path_data),
        escape_xml(stroke_color),
        stroke_width
    )
}

/// Liefert das `d`-Attribut des ersten `<path>`-Elements.
///
/// `Ok(None)`, wenn das Dokument keinen Pfad enthält.
pub fn read_first_path_data(xml_content: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();
    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if let Some(d) = path_attribute(&reader, e)? {
                    return Ok(Some(d));
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des SVG"),
            _ => {}
        }

        buffer.clear();
    }
    Ok(None)
}

/// `d`-Attribut, falls `e` ein `<path>` ist.
fn path_attribute(reader: &Reader<&[u8]>, e: &BytesStart) -> Result<Option<String>> {
    let name = e.local_name();
    let tag = reader.decoder().decode(name.as_ref())?;
    if tag != "path" {
        return Ok(None);
    }
    for attr in e.attributes().with_checks(false) {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?;
        if key == "d" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

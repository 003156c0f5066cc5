//! Cloud-Sketch Replay.
//!
//! Spielt aufgezeichnete Zeigerereignisse durch die komplette Pipeline
//! (Aufnahme → Vereinfachung → geschlossener Pfad) und gibt den Pfad aus.
//! Optional werden Auswahl-Datensatz und Umriss-SVG geschrieben.

use anyhow::bail;
use clap::Parser;
use cloud_sketch::export::preview_view_box;
use cloud_sketch::{replay, AppController, AppIntent, AppState, EditorOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cloud-sketch",
    about = "Freihand-Zeigerspur zu glattem, geschlossenem Vektorpfad"
)]
struct Cli {
    /// JSON-Datei mit Zeigerereignissen
    events: PathBuf,

    /// Optionen-Datei (Standard: cloud_sketch.toml neben der Binary)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Umriss als SVG schreiben
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Auswahl-Datensatz als JSON schreiben
    #[arg(long)]
    record: Option<PathBuf>,

    /// Was ist auf der Auswahl zu sehen (für den Export erforderlich)
    #[arg(long, default_value = "")]
    what: String,

    /// Name zur Auswahl (für den Export erforderlich)
    #[arg(long, default_value = "")]
    name: String,

    /// Zeitstempel des Datensatzes (Standard: Unix-Sekunden)
    #[arg(long)]
    timestamp: Option<String>,

    /// Galerie-ViewBox der Auswahl zusätzlich ausgeben
    #[arg(long)]
    preview: bool,

    /// SVG-Datei, deren erster Pfad als Logo zerlegt und ausgegeben wird
    #[arg(long)]
    logo: Option<PathBuf>,
}

fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("Replay fehlgeschlagen: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options_path = cli.options.unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&options_path);

    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);

    let events = replay::load_events(&cli.events)?;
    replay::replay(&mut controller, &mut state, &events)?;

    if let Some(path) = cli.logo {
        controller.handle_intent(&mut state, AppIntent::LogoFileSelected { path })?;
        if let Some(logo) = state.logo.as_ref() {
            println!("{}", logo.to_path_data());
        }
    }

    let Some(selection) = state.selection() else {
        log::warn!("Keine Auswahl nach {} Ereignissen", events.len());
        return Ok(());
    };
    let path_data = selection.path_data().to_string();
    println!("{}", path_data);

    if cli.preview {
        match preview_view_box(
            &path_data,
            state.options.preview_padding,
            state.options.preview_frame_size,
        ) {
            Some(view_box) => println!("{}", view_box),
            None => log::warn!("Vorschau nicht verfügbar"),
        }
    }

    if cli.svg.is_none() && cli.record.is_none() {
        return Ok(());
    }
    if cli.what.trim().is_empty() || cli.name.trim().is_empty() {
        bail!("--what und --name sind für den Export erforderlich");
    }

    let timestamp = cli.timestamp.unwrap_or_else(unix_timestamp);
    controller.handle_intent(
        &mut state,
        AppIntent::SelectionFieldsEdited {
            what: cli.what,
            name: cli.name,
        },
    )?;
    controller.handle_intent(
        &mut state,
        AppIntent::SubmitSelectionRequested {
            record_path: cli.record,
            svg_path: cli.svg,
            timestamp,
        },
    )?;
    Ok(())
}

fn unix_timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_default()
}

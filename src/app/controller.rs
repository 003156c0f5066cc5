//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichenfläche ===
            AppCommand::BeginPointer { pointer_id, pos } => {
                handlers::stroke::begin_pointer(state, pointer_id, pos)
            }
            AppCommand::MovePointer { pointer_id, pos } => {
                handlers::stroke::move_pointer(state, pointer_id, pos)
            }
            AppCommand::ReleasePointer { pointer_id } => {
                handlers::stroke::release_pointer(state, pointer_id)
            }
            AppCommand::ClearDrawing => handlers::stroke::clear(state),
            AppCommand::SetInteractionEnabled { enabled } => {
                handlers::stroke::set_interaction_enabled(state, enabled)
            }

            // === Anker ===
            AppCommand::MoveAnchor { shape, index, pos } => {
                handlers::anchor::move_anchor(state, shape, index, pos)
            }

            // === Auswahl & Export ===
            AppCommand::SetSelectionFields { what, name } => {
                handlers::selection::set_fields(state, &what, &name)
            }
            AppCommand::ExportSelection {
                record_path,
                svg_path,
                timestamp,
            } => handlers::selection::export(state, record_path, svg_path, &timestamp)?,

            // === Logo ===
            AppCommand::LoadLogoPath { path_data } => {
                handlers::logo::load_path_data(state, &path_data)
            }
            AppCommand::LoadLogoFile { path } => handlers::logo::load_file(state, &path)?,
            AppCommand::MoveLogoAnchor { index, delta } => {
                handlers::logo::move_anchor(state, index, delta)
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, *options),
            AppCommand::SaveOptions { path } => handlers::options::save(state, &path)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}

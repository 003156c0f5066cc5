//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use cloud_sketch_engine::PointerBinding;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Zeigerereignisse, die die Zeichenfläche ohnehin ignorieren würde
/// (gesperrt, fremder Zeiger), erzeugen keine Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let bound_pointer = state.surface.binding().pointer_id();

    match intent {
        AppIntent::PointerPressed { pointer_id, pos } => {
            if state.surface.interaction_enabled()
                && state.surface.binding() == PointerBinding::Idle
            {
                vec![AppCommand::BeginPointer { pointer_id, pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerMoved { pointer_id, pos } => {
            if bound_pointer == Some(pointer_id) {
                vec![AppCommand::MovePointer { pointer_id, pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased { pointer_id } | AppIntent::PointerCancelled { pointer_id } => {
            if bound_pointer == Some(pointer_id) {
                vec![AppCommand::ReleasePointer { pointer_id }]
            } else {
                vec![]
            }
        }
        AppIntent::ClearRequested => vec![AppCommand::ClearDrawing],
        AppIntent::SketchViewToggled { active } => {
            if active {
                vec![AppCommand::SetInteractionEnabled { enabled: true }]
            } else {
                vec![
                    AppCommand::SetInteractionEnabled { enabled: false },
                    AppCommand::ClearDrawing,
                ]
            }
        }
        AppIntent::AnchorMoveRequested { shape, index, pos } => {
            vec![AppCommand::MoveAnchor { shape, index, pos }]
        }
        AppIntent::SelectionFieldsEdited { what, name } => {
            vec![AppCommand::SetSelectionFields { what, name }]
        }
        AppIntent::SubmitSelectionRequested {
            record_path,
            svg_path,
            timestamp,
        } => {
            if !state.can_submit() {
                log::info!("Absenden ignoriert: keine Auswahl oder Felder unvollständig");
                return vec![];
            }
            vec![
                AppCommand::ExportSelection {
                    record_path,
                    svg_path,
                    timestamp,
                },
                AppCommand::ClearDrawing,
            ]
        }
        AppIntent::LogoPathLoaded { path_data } => vec![AppCommand::LoadLogoPath { path_data }],
        AppIntent::LogoFileSelected { path } => vec![AppCommand::LoadLogoFile { path }],
        AppIntent::LogoAnchorNudged { index, delta } => {
            vec![AppCommand::MoveLogoAnchor { index, delta }]
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested { path } => vec![AppCommand::SaveOptions { path }],
    }
}

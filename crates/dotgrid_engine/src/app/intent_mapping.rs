//! Mapping von Host-Intents auf mutierende Gate-Commands.

use super::{GateCommand, GateIntent, SessionState};
use crate::app::state::PointerButton;

/// Übersetzt einen `GateIntent` in eine Sequenz ausführbarer `GateCommand`s.
pub fn map_intent_to_commands(state: &SessionState, intent: GateIntent) -> Vec<GateCommand> {
    match intent {
        GateIntent::PointerPressed { button } => match button {
            PointerButton::Other => vec![],
            button => vec![GateCommand::SetButtonHeld { button, held: true }],
        },
        GateIntent::PointerReleased { button } => match button {
            PointerButton::Other => vec![],
            button => vec![GateCommand::SetButtonHeld {
                button,
                held: false,
            }],
        },
        GateIntent::PointerLeft => vec![GateCommand::ReleaseAllButtons],
        GateIntent::PointerEntered { buttons } => vec![GateCommand::RestoreButtons { buttons }],
        // Undefinierte Projektion: ganzer Frame entfällt, nichts wird mutiert
        GateIntent::FrameTick { cursor_world: None } => vec![],
        GateIntent::FrameTick {
            cursor_world: Some(cursor),
        } => {
            // Reihenfolge ist Vertrag: malen, Anker, radieren, hovern
            let mut commands = Vec::with_capacity(4);
            if state.pointer.primary_held {
                commands.push(GateCommand::PaintStroke { cursor });
            }
            commands.push(GateCommand::UpdateStrokeAnchor { cursor });
            if state.pointer.secondary_held {
                commands.push(GateCommand::EraseAround { cursor });
            }
            commands.push(GateCommand::UpdateHover { cursor });
            commands
        }
        GateIntent::SubmitRequested => vec![GateCommand::BeginVerification],
        GateIntent::VerificationFinished { token, outcome } => {
            vec![GateCommand::ApplyVerification { token, outcome }]
        }
        GateIntent::ResetRequested => vec![
            GateCommand::ResetInteraction,
            GateCommand::ClearSelection,
        ],
        GateIntent::TeardownRequested => vec![
            GateCommand::InvalidateSubmissions,
            GateCommand::ResetInteraction,
            GateCommand::ClearSelection,
        ],
    }
}

#[cfg(test)]
mod tests;

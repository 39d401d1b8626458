//! Gate Controller für zentrale Event-Verarbeitung.

use glam::Vec2;

use super::{GateCommand, GateIntent, SessionState};
use crate::shared::{DotScene, VisualChange};

/// Orchestriert Host-Events und Use-Cases auf den SessionState.
///
/// Der Host ruft [`GateController::tick`] einmal pro Display-Refresh auf;
/// Abstände zwischen den Aufrufen dürfen beliebig schwanken, da die
/// Interpolation über Distanz und nicht über Zeit läuft.
#[derive(Default)]
pub struct GateController;

impl GateController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut SessionState, intent: GateIntent) {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command);
        }
    }

    fn map_intent_to_commands(&self, state: &SessionState, intent: GateIntent) -> Vec<GateCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem SessionState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(&mut self, state: &mut SessionState, command: GateCommand) {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeiger ===
            GateCommand::SetButtonHeld { button, held } => {
                handlers::pointer::set_button(state, button, held)
            }
            GateCommand::ReleaseAllButtons => handlers::pointer::release_all(state),
            GateCommand::RestoreButtons { buttons } => handlers::pointer::restore(state, buttons),

            // === Frame ===
            GateCommand::PaintStroke { cursor } => handlers::stroke::paint(state, cursor),
            GateCommand::UpdateStrokeAnchor { cursor } => {
                handlers::stroke::update_anchor(state, cursor)
            }
            GateCommand::EraseAround { cursor } => handlers::stroke::erase(state, cursor),
            GateCommand::UpdateHover { cursor } => handlers::stroke::hover(state, cursor),

            // === Auswahl ===
            GateCommand::ClearSelection => handlers::selection::clear(state),
            GateCommand::ResetInteraction => handlers::selection::reset_interaction(state),

            // === Verifikation ===
            GateCommand::BeginVerification => handlers::verification::begin(state),
            GateCommand::ApplyVerification { token, outcome } => {
                handlers::verification::apply(state, token, outcome)
            }
            GateCommand::InvalidateSubmissions => handlers::verification::invalidate(state),
        }
    }

    /// Ein Render-Tick: verarbeitet den Cursor und liefert die Darstellungsänderungen.
    ///
    /// `cursor_world` ist `None`, wenn die Projektion auf die Bodenebene
    /// undefiniert ist; dann bleibt der Zustand unverändert.
    pub fn tick(
        &mut self,
        state: &mut SessionState,
        cursor_world: Option<Vec2>,
    ) -> Vec<VisualChange> {
        self.handle_intent(state, GateIntent::FrameTick { cursor_world });
        state.take_visual_changes()
    }

    /// Baut die Render-Entscheidungen für den aktuellen Frame.
    pub fn build_dot_scene(&self, state: &SessionState) -> DotScene {
        super::dot_scene::build(state)
    }
}

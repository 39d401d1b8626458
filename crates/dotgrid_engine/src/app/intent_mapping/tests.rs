use super::map_intent_to_commands;
use crate::app::state::{ButtonMask, PointerButton};
use crate::app::{GateCommand, GateIntent, SessionState};
use crate::shared::GateOptions;
use glam::Vec2;

fn session() -> SessionState {
    SessionState::new(GateOptions::default()).expect("Standard-Optionen sind gültig")
}

fn names(commands: &[GateCommand]) -> Vec<&'static str> {
    commands
        .iter()
        .map(|c| match c {
            GateCommand::PaintStroke { .. } => "paint",
            GateCommand::UpdateStrokeAnchor { .. } => "anchor",
            GateCommand::EraseAround { .. } => "erase",
            GateCommand::UpdateHover { .. } => "hover",
            _ => "other",
        })
        .collect()
}

#[test]
fn frame_tick_without_projection_maps_to_nothing() {
    let state = session();
    let commands = map_intent_to_commands(&state, GateIntent::FrameTick { cursor_world: None });
    assert!(commands.is_empty());
}

#[test]
fn idle_frame_tick_only_anchors_and_hovers() {
    let state = session();
    let commands = map_intent_to_commands(
        &state,
        GateIntent::FrameTick {
            cursor_world: Some(Vec2::ZERO),
        },
    );
    assert_eq!(names(&commands), vec!["anchor", "hover"]);
}

#[test]
fn both_buttons_held_keeps_paint_before_erase() {
    let mut state = session();
    state.pointer.primary_held = true;
    state.pointer.secondary_held = true;

    let commands = map_intent_to_commands(
        &state,
        GateIntent::FrameTick {
            cursor_world: Some(Vec2::ZERO),
        },
    );
    assert_eq!(names(&commands), vec!["paint", "anchor", "erase", "hover"]);
}

#[test]
fn other_button_is_ignored() {
    let state = session();
    assert!(
        map_intent_to_commands(
            &state,
            GateIntent::PointerPressed {
                button: PointerButton::Other
            }
        )
        .is_empty()
    );
}

#[test]
fn pointer_entered_restores_buttons() {
    let state = session();
    let commands = map_intent_to_commands(
        &state,
        GateIntent::PointerEntered {
            buttons: ButtonMask(ButtonMask::PRIMARY),
        },
    );
    assert!(matches!(
        commands.as_slice(),
        [GateCommand::RestoreButtons { buttons }] if buttons.primary()
    ));
}

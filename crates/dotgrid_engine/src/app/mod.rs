//! Application-Layer: Controller, Session-State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod dot_scene;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Session State und Interaktionszustand
///
/// Dieses Modul verwaltet den Zustand eines Widget-Exemplars (Raster, Auswahl, Zeiger).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::GateController;
pub use events::{GateCommand, GateIntent};
pub use state::{
    ButtonMask, HoverState, PendingSubmission, PointerButton, PointerFlags, SelectionState,
    SessionState, SubmissionToken, VerificationState,
};

//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und Render-Entscheidungen, die zwischen `app` und dem
//! Host (Renderer, Server) geteilt werden.

mod dot_scene;
pub mod options;

pub use dot_scene::{DotScene, VisualChange};
pub use options::{GateOptions, OptionsError};

//! Engine des Punktraster-Widgets.
//!
//! Raster, Spatial-Index, Mal-/Radier-Interaktion und Muster-Hash als
//! synchrone, I/O-freie Library. Netzwerk und Rendering liegen beim Host.

pub mod app;
pub mod core;
pub mod shared;

pub use crate::app::{
    ButtonMask, GateCommand, GateController, GateIntent, PendingSubmission, PointerButton,
    SessionState, SubmissionToken,
};
pub use crate::core::{
    GateFailure, GridError, GroundCamera, Lattice, LatticePoint, PatternHash, SecretConfig,
    SpatialIndex, SpatialMatch, VerifyOutcome, VerifyRequest, VerifyResponse,
};
pub use crate::shared::{DotScene, GateOptions, VisualChange};

//! Punktraster-Zugangssperre.
//! Engine-Re-Exports plus HTTP-Server und -Client, als Library exportiert für Tests
//! und Wiederverwendung.

pub mod client;
pub mod server;

pub use client::{ClientError, HttpVerifier};
pub use dotgrid_engine::{
    ButtonMask, DotScene, GateCommand, GateController, GateFailure, GateIntent, GateOptions,
    GroundCamera, Lattice, PatternHash, PendingSubmission, PointerButton, SecretConfig,
    SessionState, SpatialIndex, SubmissionToken, VerifyOutcome, VerifyResponse, VisualChange,
};
pub use server::{router, ServerConfig};

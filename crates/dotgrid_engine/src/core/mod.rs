//! Core-Domänentypen: Punktraster, Spatial-Index, Muster-Hash, Kamera, Zugangsprüfung.

pub mod camera;
pub mod error;
pub mod gate;
pub mod lattice;
pub mod pattern_hash;
pub mod spatial;

pub use camera::{GroundCamera, Ray};
pub use error::GridError;
pub use gate::{
    ERROR_INVALID_CONFIGURATION, ERROR_NOT_CONFIGURED, ERROR_VERIFY_FAILED, GateFailure,
    SecretConfig, VerifyOutcome, VerifyRequest, VerifyResponse,
};
pub use lattice::{Lattice, LatticePoint};
pub use pattern_hash::PatternHash;
pub use spatial::{CellKey, SpatialIndex, SpatialMatch, SpatialStats};

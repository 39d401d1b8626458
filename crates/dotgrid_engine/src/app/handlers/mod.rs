//! Feature-Handler für GateCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod pointer;
pub mod selection;
pub mod stroke;
pub mod verification;

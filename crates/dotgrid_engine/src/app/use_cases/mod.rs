//! Use-Case-Funktionen der Frame-Verarbeitung.
//!
//! - `stroke`: Malen entlang der Zeigerbewegung, Radieren im Umkreis
//! - `hover`: Hover-Hervorhebung

pub mod hover;
pub mod stroke;

//! Fehlertypen der Core-Schicht.

use thiserror::Error;

/// Fehler beim Aufbau von Gitter und Spatial-Index.
///
/// Tritt nur bei der Konstruktion auf und ist nicht behebbar: ein Index mit
/// ungültiger Zellgröße wird gar nicht erst erzeugt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Zellgröße oder Gitterabstand ist nicht positiv bzw. nicht endlich
    #[error("ungültige Konfiguration: {what} muss endlich und > 0 sein (ist {value})")]
    InvalidConfig {
        /// Name des fehlerhaften Parameters
        what: &'static str,
        /// Übergebener Wert
        value: f32,
    },
    /// Punktindex kommt in der Eingabe mehrfach vor
    #[error("Punktindex {index} ist mehrfach vorhanden")]
    DuplicateIndex {
        /// Doppelter Index
        index: u32,
    },
    /// Mehr Punkte als über `u32`-Indizes adressierbar
    #[error("Gitter mit {count} Punkten überschreitet den u32-Indexbereich")]
    TooManyPoints {
        /// Angeforderte Punktanzahl
        count: u64,
    },
}

impl GridError {
    /// Prüft, dass ein Längenparameter endlich und strikt positiv ist.
    pub(crate) fn check_positive(what: &'static str, value: f32) -> Result<(), GridError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(GridError::InvalidConfig { what, value })
        }
    }
}

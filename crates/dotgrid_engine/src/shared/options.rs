//! Zentrale Konfiguration des Punktraster-Widgets.
//!
//! `GateOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Raster ──────────────────────────────────────────────────────────

/// Halbe Rasterbreite in Punkten (Spalten −30..=30).
pub const LATTICE_HALF_WIDTH: u32 = 30;
/// Halbe Rasterhöhe in Punkten (Zeilen −15..=15).
pub const LATTICE_HALF_HEIGHT: u32 = 15;
/// Punktabstand in Welteinheiten; zugleich Zellgröße des Spatial-Index.
pub const LATTICE_SPACING: f32 = 1.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Distanz, innerhalb der ein Punkt gemalt wird (Primärtaste).
pub const PAINT_THRESHOLD: f32 = 0.5;
/// Radius, in dem gemalte Punkte radiert werden (Sekundärtaste).
pub const ERASE_THRESHOLD: f32 = 2.0;
/// Distanz für Hover-Hervorhebung.
pub const HOVER_THRESHOLD: f32 = 0.5;
/// Maximale Schrittweite beim Interpolieren schneller Zeigerbewegungen.
pub const SWEEP_STEP: f32 = 0.25;

// ── Darstellung ─────────────────────────────────────────────────────

/// Skalierung eines normalen Punktes.
pub const DOT_BASE_SCALE: f32 = 1.0;
/// Skalierung eines gemalten oder gehoverten Punktes.
pub const DOT_HIGHLIGHT_SCALE: f32 = 3.0;

/// Ungültige Optionswerte.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    /// Wert muss endlich und > 0 sein
    #[error("{name} muss endlich und > 0 sein (ist {value})")]
    NotPositive {
        /// Name der Option
        name: &'static str,
        /// Konfigurierter Wert
        value: f32,
    },
    /// Radier-Radius muss echt größer als Mal-Distanz sein
    #[error("erase_threshold ({erase}) muss größer als paint_threshold ({paint}) sein")]
    EraseNotLargerThanPaint {
        /// Mal-Distanz
        paint: f32,
        /// Radier-Radius
        erase: f32,
    },
    /// Interpolationsschritt muss kleiner als der Punktabstand sein
    #[error("sweep_step ({step}) muss kleiner als lattice_spacing ({spacing}) sein")]
    SweepStepTooCoarse {
        /// Schrittweite
        step: f32,
        /// Punktabstand
        spacing: f32,
    },
}

/// Alle zur Laufzeit änderbaren Widget-Optionen.
/// Wird als `dotgrid_gate.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GateOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Halbe Rasterbreite in Punkten
    pub lattice_half_width: u32,
    /// Halbe Rasterhöhe in Punkten
    pub lattice_half_height: u32,
    /// Punktabstand (= Zellgröße des Index)
    pub lattice_spacing: f32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Mal-Distanz
    pub paint_threshold: f32,
    /// Radier-Radius
    pub erase_threshold: f32,
    /// Hover-Distanz
    pub hover_threshold: f32,
    /// Interpolationsschritt für schnelle Striche
    pub sweep_step: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Skalierung normaler Punkte
    pub dot_base_scale: f32,
    /// Skalierung hervorgehobener Punkte
    pub dot_highlight_scale: f32,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            lattice_half_width: LATTICE_HALF_WIDTH,
            lattice_half_height: LATTICE_HALF_HEIGHT,
            lattice_spacing: LATTICE_SPACING,
            paint_threshold: PAINT_THRESHOLD,
            erase_threshold: ERASE_THRESHOLD,
            hover_threshold: HOVER_THRESHOLD,
            sweep_step: SWEEP_STEP,
            dot_base_scale: DOT_BASE_SCALE,
            dot_highlight_scale: DOT_HIGHLIGHT_SCALE,
        }
    }
}

impl GateOptions {
    /// Prüft die Konsistenz der Werte.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for (name, value) in [
            ("lattice_spacing", self.lattice_spacing),
            ("paint_threshold", self.paint_threshold),
            ("erase_threshold", self.erase_threshold),
            ("hover_threshold", self.hover_threshold),
            ("sweep_step", self.sweep_step),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(OptionsError::NotPositive { name, value });
            }
        }

        if self.erase_threshold <= self.paint_threshold {
            return Err(OptionsError::EraseNotLargerThanPaint {
                paint: self.paint_threshold,
                erase: self.erase_threshold,
            });
        }

        if self.sweep_step >= self.lattice_spacing {
            return Err(OptionsError::SweepStepTooCoarse {
                step: self.sweep_step,
                spacing: self.lattice_spacing,
            });
        }

        Ok(())
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler → Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<GateOptions>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad zur Konfigurationsdatei (neben der Binary).
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.to_path_buf()))
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("dotgrid_gate.toml")
    }
}

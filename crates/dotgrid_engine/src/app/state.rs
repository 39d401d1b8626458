//! Session State: zentrale Datenhaltung eines Widget-Exemplars.

mod pointer;
mod selection;
mod verification;

pub use pointer::{ButtonMask, PointerButton, PointerFlags};
pub use selection::SelectionState;
pub use verification::{PendingSubmission, SubmissionToken, VerificationState};

use std::sync::Arc;

use anyhow::Context;
use glam::Vec2;

use super::CommandLog;
use crate::core::{Lattice, SpatialIndex};
use crate::shared::{GateOptions, VisualChange};

/// Aktuell gehoverter Punkt; flüchtig, wird jeden Frame neu berechnet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    /// Gehoverter Punkt oder `None`
    pub index: Option<u32>,
}

/// Hauptzustand einer Widget-Sitzung.
///
/// Raster und Index sind nach dem Aufbau unveränderlich; nur Auswahl, Hover,
/// Zeigerzustand und Verifikation ändern sich.
pub struct SessionState {
    /// Laufzeit-Optionen (Schwellwerte, Raster, Darstellung)
    pub options: GateOptions,
    /// Unveränderliches Punktraster
    pub lattice: Arc<Lattice>,
    /// Unveränderlicher Spatial-Index über dem Raster
    pub spatial_index: Arc<SpatialIndex>,
    /// Gemalte Punkte
    pub selection: SelectionState,
    /// Hover-Zustand
    pub hover: HoverState,
    /// Gehaltene Tasten
    pub pointer: PointerFlags,
    /// Cursor-Position des Vorframes (nur solange eine Taste gehalten ist)
    pub previous_cursor: Option<Vec2>,
    /// Asynchrone Verifikation
    pub verification: VerificationState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    visual_changes: Vec<VisualChange>,
}

impl SessionState {
    /// Baut Raster und Index gemäß den Optionen auf.
    pub fn new(options: GateOptions) -> anyhow::Result<Self> {
        options.validate().context("Widget-Optionen ungültig")?;

        let lattice = Lattice::generate(
            options.lattice_half_width,
            options.lattice_half_height,
            options.lattice_spacing,
        )
        .context("Punktraster konnte nicht erzeugt werden")?;
        let spatial_index = SpatialIndex::build(lattice.points(), options.lattice_spacing)
            .context("Spatial-Index konnte nicht aufgebaut werden")?;

        let stats = spatial_index.stats();
        log::info!(
            "Sitzung aufgebaut: {} Punkte in {} Zellen (max {} pro Zelle)",
            stats.total_points,
            stats.total_cells,
            stats.max_points_in_cell
        );

        Ok(Self {
            options,
            lattice: Arc::new(lattice),
            spatial_index: Arc::new(spatial_index),
            selection: SelectionState::new(),
            hover: HoverState::default(),
            pointer: PointerFlags::default(),
            previous_cursor: None,
            verification: VerificationState::new(),
            command_log: CommandLog::new(),
            visual_changes: Vec::new(),
        })
    }

    /// Merkt eine Darstellungsänderung für den Host vor.
    pub(crate) fn push_visual(&mut self, change: VisualChange) {
        self.visual_changes.push(change);
    }

    /// Entnimmt alle seit dem letzten Aufruf gesammelten Darstellungsänderungen.
    pub fn take_visual_changes(&mut self) -> Vec<VisualChange> {
        std::mem::take(&mut self.visual_changes)
    }

    /// Entnimmt alle vom Host zu versendenden Übermittlungen.
    pub fn take_pending_submissions(&mut self) -> Vec<PendingSubmission> {
        self.verification.take_outbox()
    }

    /// Läuft gerade eine Verifikation?
    pub fn is_verifying(&self) -> bool {
        self.verification.is_verifying
    }
}

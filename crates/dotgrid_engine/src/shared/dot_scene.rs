//! Render-Entscheidungen als expliziter Übergabevertrag zwischen App und Host.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie konsumiert.
//! Es werden keine Pixel erzeugt, nur Daten darüber, was wie groß zu zeichnen ist.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::core::Lattice;

/// Einzelne Änderung der Punkt-Darstellung, vom Controller pro Frame gesammelt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualChange {
    /// Punkt wurde gemalt
    Painted(u32),
    /// Punkt wurde radiert
    Erased(u32),
    /// Zeiger schwebt über dem Punkt
    Hovered(u32),
    /// Hover verlassen; nur gemeldet, wenn der Punkt nicht gemalt ist
    Unhovered(u32),
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct DotScene {
    /// Punktraster (Arc für O(1)-Clone pro Frame)
    pub lattice: Arc<Lattice>,
    /// Aktuell gemalte Punkte
    pub painted: Arc<IndexSet<u32>>,
    /// Aktuell gehoverter Punkt
    pub hovered: Option<u32>,
    /// Skalierung normaler Punkte
    pub base_scale: f32,
    /// Skalierung gemalter oder gehoverter Punkte
    pub highlight_scale: f32,
}

impl DotScene {
    /// Skalierung, mit der ein Punkt zu zeichnen ist.
    pub fn scale_of(&self, index: u32) -> f32 {
        if self.painted.contains(&index) || self.hovered == Some(index) {
            self.highlight_scale
        } else {
            self.base_scale
        }
    }

    /// Alle Punkte als (Index, x, z, Skalierung) in Indexreihenfolge.
    pub fn instances(&self) -> impl Iterator<Item = (u32, f32, f32, f32)> + '_ {
        self.lattice
            .points()
            .iter()
            .map(|p| (p.index, p.position.x, p.position.y, self.scale_of(p.index)))
    }
}

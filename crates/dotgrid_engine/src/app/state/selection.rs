use std::sync::Arc;

use indexmap::IndexSet;

use crate::core::PatternHash;

/// Menge der gemalten Punkte.
///
/// Die Einfügereihenfolge ist nur für deterministische Ausgabe relevant;
/// semantisch ist die Auswahl eine Menge.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Gemalte Punktindizes (Arc für O(1)-Clone in DotScene)
    pub painted: Arc<IndexSet<u32>>,
}

impl SelectionState {
    /// Erstellt eine leere Auswahl.
    pub fn new() -> Self {
        Self {
            painted: Arc::new(IndexSet::new()),
        }
    }

    /// Gibt eine mutable Referenz auf das Set zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen der Auswahl gehen über diese Methode, damit der
    /// Arc-Klon in `dot_scene::build()` O(1) bleibt.
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<u32> {
        Arc::make_mut(&mut self.painted)
    }

    /// Ist der Punkt gemalt?
    pub fn contains(&self, index: u32) -> bool {
        self.painted.contains(&index)
    }

    /// Anzahl gemalter Punkte.
    pub fn len(&self) -> usize {
        self.painted.len()
    }

    /// Gibt `true` zurück, wenn nichts gemalt ist.
    pub fn is_empty(&self) -> bool {
        self.painted.is_empty()
    }

    /// Muster-Hash des aktuellen Snapshots.
    pub fn pattern_hash(&self) -> PatternHash {
        PatternHash::from_indices(self.painted.iter().copied())
    }
}

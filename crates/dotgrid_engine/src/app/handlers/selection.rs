//! Handler für Auswahl-Reset.

use crate::app::SessionState;
use crate::shared::VisualChange;

/// Leert die Auswahl und meldet jeden entfernten Punkt als radiert.
pub fn clear(state: &mut SessionState) {
    if state.selection.is_empty() {
        return;
    }
    let removed: Vec<u32> = state.selection.painted.iter().copied().collect();
    state.selection.ids_mut().clear();
    for index in &removed {
        state.push_visual(VisualChange::Erased(*index));
    }
    log::debug!("Auswahl zurückgesetzt ({} Punkte)", removed.len());
}

/// Setzt Tasten, Strichanker und Hover zurück.
pub fn reset_interaction(state: &mut SessionState) {
    state.pointer.primary_held = false;
    state.pointer.secondary_held = false;
    state.previous_cursor = None;
    if let Some(old) = state.hover.index.take()
        && !state.selection.contains(old)
    {
        state.push_visual(VisualChange::Unhovered(old));
    }
}

//! Use-Case: Hover-Hervorhebung.

use glam::Vec2;

use crate::app::SessionState;
use crate::shared::VisualChange;

/// Bestimmt den gehoverten Punkt neu und meldet Wechsel.
///
/// Der alte Punkt bekommt `Unhovered` nur, wenn er nicht gemalt ist; gemalte
/// Punkte behalten ihre Hervorhebung. Der neue Punkt bekommt `Hovered` immer.
pub fn update_hover(state: &mut SessionState, cursor: Vec2) {
    let new_hover = state
        .spatial_index
        .nearest(cursor, state.options.hover_threshold)
        .map(|hit| hit.index);

    if new_hover == state.hover.index {
        return;
    }

    if let Some(old) = state.hover.index
        && !state.selection.contains(old)
    {
        state.push_visual(VisualChange::Unhovered(old));
    }
    if let Some(new) = new_hover {
        state.push_visual(VisualChange::Hovered(new));
    }
    state.hover.index = new_hover;
}

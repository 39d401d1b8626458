//! Builder für Punkt-Szenen aus dem SessionState.

use crate::app::SessionState;
use crate::shared::DotScene;

/// Baut eine DotScene aus dem aktuellen SessionState.
pub fn build(state: &SessionState) -> DotScene {
    DotScene {
        lattice: state.lattice.clone(),
        painted: state.selection.painted.clone(),
        hovered: state.hover.index,
        base_scale: state.options.dot_base_scale,
        highlight_scale: state.options.dot_highlight_scale,
    }
}

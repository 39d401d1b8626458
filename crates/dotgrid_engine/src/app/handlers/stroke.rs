//! Handler für die Frame-Schritte Malen, Anker, Radieren und Hover.

use glam::Vec2;

use crate::app::SessionState;
use crate::app::use_cases;

/// Malt entlang des Strichs seit dem Vorframe.
pub fn paint(state: &mut SessionState, cursor: Vec2) {
    use_cases::stroke::paint_stroke(state, cursor);
}

/// Führt den Strichanker nach.
pub fn update_anchor(state: &mut SessionState, cursor: Vec2) {
    use_cases::stroke::update_stroke_anchor(state, cursor);
}

/// Radiert gemalte Punkte um den Cursor.
pub fn erase(state: &mut SessionState, cursor: Vec2) {
    use_cases::stroke::erase_around(state, cursor);
}

/// Berechnet den Hover-Zustand neu.
pub fn hover(state: &mut SessionState, cursor: Vec2) {
    use_cases::hover::update_hover(state, cursor);
}

//! Handler für Tastenzustand und Zeiger-Ein/Austritt.

use crate::app::SessionState;
use crate::app::state::{ButtonMask, PointerButton};

/// Setzt den Zustand einer einzelnen Taste.
pub fn set_button(state: &mut SessionState, button: PointerButton, held: bool) {
    state.pointer.set(button, held);
}

/// Zeiger hat die Fläche verlassen: beide Tasten gelten als losgelassen.
pub fn release_all(state: &mut SessionState) {
    state.pointer.primary_held = false;
    state.pointer.secondary_held = false;
}

/// Zeiger ist zurück: noch gedrückte Tasten wiederherstellen.
pub fn restore(state: &mut SessionState, buttons: ButtonMask) {
    state.pointer.restore_from(buttons);
    if state.pointer.any_held() {
        log::debug!("Tastenzustand nach Wiedereintritt hergestellt: {:?}", state.pointer);
    }
}

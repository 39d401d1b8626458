use glam::Vec2;

use crate::app::state::{ButtonMask, PointerButton, SubmissionToken};
use crate::core::VerifyOutcome;

/// Gate-Intent-Events.
/// Intents sind Eingaben aus Host/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum GateIntent {
    /// Taste über der Zeichenfläche gedrückt
    PointerPressed { button: PointerButton },
    /// Taste losgelassen
    PointerReleased { button: PointerButton },
    /// Zeiger hat die Zeichenfläche verlassen
    PointerLeft,
    /// Zeiger ist zurück; `buttons` meldet die physisch noch gedrückten Tasten
    PointerEntered { buttons: ButtonMask },
    /// Ein Render-Tick; `None`, wenn die Projektion auf die Bodenebene undefiniert ist
    FrameTick { cursor_world: Option<Vec2> },
    /// Aktuelles Muster zur Prüfung absenden
    SubmitRequested,
    /// Antwort einer Übermittlung ist eingetroffen
    VerificationFinished {
        token: SubmissionToken,
        outcome: VerifyOutcome,
    },
    /// Auswahl zurücksetzen (z.B. Navigation weg vom Widget)
    ResetRequested,
    /// Widget wird abgebaut; späte Antworten ignorieren
    TeardownRequested,
}

use glam::Vec2;

use crate::app::state::{ButtonMask, PointerButton, SubmissionToken};
use crate::core::VerifyOutcome;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum GateCommand {
    /// Zustand einer Taste setzen
    SetButtonHeld { button: PointerButton, held: bool },
    /// Beide Tasten freigeben
    ReleaseAllButtons,
    /// Noch gedrückte Tasten wiederherstellen
    RestoreButtons { buttons: ButtonMask },
    /// Strich vom Vorframe-Cursor bis `cursor` malen
    PaintStroke { cursor: Vec2 },
    /// Vorframe-Cursor nachführen oder verwerfen
    UpdateStrokeAnchor { cursor: Vec2 },
    /// Gemalte Punkte um `cursor` radieren
    EraseAround { cursor: Vec2 },
    /// Hover-Zustand neu berechnen
    UpdateHover { cursor: Vec2 },
    /// Auswahl leeren
    ClearSelection,
    /// Hover, Tasten und Strichanker zurücksetzen
    ResetInteraction,
    /// Muster hashen und Übermittlung anlegen
    BeginVerification,
    /// Antwort einer Übermittlung übernehmen
    ApplyVerification {
        token: SubmissionToken,
        outcome: VerifyOutcome,
    },
    /// Alle offenen Übermittlungen verwerfen
    InvalidateSubmissions,
}

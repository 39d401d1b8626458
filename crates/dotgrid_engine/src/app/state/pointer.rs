use serde::{Deserialize, Serialize};

/// Zeigertaste, wie sie der Host meldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    /// Primärtaste (links): malen
    Primary,
    /// Sekundärtaste (rechts): radieren
    Secondary,
    /// Jede andere Taste (ignoriert)
    Other,
}

/// Bitmaske gedrückter Tasten (Browser-Konvention: 1 = primär, 2 = sekundär).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonMask(pub u16);

impl ButtonMask {
    /// Bit der Primärtaste
    pub const PRIMARY: u16 = 1;
    /// Bit der Sekundärtaste
    pub const SECONDARY: u16 = 2;

    /// Ist die Primärtaste gedrückt?
    pub fn primary(self) -> bool {
        self.0 & Self::PRIMARY != 0
    }

    /// Ist die Sekundärtaste gedrückt?
    pub fn secondary(self) -> bool {
        self.0 & Self::SECONDARY != 0
    }
}

/// Zwei unabhängige Tastenzustände; Malen und Radieren können gleichzeitig aktiv sein.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerFlags {
    /// Primärtaste gehalten (malen)
    pub primary_held: bool,
    /// Sekundärtaste gehalten (radieren)
    pub secondary_held: bool,
}

impl PointerFlags {
    /// Setzt den Zustand einer Taste; `Other` wird ignoriert.
    pub fn set(&mut self, button: PointerButton, held: bool) {
        match button {
            PointerButton::Primary => self.primary_held = held,
            PointerButton::Secondary => self.secondary_held = held,
            PointerButton::Other => {}
        }
    }

    /// Stellt Tasten wieder her, die laut Maske noch physisch gedrückt sind.
    ///
    /// Setzt nur auf `true`; nicht gedrückte Tasten bleiben unverändert.
    pub fn restore_from(&mut self, buttons: ButtonMask) {
        if buttons.primary() {
            self.primary_held = true;
        }
        if buttons.secondary() {
            self.secondary_held = true;
        }
    }

    /// Irgendeine relevante Taste gehalten?
    pub fn any_held(self) -> bool {
        self.primary_held || self.secondary_held
    }
}

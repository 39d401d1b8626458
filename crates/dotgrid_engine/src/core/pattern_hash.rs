//! Reihenfolgeunabhängiger 32-Bit-Hash einer Punktauswahl.
//!
//! FNV-1a-artiger Hash über die aufsteigend sortierten Indizes. Schnell und
//! für kleine Integer-Mengen gut verteilt, aber **nicht** kryptografisch:
//! gezielte Kollisionen lassen sich konstruieren. Bitbreite und
//! Vergleichssemantik sind Teil des HTTP-Vertrags (`/api/verify-password`);
//! ein Wechsel auf einen anderen Hash ändert das Wire-Format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// FNV-Offset-Basis (32 Bit).
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
/// FNV-Primzahl (32 Bit).
pub const FNV_PRIME: u32 = 16_777_619;

/// Muster-Hash als vorzeichenloser 32-Bit-Wert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternHash(pub u32);

impl PatternHash {
    /// Hash einer Indexmenge; Reihenfolge und Duplikate der Eingabe spielen keine Rolle.
    pub fn from_indices<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut sorted: Vec<u32> = indices.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();

        let hash = sorted.iter().fold(FNV_OFFSET_BASIS, |acc, &index| {
            (acc ^ index).wrapping_mul(FNV_PRIME)
        });
        Self(hash)
    }

    /// Vergleicht den Hash einer Indexmenge mit einem erwarteten Wert.
    pub fn verify<I>(indices: I, expected: PatternHash) -> bool
    where
        I: IntoIterator<Item = u32>,
    {
        Self::from_indices(indices) == expected
    }

    /// Rohwert für Wire-Format und Konfiguration.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for PatternHash {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for PatternHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

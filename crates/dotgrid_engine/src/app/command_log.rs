//! Begrenztes Command-Log für Diagnose und Tests.
//!
//! Positionen sind absolut gezählt: auch nach dem Kürzen bleibt
//! [`CommandLog::total_recorded`] eine gültige Marke für [`CommandLog::since`].

use super::GateCommand;

/// Ringartiger Mitschnitt der dispatchten Commands.
pub struct CommandLog {
    entries: Vec<GateCommand>,
    capacity: usize,
    dropped: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    const DEFAULT_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Log mit eigener Obergrenze (mindestens 2 Einträge).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            entries: Vec::with_capacity(capacity.min(64)),
            capacity,
            dropped: 0,
        }
    }

    /// Hängt einen Command an. Bei voller Kapazität fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: &GateCommand) {
        if self.entries.len() >= self.capacity {
            let cut = self.capacity / 2;
            self.entries.drain(..cut);
            self.dropped += cut;
            log::trace!("Command-Log gekürzt, {} Einträge verworfen", cut);
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Anzahl aller jemals aufgezeichneten Commands, inklusive verworfener.
    pub fn total_recorded(&self) -> usize {
        self.dropped + self.entries.len()
    }

    /// Noch vorhandene Einträge ab der absoluten Marke `mark`.
    pub fn since(&self, mark: usize) -> &[GateCommand] {
        let start = mark.saturating_sub(self.dropped).min(self.entries.len());
        &self.entries[start..]
    }

    pub fn last(&self) -> Option<&GateCommand> {
        self.entries.last()
    }

    /// Alle noch gehaltenen Einträge, älteste zuerst.
    pub fn entries(&self) -> &[GateCommand] {
        &self.entries
    }
}

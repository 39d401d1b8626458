use crate::core::{PatternHash, VerifyOutcome};

/// Kennung einer einzelnen Übermittlung; monoton steigend pro Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionToken(pub u64);

/// Vom Host noch abzuarbeitende Übermittlung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSubmission {
    /// Token, mit dem die Antwort zurückgemeldet werden muss
    pub token: SubmissionToken,
    /// Zu prüfender Muster-Hash
    pub hash: PatternHash,
}

/// Zustand der asynchronen Verifikation.
///
/// Policy: die zuletzt ausgegebene Übermittlung gewinnt. Antworten mit älterem
/// Token und Antworten nach dem Abbau des Widgets werden verworfen.
#[derive(Debug, Default)]
pub struct VerificationState {
    next_token: u64,
    latest: Option<SubmissionToken>,
    outbox: Vec<PendingSubmission>,
    /// Läuft gerade eine (die jüngste) Übermittlung?
    pub is_verifying: bool,
    /// Zuletzt angezeigte Fehlermeldung
    pub error: Option<String>,
    /// Ergebnis der zuletzt angewendeten Antwort
    pub last_outcome: Option<VerifyOutcome>,
}

impl VerificationState {
    /// Erstellt einen leeren Verifikationszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine neue Übermittlung und legt sie in den Ausgang.
    pub fn begin(&mut self, hash: PatternHash) -> SubmissionToken {
        self.next_token += 1;
        let token = SubmissionToken(self.next_token);
        self.latest = Some(token);
        self.is_verifying = true;
        self.error = None;
        self.outbox.push(PendingSubmission { token, hash });
        token
    }

    /// Übernimmt eine Antwort, falls sie zur jüngsten Übermittlung gehört.
    ///
    /// Gibt `false` zurück, wenn die Antwort veraltet war und verworfen wurde.
    pub fn complete(&mut self, token: SubmissionToken, outcome: VerifyOutcome) -> bool {
        if self.latest != Some(token) {
            return false;
        }
        self.latest = None;
        self.is_verifying = false;
        self.error = outcome.error_message();
        self.last_outcome = Some(outcome);
        true
    }

    /// Erklärt alle offenen Übermittlungen für ungültig (Abbau des Widgets).
    pub fn invalidate_all(&mut self) {
        self.latest = None;
        self.is_verifying = false;
        self.outbox.clear();
    }

    /// Entnimmt alle noch nicht versendeten Übermittlungen.
    pub fn take_outbox(&mut self) -> Vec<PendingSubmission> {
        std::mem::take(&mut self.outbox)
    }

    /// Token der Übermittlung, deren Antwort aktuell erwartet wird.
    pub fn awaiting(&self) -> Option<SubmissionToken> {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_submission_wins() {
        let mut state = VerificationState::new();
        let first = state.begin(PatternHash(1));
        let second = state.begin(PatternHash(2));
        assert_eq!(state.take_outbox().len(), 2);

        assert!(!state.complete(first, VerifyOutcome::Accepted));
        assert!(state.is_verifying);
        assert!(state.last_outcome.is_none());

        assert!(state.complete(second, VerifyOutcome::Rejected));
        assert!(!state.is_verifying);
        assert_eq!(state.last_outcome, Some(VerifyOutcome::Rejected));
    }

    #[test]
    fn replies_after_invalidation_are_ignored() {
        let mut state = VerificationState::new();
        let token = state.begin(PatternHash(7));
        state.invalidate_all();

        assert!(!state.complete(token, VerifyOutcome::Accepted));
        assert!(!state.is_verifying);
        assert!(state.take_outbox().is_empty());
    }

    #[test]
    fn failure_sets_error_and_new_submission_clears_it() {
        let mut state = VerificationState::new();
        let token = state.begin(PatternHash(7));
        state.complete(token, VerifyOutcome::network_failure("timeout"));
        assert_eq!(state.error.as_deref(), Some("Failed to verify password"));

        state.begin(PatternHash(8));
        assert!(state.error.is_none());
    }
}

//! Handler für die asynchrone Muster-Verifikation.

use crate::app::SessionState;
use crate::app::state::SubmissionToken;
use crate::core::VerifyOutcome;

/// Hasht die aktuelle Auswahl und legt eine Übermittlung an.
///
/// Die Netzwerk-Anfrage selbst führt der Host außerhalb des Frame-Loops aus.
pub fn begin(state: &mut SessionState) {
    let hash = state.selection.pattern_hash();
    if state.verification.is_verifying {
        log::debug!("Übermittlung während laufender Prüfung, ältere Antwort wird verworfen");
    }
    let token = state.verification.begin(hash);
    log::info!(
        "Muster übermittelt ({} Punkte, Token {})",
        state.selection.len(),
        token.0
    );
}

/// Übernimmt eine Antwort, sofern sie zur jüngsten Übermittlung gehört.
pub fn apply(state: &mut SessionState, token: SubmissionToken, outcome: VerifyOutcome) {
    let summary = format!("{outcome:?}");
    if state.verification.complete(token, outcome) {
        log::info!("Verifikation abgeschlossen: {}", summary);
    } else {
        log::debug!(
            "Veraltete Antwort verworfen (Token {}, erwartet {:?})",
            token.0,
            state.verification.awaiting()
        );
    }
}

/// Verwirft alle offenen Übermittlungen.
pub fn invalidate(state: &mut SessionState) {
    state.verification.invalidate_all();
}

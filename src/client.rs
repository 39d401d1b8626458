//! Client-Seite der Zugangsprüfung: sendet Muster-Hashes an den Gate-Server.
//!
//! Die Anfrage läuft außerhalb des Frame-Loops. Es gibt weder Timeout noch
//! automatische Wiederholung; Transportfehler werden als
//! [`VerifyOutcome::Failed`] mit generischer Meldung zurückgegeben.

use dotgrid_engine::{
    GateIntent, PatternHash, PendingSubmission, VerifyOutcome, VerifyRequest, VerifyResponse,
};
use thiserror::Error;

/// Transport- oder Dekodierfehler einer Verifikationsanfrage.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Basis-URL ist leer oder hat kein http(s)-Schema
    #[error("ungültige Server-URL: {0}")]
    InvalidUrl(String),
    /// Verbindung, HTTP-Status oder JSON-Dekodierung fehlgeschlagen
    #[error("HTTP-Anfrage fehlgeschlagen: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP-Client für `POST /api/verify-password`.
#[derive(Debug, Clone)]
pub struct HttpVerifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpVerifier {
    /// Erstellt einen Client für die gegebene Basis-URL (z.B. `http://127.0.0.1:3000`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Wie [`HttpVerifier::new`], aber mit vorkonfiguriertem Client (Proxy, TLS).
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, ClientError> {
        let base = base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            client,
            endpoint: format!("{}/api/verify-password", base),
        })
    }

    /// Vollständige URL des Verifikations-Endpunkts.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sendet den Hash und liefert die rohe Server-Antwort.
    pub async fn verify_raw(&self, hash: PatternHash) -> Result<VerifyResponse, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&VerifyRequest { hash })
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<VerifyResponse>().await?)
    }

    /// Sendet den Hash; Fehler werden nie weiterpropagiert.
    pub async fn verify(&self, hash: PatternHash) -> VerifyOutcome {
        match self.verify_raw(hash).await {
            Ok(response) => VerifyOutcome::from_response(&response),
            Err(e) => {
                log::warn!("Verifikation fehlgeschlagen: {}", e);
                VerifyOutcome::network_failure(e.to_string())
            }
        }
    }

    /// Arbeitet offene Übermittlungen einer Sitzung ab.
    ///
    /// Die zurückgegebenen Intents werden vom Host an den Controller gereicht;
    /// veraltete Antworten verwirft die Sitzung selbst.
    pub async fn process_submissions(&self, pending: Vec<PendingSubmission>) -> Vec<GateIntent> {
        let mut intents = Vec::with_capacity(pending.len());
        for submission in pending {
            let outcome = self.verify(submission.hash).await;
            intents.push(GateIntent::VerificationFinished {
                token: submission.token,
                outcome,
            });
        }
        intents
    }
}

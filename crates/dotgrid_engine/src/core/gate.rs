//! Zugangsprüfung: Server-Geheimnis, Wire-Typen und Ergebnis-Klassifikation.
//!
//! Server-seitig wird der übermittelte Muster-Hash gegen ein einmalig aus der
//! Konfiguration gelesenes Geheimnis verglichen. Client-seitig werden Antworten
//! und Transportfehler auf ein [`VerifyOutcome`] abgebildet, das nie als Fehler
//! weiterpropagiert wird.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PatternHash;

/// Fehlertext bei fehlendem Geheimnis.
pub const ERROR_NOT_CONFIGURED: &str = "Server not configured";
/// Fehlertext bei nicht parsebarem Geheimnis.
pub const ERROR_INVALID_CONFIGURATION: &str = "Invalid server configuration";
/// Generische Meldung bei Transportfehlern.
pub const ERROR_VERIFY_FAILED: &str = "Failed to verify password";

/// Request-Body von `POST /api/verify-password`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// Übermittelter Muster-Hash
    pub hash: PatternHash,
}

/// Response-Body von `POST /api/verify-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// `true` nur bei exakter Übereinstimmung mit dem Geheimnis
    pub success: bool,
    /// Benannter Konfigurationsfehler (fehlt bei normalem Ergebnis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerifyResponse {
    fn outcome(success: bool) -> Self {
        Self {
            success,
            error: None,
        }
    }

    fn failure(message: &str) -> Self {
        Self {
            success: false,
            error: Some(message.to_string()),
        }
    }
}

/// Server-seitig gehaltenes Geheimnis, genau einmal beim Start gelesen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretConfig {
    /// Konfigurationswert fehlt
    Missing,
    /// Wert vorhanden, aber keine Dezimalzahl (Rohwert bleibt für Diagnose erhalten)
    Corrupt(String),
    /// Gültiger Wert; außerhalb des u32-Bereichs matcht er nie
    Valid(i64),
}

impl SecretConfig {
    /// Interpretiert einen optionalen Rohwert aus der Umgebung.
    ///
    /// Nur ein leerer Wert gilt als fehlend. Sonst wird Whitespace am Rand
    /// entfernt und der Rest muss vollständig als vorzeichenbehaftete
    /// Dezimalzahl parsebar sein; reiner Whitespace ist damit fehlerhaft.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return SecretConfig::Missing;
        };
        if raw.is_empty() {
            return SecretConfig::Missing;
        }
        match raw.trim().parse::<i64>() {
            Ok(value) => SecretConfig::Valid(value),
            Err(_) => SecretConfig::Corrupt(raw.to_string()),
        }
    }

    /// Liest das Geheimnis aus einer Umgebungsvariable.
    pub fn from_env(var: &str) -> Self {
        match std::env::var(var) {
            Ok(value) => Self::from_raw(Some(&value)),
            Err(std::env::VarError::NotPresent) => Self::from_raw(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                SecretConfig::Corrupt("<nicht UTF-8>".to_string())
            }
        }
    }

    /// Vergleicht einen übermittelten Hash mit dem Geheimnis.
    ///
    /// Die drei Ausgänge (nicht konfiguriert, fehlerhaft konfiguriert,
    /// Vergleichsergebnis) bleiben im Response unterscheidbar.
    pub fn verify(&self, submitted: PatternHash) -> VerifyResponse {
        match self {
            SecretConfig::Missing => VerifyResponse::failure(ERROR_NOT_CONFIGURED),
            SecretConfig::Corrupt(_) => VerifyResponse::failure(ERROR_INVALID_CONFIGURATION),
            SecretConfig::Valid(expected) => {
                VerifyResponse::outcome(i64::from(submitted.value()) == *expected)
            }
        }
    }

    /// Kurzbeschreibung für Logs (ohne den geheimen Wert).
    pub fn describe(&self) -> &'static str {
        match self {
            SecretConfig::Missing => "nicht gesetzt",
            SecretConfig::Corrupt(_) => "ungültig (keine Dezimalzahl)",
            SecretConfig::Valid(_) => "gesetzt",
        }
    }
}

/// Fehlschlag einer Verifikation, der kein einfaches „falsches Muster“ ist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateFailure {
    /// Server hat kein Geheimnis
    #[error("{}", ERROR_NOT_CONFIGURED)]
    ServerMisconfigured,
    /// Geheimnis des Servers ist nicht parsebar
    #[error("{}", ERROR_INVALID_CONFIGURATION)]
    ServerConfigCorrupt,
    /// Sonstiger vom Server gemeldeter Fehler
    #[error("{0}")]
    Server(String),
    /// Transportfehler; Detail nur fürs Log, Anzeige generisch
    #[error("{}", ERROR_VERIFY_FAILED)]
    NetworkFailure(String),
}

impl GateFailure {
    /// Benutzerlesbare Meldung.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Ergebnis einer Verifikation am Client-Rand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Muster stimmt
    Accepted,
    /// Wohlgeformte Anfrage, Muster stimmt nicht (kein Fehler)
    Rejected,
    /// Konfigurations- oder Transportfehler; gilt als fehlgeschlagen
    Failed(GateFailure),
}

impl VerifyOutcome {
    /// Klassifiziert eine Server-Antwort.
    pub fn from_response(response: &VerifyResponse) -> Self {
        match response.error.as_deref() {
            Some(ERROR_NOT_CONFIGURED) => VerifyOutcome::Failed(GateFailure::ServerMisconfigured),
            Some(ERROR_INVALID_CONFIGURATION) => {
                VerifyOutcome::Failed(GateFailure::ServerConfigCorrupt)
            }
            Some(other) => VerifyOutcome::Failed(GateFailure::Server(other.to_string())),
            None if response.success => VerifyOutcome::Accepted,
            None => VerifyOutcome::Rejected,
        }
    }

    /// Klassifiziert einen Transportfehler.
    pub fn network_failure(detail: impl Into<String>) -> Self {
        VerifyOutcome::Failed(GateFailure::NetworkFailure(detail.into()))
    }

    /// `true` nur bei akzeptiertem Muster.
    pub fn is_success(&self) -> bool {
        matches!(self, VerifyOutcome::Accepted)
    }

    /// Anzuzeigende Fehlermeldung, falls vorhanden.
    pub fn error_message(&self) -> Option<String> {
        match self {
            VerifyOutcome::Failed(failure) => Some(failure.user_message()),
            _ => None,
        }
    }
}

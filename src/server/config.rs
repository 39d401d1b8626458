//! Server-Konfiguration: Bind-Adresse und einmalig gelesenes Geheimnis.

use std::net::SocketAddr;

use dotgrid_engine::SecretConfig;

/// Umgebungsvariable mit dem Geheimnis als Dezimalzahl.
pub const SECRET_ENV_VAR: &str = "LANDING_PASSWORD";
/// Standard-Bind-Adresse.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Laufzeitkonfiguration des HTTP-Servers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Adresse, an die der Listener gebunden wird
    pub bind: SocketAddr,
    /// Geheimnis, außerhalb des Sitzungs-Lebenszyklus gehalten
    pub secret: SecretConfig,
}

impl ServerConfig {
    /// Liest das Geheimnis genau einmal aus der Umgebung.
    pub fn from_env(bind: SocketAddr) -> Self {
        let secret = SecretConfig::from_env(SECRET_ENV_VAR);
        match &secret {
            SecretConfig::Valid(_) => log::info!("{} {}", SECRET_ENV_VAR, secret.describe()),
            _ => log::warn!(
                "{} {}: Verifikation schlägt immer fehl",
                SECRET_ENV_VAR,
                secret.describe()
            ),
        }
        Self { bind, secret }
    }
}

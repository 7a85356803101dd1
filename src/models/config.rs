use serde::Deserialize;

/// Configuration options specific to the chatbot service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// SQLite database holding the energy collections.
    pub database_url: String,
}

//! Server configuration via CLI args and environment variables.

use clap::Parser;

/// Notebook server gated by a shared bearer secret.
#[derive(Parser, Debug, Clone)]
#[command(name = "notebook-server", version, about)]
pub struct Config {
    /// Bind address.
    #[arg(long, default_value = "127.0.0.1", env = "NOTEBOOK_HOST")]
    pub host: String,

    /// Bind port.
    #[arg(long, default_value_t = 5055, env = "NOTEBOOK_PORT")]
    pub port: u16,

    /// Environment variable holding the shared secret. Read on every request;
    /// unset or empty means authentication is disabled.
    #[arg(
        long,
        default_value = notebook_auth::DEFAULT_SECRET_VAR,
        env = "NOTEBOOK_PASSWORD_ENV"
    )]
    pub password_env: String,

    /// Paths that bypass authentication (comma-separated, exact match).
    /// Replaces the built-in list when given.
    #[arg(long, env = "NOTEBOOK_AUTH_EXEMPT", value_delimiter = ',')]
    pub auth_exempt: Vec<String>,

    /// CORS allowed origins (comma-separated). Empty for no CORS.
    #[arg(long, env = "NOTEBOOK_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Log level.
    #[arg(long, default_value = "info", env = "NOTEBOOK_LOG_LEVEL")]
    pub log_level: String,

    /// Log output format: "text" or "json".
    #[arg(long, default_value = "text", env = "NOTEBOOK_LOG_FORMAT")]
    pub log_format: String,
}

impl Config {
    /// Parses configuration from CLI args and env vars.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

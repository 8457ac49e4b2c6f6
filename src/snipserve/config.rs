use serde::Serialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Controls whether internal error messages reach the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
}

impl ServerConfig {
    /// Resolve the effective config: CLI flags win over environment
    /// variables (`PORT`, `SNIPSERVE_ENV`), which win over defaults.
    pub fn resolve(host: Option<String>, port: Option<u16>, production: bool) -> Self {
        let port = port
            .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_PORT);

        let environment = if production || env_says_production() {
            Environment::Production
        } else {
            Environment::Development
        };

        Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            environment,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_says_production() -> bool {
    std::env::var("SNIPSERVE_ENV")
        .map(|v| v.eq_ignore_ascii_case("production"))
        .unwrap_or(false)
}

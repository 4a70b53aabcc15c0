use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub telemetry: TelemetryConfig,
    pub surrealdb: SurrealDbConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
}

/// OTLP span export. The endpoint comes from the standard
/// `OTEL_EXPORTER_OTLP_ENDPOINT` variable.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct TelemetryConfig {
    pub enabled: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
    pub migration: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig {
                service: ServiceConfig {
                    name: "signup-actix".to_string(),
                },
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 8080,
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                },
                telemetry: TelemetryConfig { enabled: false },
                surrealdb: SurrealDbConfig {
                    host: "localhost".to_string(),
                    port: 8000,
                    username: "root".to_string(),
                    password: "root".to_string(),
                    namespace: "signup".to_string(),
                    database: "signup".to_string(),
                    migration: true,
                },
            }))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}

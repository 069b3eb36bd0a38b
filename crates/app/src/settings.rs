//! Settings for the application binary.
//!
//! Read from an optional `settings.toml` in the working directory, then from
//! environment variables prefixed with `RENTDESK__` (`RENTDESK__SERVER__PORT`,
//! `RENTDESK__DATABASE__URL`, ...), which take precedence.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Markers left in sample configuration that mean "not filled in yet".
const PLACEHOLDER_MARKERS: &[&str] = &["your-project", "placeholder", "changeme", "<"];

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

/// Connection to the backing database.
#[derive(Debug, Default, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub url: String,
}

impl DatabaseSettings {
    /// False while the URL is missing or still a sample value.
    pub fn is_configured(&self) -> bool {
        let url = self.url.trim();
        if url.is_empty() {
            return false;
        }
        let lowered = url.to_lowercase();
        !PLACEHOLDER_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub database: DatabaseSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(
                Environment::with_prefix("RENTDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn parse(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_apply_to_empty_file() {
        let settings = parse("");
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.port, 3000);
        assert!(settings.server.bind.is_none());
        assert!(!settings.database.is_configured());
    }

    #[test]
    fn reads_all_sections() {
        let settings = parse(
            r#"
            [app]
            level = "debug"

            [server]
            bind = "0.0.0.0"
            port = 8080

            [database]
            url = "sqlite:./rentdesk.db?mode=rwc"
            "#,
        );
        assert_eq!(settings.app.level, "debug");
        assert_eq!(settings.server.bind.as_deref(), Some("0.0.0.0"));
        assert_eq!(settings.server.port, 8080);
        assert!(settings.database.is_configured());
    }

    #[test]
    fn placeholder_urls_are_not_configured() {
        for url in [
            "",
            "   ",
            "https://your-project.example.co",
            "postgres://user:PLACEHOLDER@db",
            "sqlite:changeme.db",
            "<database-url>",
        ] {
            let database = DatabaseSettings {
                url: url.to_string(),
            };
            assert!(!database.is_configured(), "{url:?} counted as configured");
        }
    }
}

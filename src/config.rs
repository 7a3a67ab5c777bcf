use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/sentiment.json";

const DEFAULT_API_URL: &str = "http://localhost:8080/api/chat/sentiment";
const DEFAULT_CHAT_FILE: &str = "chat_data.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Sentiment endpoint the transcript is posted to.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Saved conversation file to analyse.
    #[serde(default = "default_chat_file")]
    pub chat_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            chat_file: default_chat_file(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_chat_file() -> String {
    DEFAULT_CHAT_FILE.to_string()
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let config = load_config("no/such/config.json");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.chat_file, DEFAULT_CHAT_FILE);
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentiment.json");
        fs::write(
            &path,
            r#"{"api_url": "http://example.test/sentiment", "chat_file": "saved.json"}"#,
        )
        .unwrap();

        let config = load_config(path.to_str().unwrap());
        assert_eq!(config.api_url, "http://example.test/sentiment");
        assert_eq!(config.chat_file, "saved.json");
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentiment.json");
        fs::write(&path, r#"{"chat_file": "other.json"}"#).unwrap();

        let config = load_config(path.to_str().unwrap());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.chat_file, "other.json");
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentiment.json");
        fs::write(&path, "{not json").unwrap();

        let config = load_config(path.to_str().unwrap());
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Codes the door accepts. Exact string match, so leading zeros matter.
    #[serde(default = "default_allowed_codes")]
    pub allowed_codes: Vec<String>,
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
    #[serde(default = "default_sound_file")]
    pub sound_file: String,
    #[serde(default = "default_invalid_message")]
    pub invalid_message: String,
    #[serde(default = "default_wrong_message")]
    pub wrong_message: String,
}

fn default_allowed_codes() -> Vec<String> {
    vec!["227".to_string()]
}
fn default_fade_ms() -> u64 {
    550
}
fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_sound_enabled() -> bool {
    true
}
fn default_sound_file() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wonderland")
        .join("door.wav")
        .to_string_lossy()
        .to_string()
}
fn default_invalid_message() -> String {
    "Enter a 3-digit number.".to_string()
}
fn default_wrong_message() -> String {
    "...that doesn't seem right. Try again.".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allowed_codes: default_allowed_codes(),
            fade_ms: default_fade_ms(),
            theme: default_theme(),
            sound_enabled: default_sound_enabled(),
            sound_file: default_sound_file(),
            invalid_message: default_invalid_message(),
            wrong_message: default_wrong_message(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wonderland")
            .join("config.toml")
    }

    /// Clean up a loaded config: keep only well-formed 3-digit codes, fall
    /// back to the default list if nothing survives, and cap the fade so a
    /// stray value can't freeze the screen swap for minutes.
    pub fn normalize(&mut self) {
        self.allowed_codes
            .retain(|code| code.len() == 3 && code.chars().all(|ch| ch.is_ascii_digit()));
        if self.allowed_codes.is_empty() {
            self.allowed_codes = default_allowed_codes();
        }
        self.fade_ms = self.fade_ms.min(10_000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.allowed_codes, vec!["227".to_string()]);
        assert_eq!(config.fade_ms, 550);
        assert_eq!(config.theme, "terminal-default");
        assert!(config.sound_enabled);
        assert!(!config.invalid_message.is_empty());
        assert!(!config.wrong_message.is_empty());
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let toml_str = r#"
allowed_codes = ["314", "227"]
fade_ms = 200
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.allowed_codes, vec!["314", "227"]);
        assert_eq!(config.fade_ms, 200);
        assert_eq!(config.theme, "terminal-default");
        assert!(config.sound_enabled);
    }

    #[test]
    fn toml_round_trip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.allowed_codes, deserialized.allowed_codes);
        assert_eq!(config.fade_ms, deserialized.fade_ms);
        assert_eq!(config.sound_file, deserialized.sound_file);
        assert_eq!(config.wrong_message, deserialized.wrong_message);
    }

    #[test]
    fn normalize_drops_malformed_codes() {
        let mut config = Config::default();
        config.allowed_codes = vec![
            "314".to_string(),
            "12".to_string(),
            "abcd".to_string(),
            "007".to_string(),
            "1234".to_string(),
        ];
        config.normalize();
        assert_eq!(config.allowed_codes, vec!["314", "007"]);
    }

    #[test]
    fn normalize_restores_default_when_all_codes_invalid() {
        let mut config = Config::default();
        config.allowed_codes = vec!["nope".to_string()];
        config.normalize();
        assert_eq!(config.allowed_codes, vec!["227"]);
    }

    #[test]
    fn normalize_caps_fade() {
        let mut config = Config::default();
        config.fade_ms = 600_000;
        config.normalize();
        assert_eq!(config.fade_ms, 10_000);
    }
}

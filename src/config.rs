use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::*;
use crate::icons::IconSet;
use crate::models::Theme;

/// Mock call and follow-up timer durations, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delays {
    pub login_ms: u64,
    pub sign_up_ms: u64,
    pub social_ms: u64,
    pub password_reset_ms: u64,
    pub resend_code_ms: u64,
    pub reset_auto_close_ms: u64,
    pub post_success_navigation_ms: u64,
}

impl Default for Delays {
    fn default() -> Self {
        Delays {
            login_ms: DEFAULT_LOGIN_DELAY_MS,
            sign_up_ms: DEFAULT_SIGN_UP_DELAY_MS,
            social_ms: DEFAULT_SOCIAL_DELAY_MS,
            password_reset_ms: DEFAULT_PASSWORD_RESET_DELAY_MS,
            resend_code_ms: DEFAULT_RESEND_CODE_DELAY_MS,
            reset_auto_close_ms: DEFAULT_RESET_AUTO_CLOSE_MS,
            post_success_navigation_ms: DEFAULT_POST_SUCCESS_NAVIGATION_MS,
        }
    }
}

impl Delays {
    pub fn reset_auto_close(&self) -> Duration {
        Duration::from_millis(self.reset_auto_close_ms)
    }

    pub fn post_success_navigation(&self) -> Duration {
        Duration::from_millis(self.post_success_navigation_ms)
    }
}

/// User settings read from `~/.skillarc/config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme every screen starts with when mounted
    pub theme: Theme,
    pub icons: IconSet,
    /// Directory holding `illustration.txt` / `illustration1.txt`
    pub illustrations_dir: Option<PathBuf>,
    /// Where `skillarc.log` is written (default: current directory)
    pub log_dir: Option<PathBuf>,
    pub delays: Delays,
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join("config.yaml")
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.delays.login_ms, 1500);
        assert_eq!(config.delays.password_reset_ms, 2000);
        assert_eq!(config.delays.reset_auto_close_ms, 3000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "theme: dark\nicons: ascii\ndelays:\n  login_ms: 10\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.icons, IconSet::Ascii);
        assert_eq!(config.delays.login_ms, 10);
        assert_eq!(config.delays.sign_up_ms, 1500);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "theme: [not, a, theme]\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}

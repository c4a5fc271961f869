use std::path::{Path, PathBuf};

use dirs::home_dir;
use thiserror::Error;

/// Used when no `problems/` sits next to the executable (e.g. `cargo run`).
const SOURCE_DIR: &str = env!("CARGO_MANIFEST_DIR");

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot determine the home directory")]
    NoHomeDir,
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
}

/// Everything a run needs from the environment, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub home_dir: PathBuf,
    pub api_key: String,
    pub app_dir: PathBuf,
    pub problems_dir: PathBuf,
    pub log_dir: PathBuf,
    pub model: String,
    pub base_url: String,
}

impl Config {
    pub fn new(home_dir: PathBuf, api_key: String, app_dir: &Path) -> Self {
        Self {
            home_dir,
            api_key,
            app_dir: app_dir.to_path_buf(),
            problems_dir: app_dir.join("problems"),
            log_dir: app_dir.join("logs"),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let home = home_dir().ok_or(ConfigError::NoHomeDir)?;
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let exe = std::env::current_exe().ok();
        let dir = app_dir(exe.as_deref(), Path::new(SOURCE_DIR));
        Ok(Self::new(home, api_key, &dir))
    }
}

/// Directory holding `problems/` and `logs/`: the executable's own directory
/// when it has a `problems/` folder, `fallback` otherwise.
pub fn app_dir(exe: Option<&Path>, fallback: &Path) -> PathBuf {
    exe.and_then(Path::parent)
        .filter(|dir| dir.join("problems").is_dir())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| fallback.to_path_buf())
}

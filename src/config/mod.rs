use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Application configuration, loaded once at startup and never mutated while
/// the server runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_shiny_odds")]
    pub shiny_odds: u32,
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default = "default_game")]
    pub game: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub bst_file: Option<String>,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_title() -> String {
    "Mains Leaderboard".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_shiny_odds() -> u32 {
    8192
}
fn default_volume() -> f64 {
    0.5
}
fn default_game() -> String {
    "crystal".to_string()
}
fn default_log_file() -> String {
    Config::log_file_default().to_string_lossy().to_string()
}
fn default_recent_limit() -> usize {
    crate::core::calculator::recent::DEFAULT_RECENT_LIMIT
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            port: default_port(),
            shiny_odds: default_shiny_odds(),
            volume: default_volume(),
            game: default_game(),
            log_file: default_log_file(),
            bst_file: None,
            recent_limit: default_recent_limit(),
            log_level: default_log_level(),
        }
    }
}

/// The part of the configuration the browser front end is allowed to see.
#[derive(Debug, Clone, Serialize)]
pub struct PublicConfig {
    pub title: String,
    pub port: u16,
    pub shiny_odds: u32,
    pub volume: f64,
    pub game: String,
    /// Sprites are not served, so the front end never looks for shiny GIFs.
    pub shiny_gifs_exists: bool,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("mainsboard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".mainsboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("mainsboard.conf")
    }

    /// Return the default path of the run log
    pub fn log_file_default() -> PathBuf {
        Self::config_dir().join("pokemon_usage.csv")
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    pub fn bst_path(&self) -> Option<PathBuf> {
        self.bst_file.as_deref().map(expand_tilde)
    }

    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            title: self.title.clone(),
            port: self.port,
            shiny_odds: self.shiny_odds,
            volume: self.volume,
            game: self.game.clone(),
            shiny_gifs_exists: false,
        }
    }

    /// Load configuration from file, or return defaults if not found.
    /// An empty or unreadable file is reported and replaced by defaults.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => {
                warning(format!("{} is empty. Using default configuration.", path.display()));
                Self::default()
            }
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warning(format!(
                    "{} contains invalid YAML: {e}. Using default configuration.",
                    path.display()
                ));
                Self::default()
            }),
            Err(e) => {
                warning(format!(
                    "Error reading {}: {e}. Using default configuration.",
                    path.display()
                ));
                Self::default()
            }
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration directory, config file and run log
    pub fn init_all(custom_log: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::load();

        // Log path: user provided or configured
        if let Some(log_path) = custom_log {
            config.log_file = log_path;
        }

        if !is_test {
            config.save()?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}

//! Bring an older configuration file up to date by adding the keys it lacks.
//! Existing values (and unknown keys the user added) are never touched.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every key a complete configuration file carries, in file order.
pub const KNOWN_KEYS: &[&str] = &[
    "title",
    "port",
    "shiny_odds",
    "volume",
    "game",
    "log_file",
    "bst_file",
    "recent_limit",
    "log_level",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a key/value document",
            path.display()
        ))),
    }
}

/// Keys from `KNOWN_KEYS` absent in the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add every missing key with its default value and write the file back.
///   Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn fill_missing_keys(path: &Path) -> AppResult<bool> {
    let mut map = read_mapping(path)?;

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in KNOWN_KEYS {
        let k = Value::String((*key).to_string());
        if !map.contains_key(&k)
            && let Some(v) = defaults.get(&k)
        {
            map.insert(k, v.clone());
            added.push(*key);
        }
    }

    if added.is_empty() {
        return Ok(false);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    tracing::info!(path = %path.display(), added = ?added, "Config keys added");
    Ok(true)
}

/// Run the config migration for the standard config file. No-op when the
/// file does not exist yet (`init` writes a complete one).
pub fn run_config_migration() -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        info("No configuration file found, nothing to migrate.");
        return Ok(());
    }

    if fill_missing_keys(&path)? {
        success(format!("Configuration updated: {}", path.display()));
    } else {
        info("Configuration already up to date.");
    }
    Ok(())
}

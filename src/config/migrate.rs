//! Config file upkeep: report and fill keys missing from an older file.

use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;

use super::{CONFIG_KEYS, Config};
use crate::ui::messages::{info, success};

/// Keys from `CONFIG_KEYS` absent in the YAML document at `path`.
pub fn missing_keys(path: &Path) -> io::Result<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("invalid YAML in {:?}: {}", path, e)))?;

    let Some(map) = yaml.as_mapping() else {
        return Ok(CONFIG_KEYS.to_vec());
    };

    Ok(CONFIG_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add every missing key with its default value, keeping existing values
/// and any keys this version does not know. Returns the keys added.
pub fn fill_missing(path: &Path) -> io::Result<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    let mut yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("invalid YAML in {:?}: {}", path, e)))?;

    if !yaml.is_mapping() {
        yaml = Value::Mapping(Mapping::new());
    }

    let defaults = serde_yaml::to_value(Config::default()).map_err(io::Error::other)?;
    let mut added = Vec::new();

    if let (Some(map), Some(defaults)) = (yaml.as_mapping_mut(), defaults.as_mapping()) {
        for key in CONFIG_KEYS {
            let k = Value::String(key.to_string());
            if !map.contains_key(&k)
                && let Some(v) = defaults.get(&k)
            {
                map.insert(k, v.clone());
                added.push(key);
            }
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&yaml).map_err(io::Error::other)?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}

/// Run the config migration on the standard config file, if any.
pub fn run_config_migration() -> io::Result<()> {
    let path = Config::config_file();

    if !path.exists() {
        info(format!("No config file at {:?}; nothing to migrate.", path));
        return Ok(());
    }

    let added = fill_missing(&path)?;
    if added.is_empty() {
        success("Configuration is up to date.");
    } else {
        success(format!("Added missing config keys: {}", added.join(", ")));
    }

    Ok(())
}

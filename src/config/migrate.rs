use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Dotted paths of every key the default configuration defines but the
/// YAML mapping `current` lacks (e.g. `matching.strategy`).
fn collect_missing(defaults: &Mapping, current: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (key, default_val) in defaults {
        let name = key.as_str().unwrap_or_default();
        let dotted = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match current.get(key) {
            None => out.push(dotted),
            Some(cur_val) => {
                if let (Some(def_map), Some(cur_map)) =
                    (default_val.as_mapping(), cur_val.as_mapping())
                {
                    collect_missing(def_map, cur_map, &dotted, out);
                }
            }
        }
    }
}

/// Insert every default key missing from `current`, recursing into nested
/// sections. Existing values are never overwritten.
fn fill_missing(defaults: &Mapping, current: &mut Mapping) {
    for (key, default_val) in defaults {
        match current.get_mut(key) {
            None => {
                current.insert(key.clone(), default_val.clone());
            }
            Some(cur_val) => {
                if let (Some(def_map), Some(cur_map)) =
                    (default_val.as_mapping(), cur_val.as_mapping_mut())
                {
                    fill_missing(def_map, cur_map);
                }
            }
        }
    }
}

fn read_mapping(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    if yaml.is_null() {
        return Ok(Value::Mapping(Mapping::new()));
    }
    if !yaml.is_mapping() {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    }
    Ok(yaml)
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}

/// List the configuration keys missing from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let yaml = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut missing = Vec::new();
    if let Some(map) = yaml.as_mapping() {
        collect_missing(&defaults, map, "", &mut missing);
    }
    Ok(missing)
}

/// Add missing keys (with their default values) to the file at `path`.
/// Returns the keys that were added; the file is rewritten only when
/// something changed.
pub fn migrate_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let mut yaml = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut added = Vec::new();
    if let Some(map) = yaml.as_mapping_mut() {
        collect_missing(&defaults, map, "", &mut added);
        if added.is_empty() {
            return Ok(added);
        }
        fill_missing(&defaults, map);
    }

    let serialized = serde_yaml::to_string(&yaml)?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    Ok(added)
}

use crate::error::{Result, SeoError};
use crate::types::config::SeoConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "seoscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".seoscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/seoscore/config.toml";

/// Loads the layered config for `root`. `explicit` replaces the project file
/// and must exist. Without any file the built-in defaults apply.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<SeoConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<SeoConfig> {
    let project_path = match explicit {
        Some(path) if !path.exists() => {
            return Err(SeoError::PathNotFound(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => root.join(DEFAULT_CONFIG_FILE),
    };

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: SeoConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| SeoError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    debug!(path = %path.display(), "config layer merged");
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| SeoError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge key by key; any other value in `overlay` replaces the base.
fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

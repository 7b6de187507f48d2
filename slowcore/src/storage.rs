//! Storage utilities for Slow Computer apps
//!
//! Preferences live as pretty-printed JSON under the platform config
//! directory, one folder per app.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize to pretty JSON, creating parent directories as needed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Load a JSON file, falling back to `T::default()`.
///
/// A missing file is the normal first-run case and is silent. Anything else
/// (unreadable, malformed) is logged before falling back.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_json(path) {
        Ok(value) => value,
        Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable preferences");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        name: String,
        count: u32,
    }

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("slowcore-storage-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch("nested/prefs.json");
        let prefs = Prefs { name: "calc".into(), count: 3 };
        save_json(&path, &prefs).unwrap();
        let loaded: Prefs = load_json(&path).unwrap();
        assert_eq!(loaded, prefs);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = scratch("does-not-exist.json");
        let prefs: Prefs = load_or_default(&path);
        assert_eq!(prefs, Prefs::default());
    }

    #[test]
    fn test_malformed_file_is_default() {
        let path = scratch("broken.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_json::<Prefs>(&path), Err(StorageError::Json(_))));
        let prefs: Prefs = load_or_default(&path);
        assert_eq!(prefs, Prefs::default());
        let _ = std::fs::remove_file(&path);
    }
}

use serde::{Deserialize, Serialize};

use lotto_generate::MAX_SET_COUNT;

use crate::store::StorageKeys;

use super::atomic::write_bytes_atomic;
use super::{WorkspaceError, WorkspacePaths, WorkspaceResult};

/// User settings stored in `config/settings.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Tickets drawn when `--sets` is not given.
    #[serde(default = "default_set_count")]
    pub default_set_count: u8,
    #[serde(default)]
    pub keys: StorageKeys,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_set_count: default_set_count(),
            keys: StorageKeys::default(),
        }
    }
}

impl AppSettings {
    pub fn validate(&self) -> WorkspaceResult<()> {
        if !(1..=MAX_SET_COUNT).contains(&self.default_set_count) {
            return Err(WorkspaceError::Invalid(format!(
                "default_set_count must be between 1 and {MAX_SET_COUNT}, got {}",
                self.default_set_count
            )));
        }
        self.keys.validate().map_err(WorkspaceError::Invalid)
    }
}

fn default_set_count() -> u8 {
    1
}

pub fn load_or_create_settings(paths: &WorkspacePaths) -> WorkspaceResult<AppSettings> {
    let path = paths.settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path)?;
        let settings: AppSettings = toml::from_str(&content)?;
        settings.validate()?;
        return Ok(settings);
    }

    let settings = AppSettings::default();
    save_settings(paths, &settings)?;
    Ok(settings)
}

pub fn save_settings(paths: &WorkspacePaths, settings: &AppSettings) -> WorkspaceResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(&paths.settings_path(), encoded.as_bytes()).map_err(WorkspaceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_workspace() -> WorkspacePaths {
        let root = std::env::temp_dir().join(format!("lotto-settings-{}", uuid::Uuid::new_v4()));
        let paths = WorkspacePaths::new(root);
        paths.ensure_dirs().expect("create workspace");
        paths
    }

    #[test]
    fn creates_defaults_on_first_load() {
        let paths = scratch_workspace();
        let settings = load_or_create_settings(&paths).expect("load settings");
        assert_eq!(settings, AppSettings::default());
        assert!(paths.settings_path().exists());

        let again = load_or_create_settings(&paths).expect("reload settings");
        assert_eq!(again, settings);
        let _ = std::fs::remove_dir_all(&paths.root);
    }

    #[test]
    fn partial_file_falls_back_to_default_keys() {
        let paths = scratch_workspace();
        std::fs::write(paths.settings_path(), "default_set_count = 5\n").expect("write settings");

        let settings = load_or_create_settings(&paths).expect("load settings");
        assert_eq!(settings.default_set_count, 5);
        assert_eq!(settings.keys, StorageKeys::default());
        let _ = std::fs::remove_dir_all(&paths.root);
    }

    #[test]
    fn rejects_out_of_range_set_count() {
        let paths = scratch_workspace();
        std::fs::write(paths.settings_path(), "default_set_count = 11\n").expect("write settings");

        let err = load_or_create_settings(&paths).expect_err("set count above limit");
        assert!(matches!(err, WorkspaceError::Invalid(_)));
        let _ = std::fs::remove_dir_all(&paths.root);
    }
}

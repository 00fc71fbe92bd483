use crate::config::SETTINGS_FILE_NAME;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn settings_path() -> Option<PathBuf> {
        if let Some(dir) = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|d| !d.is_empty())
        {
            Some(PathBuf::from(dir).join("hilo").join(SETTINGS_FILE_NAME))
        } else {
            ProjectDirs::from("", "", "hilo")
                .map(|proj_dirs| proj_dirs.config_dir().join(SETTINGS_FILE_NAME))
        }
    }
}

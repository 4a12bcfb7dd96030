//! Centralized path definitions
//!
//! The preview configuration lives in the platform config directory:
//! - Linux: ~/.config/tierbox
//! - macOS: ~/Library/Application Support/dev.tierbox.tierbox
//! - Windows: %APPDATA%/tierbox/tierbox/config
//!
//! When no home directory can be determined the working directory is used.
use crate::utils::constants::{ APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, PREVIEW_CONFIG_FILE };
use crate::debug_eprint;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the configuration directory for tierbox
pub fn config_dir() -> PathBuf {
    config_dir_from(ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME))
}

fn config_dir_from(project_dirs: Option<ProjectDirs>) -> PathBuf {
    match project_dirs {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            debug_eprint!("⚠️ No home directory found, using {} for config", cwd.display());
            cwd
        }
    }
}

/// Get the preview configuration file path
pub fn preview_config_json() -> PathBuf {
    config_dir().join(PREVIEW_CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_config_sits_in_config_dir() {
        let path = preview_config_json();
        assert_eq!(path.file_name().unwrap(), PREVIEW_CONFIG_FILE);
        assert_eq!(path.parent().unwrap(), config_dir());
    }

    #[test]
    fn missing_home_falls_back_to_working_directory() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(config_dir_from(None), cwd);
    }
}

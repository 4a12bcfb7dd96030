use crate::libs::classes::ContainerOptions;
use crate::state::paths;
use crate::utils::data;
use crate::{ debug_eprint, debug_print };
use serde::{ Deserialize, Serialize };
use std::path::{ Path, PathBuf };

/// Settings for the rendered tier gallery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Page title shown in the gallery header
    pub title: String,
    /// Options used for the sample container and as the fixed axis of each section
    pub defaults: ContainerOptions,
    /// Render one container per width tier
    pub show_width_tiers: bool,
    /// Render one container per padding tier
    pub show_padding_tiers: bool,
    /// Text placed inside every sample container
    pub sample_text: String,
    /// Class applied to the sample content so padding is visible
    pub sample_class: String,
    /// Where the document is written; stdout when unset
    pub output: Option<PathBuf>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            title: "Container tiers".to_string(),
            defaults: ContainerOptions::new().with_class("border border-dashed border-slate-400 bg-slate-50"),
            show_width_tiers: true,
            show_padding_tiers: true,
            sample_text: "The quick brown fox jumps over the lazy dog.".to_string(),
            sample_class: "bg-sky-100 text-slate-800".to_string(),
            output: None,
        }
    }
}

impl PreviewConfig {
    /// Load from the platform config directory
    pub fn load() -> Self {
        Self::load_from(&paths::preview_config_json())
    }

    /// Load from a file. A missing file is created with the defaults; an
    /// unparsable one is left as is and the defaults are used.
    pub fn load_from(config_path: &Path) -> Self {
        if !config_path.exists() {
            debug_print!("📄 No preview config at {}, writing defaults", config_path.display());
            let default_config = Self::default();
            if let Err(e) = default_config.save_to(config_path) {
                debug_eprint!("⚠️ Could not write default preview config: {}", e);
            }
            return default_config;
        }

        match data::load_json_from_file::<PreviewConfig>(config_path) {
            Ok(config) => {
                debug_print!("📄 Loaded preview config from {}", config_path.display());
                config
            }
            Err(e) => {
                debug_eprint!("⚠️ Failed to load preview config: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), String> {
        self.save_to(&paths::preview_config_json())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), String> {
        data::save_json_to_file(self, config_path)
    }
}

//=========================================================================
// Configuration
//=========================================================================
//
// Coordinator settings plus per-panel overrides, loadable from TOML or
// RON. Every field has a default so partial files are valid.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;
use crate::core::navigation::ReopenPolicy;
use crate::core::panel::{PanelConfig, PanelId, DEFAULT_TRANSITION_DURATION};

//=== ConfigError =========================================================

/// Failure to read or parse a configuration file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

//=== UiConfig ============================================================

/// Coordinator-wide settings.
///
/// ```toml
/// allow_multiple_panels = false
/// pause_game_on_panel = true
/// default_transition_duration = 0.25
/// back_key = "Escape"
///
/// [panels.Inventory]
/// kind = "Menu"
/// close_on_outside_click = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// When `false`, opening a panel closes the current one.
    pub allow_multiple_panels: bool,

    /// When `true`, an active UI pauses the game (time-scale 0).
    pub pause_game_on_panel: bool,

    /// Seconds, used by panels that leave their durations unset.
    pub default_transition_duration: f32,

    /// Key that closes the top panel.
    pub back_key: KeyCode,

    pub reopen_policy: ReopenPolicy,

    /// Game time-scale while no pause is requested.
    pub base_time_scale: f32,

    /// Replaces the config of the panel with the matching id at registration.
    pub panels: HashMap<PanelId, PanelConfig>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            allow_multiple_panels: false,
            pause_game_on_panel: true,
            default_transition_duration: DEFAULT_TRANSITION_DURATION,
            back_key: KeyCode::Escape,
            reopen_policy: ReopenPolicy::MoveToTop,
            base_time_scale: 1.0,
            panels: HashMap::new(),
        }
    }
}

impl UiConfig {
    /// Loads from a `.toml` or `.ron` file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents)?,
            Some("ron") => Self::from_ron_str(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        info!("Loaded UI config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

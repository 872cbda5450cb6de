//=========================================================================
// Panel Configuration
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::PanelType;
use crate::core::animation::EaseType;

//=== PanelConfig =========================================================

/// Per-panel behaviour switches.
///
/// Durations left as `None` fall back to the coordinator's default
/// transition duration when the panel is registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub kind: PanelType,

    pub animation_enabled: bool,
    pub open_duration: Option<f32>,
    pub close_duration: Option<f32>,
    pub open_easing: EaseType,
    pub close_easing: EaseType,

    /// Escape closes this panel while it is current.
    pub close_on_escape: bool,

    /// A left click outside the panel's bounds closes it while it is current.
    pub close_on_outside_click: bool,

    pub has_background: bool,
    /// RGBA, straight alpha.
    pub background_color: [f32; 4],
}

impl PanelConfig {
    /// Config with animation turned off; transitions are immediate.
    pub fn immediate() -> Self {
        Self {
            animation_enabled: false,
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: PanelType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.open_duration = Some(seconds);
        self.close_duration = Some(seconds);
        self
    }

    pub fn with_close_on_escape(mut self, enabled: bool) -> Self {
        self.close_on_escape = enabled;
        self
    }

    pub fn with_close_on_outside_click(mut self, enabled: bool) -> Self {
        self.close_on_outside_click = enabled;
        self
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            kind: PanelType::Overlay,
            animation_enabled: true,
            open_duration: None,
            close_duration: None,
            open_easing: EaseType::EaseInOut,
            close_easing: EaseType::EaseInOut,
            close_on_escape: true,
            close_on_outside_click: false,
            has_background: true,
            background_color: [0.0, 0.0, 0.0, 0.5],
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Coordinator Builder
//=========================================================================
//
// Fluent configuration for a `UiCoordinator`.
//
// ```text
//     CoordinatorBuilder ──build()──> UiCoordinator ──register()/update()──>
//         │
//         ├─ with_allow_multiple_panels()
//         ├─ with_pause_on_panel()
//         ├─ with_default_transition_duration()
//         └─ from_config()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::UiCoordinator;
use crate::core::config::UiConfig;
use crate::core::input::KeyCode;
use crate::core::navigation::ReopenPolicy;
use crate::core::panel::DEFAULT_TRANSITION_DURATION;

//=== CoordinatorBuilder ==================================================

/// Builder for a [`UiCoordinator`].
///
/// # Default Values
///
/// - **Multiple panels**: off (opening a panel closes the current one)
/// - **Pause on panel**: on
/// - **Default transition duration**: 0.3 s
/// - **Back key**: Escape
/// - **Reopen policy**: move to top
/// - **Base time-scale**: 1.0
///
/// # Examples
///
/// ```
/// use aetheric_panels::prelude::*;
///
/// let coordinator = CoordinatorBuilder::new()
///     .with_allow_multiple_panels(true)
///     .with_default_transition_duration(0.2)
///     .with_back_key(KeyCode::Backspace)
///     .build();
///
/// assert!(!coordinator.is_ui_active());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoordinatorBuilder {
    config: UiConfig,
}

impl CoordinatorBuilder {
    pub fn new() -> Self {
        Self {
            config: UiConfig::default(),
        }
    }

    /// Starts from a loaded configuration, including panel overrides.
    ///
    /// A non-positive (or NaN) default transition duration falls back to
    /// [`DEFAULT_TRANSITION_DURATION`] with a warning.
    pub fn from_config(mut config: UiConfig) -> Self {
        let duration = config.default_transition_duration;
        if duration.is_nan() || duration <= 0.0 {
            warn!(
                "Invalid default transition duration {} in config, using {}",
                duration, DEFAULT_TRANSITION_DURATION
            );
            config.default_transition_duration = DEFAULT_TRANSITION_DURATION;
        }
        Self { config }
    }

    /// When `false`, opening a panel closes whichever panel is current.
    pub fn with_allow_multiple_panels(mut self, allow: bool) -> Self {
        self.config.allow_multiple_panels = allow;
        self
    }

    /// When `true`, the game time-scale drops to 0 while any panel is open.
    pub fn with_pause_on_panel(mut self, pause: bool) -> Self {
        self.config.pause_game_on_panel = pause;
        self
    }

    /// Duration for panels that leave theirs unset.
    ///
    /// # Panics
    ///
    /// Panics if `seconds <= 0.0`. Disable animation per panel instead.
    pub fn with_default_transition_duration(mut self, seconds: f32) -> Self {
        assert!(
            seconds > 0.0,
            "Transition duration must be positive, got {}",
            seconds
        );
        self.config.default_transition_duration = seconds;
        self
    }

    pub fn with_back_key(mut self, key: KeyCode) -> Self {
        self.config.back_key = key;
        self
    }

    pub fn with_reopen_policy(mut self, policy: ReopenPolicy) -> Self {
        self.config.reopen_policy = policy;
        self
    }

    /// Game time-scale while nothing holds a pause.
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.config.base_time_scale = scale;
        self
    }

    pub fn build(self) -> UiCoordinator {
        info!(
            "Building UI coordinator (multiple panels: {}, pause on panel: {}, duration: {}s)",
            self.config.allow_multiple_panels,
            self.config.pause_game_on_panel,
            self.config.default_transition_duration
        );
        UiCoordinator::with_config(self.config)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_panels::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Coordinator
pub use crate::core::coordinator::{
    CoordinatorBuilder, PauseController, PauseSource, UiCoordinator, UiEvent,
};

// Panels
pub use crate::core::panel::{Panel, PanelConfig, PanelId, PanelState, PanelType, PanelView, Rect};

// Navigation
pub use crate::core::navigation::{PanelCommands, PanelRequest, ReopenPolicy};

// Animation
pub use crate::core::animation::EaseType;

// Input
pub use crate::core::input::{InputEvent, KeyCode, MouseButton};

// Configuration
pub use crate::core::config::{ConfigError, UiConfig};

//=========================================================================
// Panel System
//=========================================================================
//
// Panels are the unit the coordinator opens and closes. Each one pairs a
// consumer-supplied `PanelView` with the lifecycle state machine that
// drives its visibility.
//
// Architecture:
//   Panel
//     ├─ view: Box<dyn PanelView>   (consumer hooks)
//     ├─ config: PanelConfig
//     ├─ state: PanelState
//     └─ transition: Option<Transition>
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use crate::core::navigation::PanelCommands;

//=== Module Declarations =================================================

mod config;
mod id;
mod lifecycle;
mod types;

//=== Public API ==========================================================

pub use config::PanelConfig;
pub use id::PanelId;
pub use lifecycle::{Panel, DEFAULT_TRANSITION_DURATION};
pub use types::{PanelState, PanelType, Rect};

//=== AsAny ===============================================================

/// Downcasting support for typed panel lookups.
///
/// Implemented automatically for every `'static` type; views never need
/// to implement it by hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=== PanelView Trait =====================================================

/// Consumer side of a panel: what it is called and how it reacts.
///
/// Only `name()` is required:
///
/// ```rust
/// # use aetheric_panels::prelude::*;
/// struct InventoryView;
///
/// impl PanelView for InventoryView {
///     fn name(&self) -> &str {
///         "Inventory"
///     }
/// }
/// ```
///
/// Hooks receive [`PanelCommands`] scoped to this panel. They may ask for
/// this panel to be opened or closed again; the requests are applied at
/// the next coordinator update.
pub trait PanelView: AsAny {
    /// Display name. Used as the panel id unless one is set explicitly.
    fn name(&self) -> &str;

    /// Screen bounds for outside-click detection.
    ///
    /// `None` means clicks are never considered outside.
    fn bounds(&self) -> Option<Rect> {
        None
    }

    /// Called once, right after registration.
    fn on_initialize(&mut self, _commands: &mut PanelCommands<'_>) {}

    /// Called when the open transition begins.
    fn on_open(&mut self, _commands: &mut PanelCommands<'_>) {}

    /// Called when the close transition begins.
    fn on_close(&mut self, _commands: &mut PanelCommands<'_>) {}
}

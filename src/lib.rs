//=========================================================================
// Aetheric Panels — Library Root
//
// Navigation and lifecycle engine for a game's modal UI panels.
//
// Responsibilities:
// - Drive each panel through Closed → Opening → Open → Closing
// - Keep a navigation stack with a single "current" panel
// - Pause the game while the UI is active
// - Publish lifecycle events to any number of subscribers
//
// Typical usage:
// ```no_run
// use aetheric_panels::prelude::*;
//
// struct Inventory;
// impl PanelView for Inventory {
//     fn name(&self) -> &str { "Inventory" }
// }
//
// let mut ui = CoordinatorBuilder::new().build();
// ui.register(Panel::new(Inventory));
// ui.open("Inventory");
//
// loop {
//     let events: Vec<InputEvent> = Vec::new(); // from the host
//     ui.update(1.0 / 60.0, &events);
//     let game_dt = (1.0 / 60.0) * ui.time_scale();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the panel model, navigation and the coordinator.
// `prelude` re-exports what a typical host needs.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` only adds `From` conversions from winit event types into
// `InputEvent`; there is nothing to name from outside.
//
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::{CoordinatorBuilder, UiCoordinator};

//=========================================================================
// Core Systems
//
// Everything the panel UI needs, independent of any windowing backend.
//
// Layout:
// - `panel`:       PanelView hooks, Panel state machine, PanelConfig
// - `animation`:   easing, open/close transitions, TransitionDriver
// - `navigation`:  PanelRegistry, NavigationStack, RequestQueue
// - `coordinator`: UiCoordinator, pause coupling, UiEvent fan-out
// - `input`:       InputEvent and the per-frame StateTracker
// - `config`:      UiConfig loading (TOML / RON)
//
// Frame flow:
//   host input ──> UiCoordinator::update(dt, events)
//                    ├─ StateTracker        (back key, escape, clicks)
//                    ├─ TransitionDriver    (Panel::advance)
//                    ├─ RequestQueue        (hook requests)
//                    └─ EventHub::flush     (subscribers)
//
//=========================================================================

//=== Module Declarations =================================================

pub mod animation;
pub mod config;
pub mod coordinator;
pub mod input;
pub mod navigation;
pub mod panel;

//=== Public Exports ======================================================

pub use config::{ConfigError, UiConfig};
pub use coordinator::{CoordinatorBuilder, UiCoordinator, UiEvent};

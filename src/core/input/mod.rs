//=========================================================================
// Input
//=========================================================================
//
// Raw input types and the per-frame state tracker the coordinator polls
// for navigation keys and clicks.
//
// Architecture:
//   host events → StateTracker::process_events() → UiCoordinator queries
//
//=========================================================================

//=== Module Declarations =================================================

mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, MouseButton};
pub use state_tracker::StateTracker;

//=========================================================================
// Navigation
//=========================================================================
//
// Registry of panels, the stack of open ones, and the queue of deferred
// requests panels make about themselves.
//
// Architecture:
//   PanelRegistry:   HashMap<PanelId, Panel>
//   NavigationStack: Vec<PanelId> + current
//   RequestQueue:    Vec<PanelRequest> (drained at tick boundary)
//
//=========================================================================

//=== Module Declarations =================================================

mod registry;
mod request_queue;
mod stack;

//=== Public API ==========================================================

pub use registry::PanelRegistry;
pub use request_queue::{PanelCommands, PanelRequest, RequestQueue};
pub use stack::{NavigationStack, ReopenPolicy};

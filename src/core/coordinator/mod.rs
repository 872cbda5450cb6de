//=========================================================================
// Coordinator
//=========================================================================
//
// The panel UI facade: navigation, pause coupling and event fan-out.
//
// Architecture:
//   CoordinatorBuilder ──build()──> UiCoordinator
//                                     ├─ PanelRegistry / NavigationStack
//                                     ├─ TransitionDriver
//                                     ├─ PauseController
//                                     └─ EventHub ──► Receiver<UiEvent>
//
//=========================================================================

//=== Module Declarations =================================================

mod builder;
mod events;
mod pause;
mod ui_coordinator;

//=== Public API ==========================================================

pub use builder::CoordinatorBuilder;
pub use events::{EventHub, UiEvent};
pub use pause::{PauseController, PauseSource};
pub use ui_coordinator::UiCoordinator;

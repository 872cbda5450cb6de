//=========================================================================
// Animation
//=========================================================================
//
// Open/close transition math and the per-frame driver that steps it.
//
// Architecture:
//   TransitionDriver
//     └─ active: Vec<PanelId> ──► Panel::advance(dt) ──► Transition
//                                                          └─ EaseType
//
//=========================================================================

//=== Module Declarations =================================================

mod driver;
mod easing;
mod transition;

//=== Public API ==========================================================

pub use driver::TransitionDriver;
pub use easing::EaseType;
pub use transition::{
    Transition, TransitionKind, TransitionStep, VisualFrame, OPEN_START_SCALE,
};

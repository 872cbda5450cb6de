//=========================================================================
// Panel Types
//=========================================================================
//
// Classification, visibility state and screen bounds.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== PanelType ===========================================================

/// Declared kind of a panel.
///
/// Classification only: the state machine treats every kind the same.
/// Consumers decide what a `Modal` or `Hud` means for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PanelType {
    #[default]
    Overlay,
    Modal,
    Popup,
    Hud,
    Menu,
}

//=== PanelState ==========================================================

/// Visibility state of a panel.
///
/// ```text
/// Closed ──open()──► Opening ──done──► Open
///   ▲                                   │
///   └──────done──── Closing ◄──close()──┘
/// ```
///
/// With animation disabled `open()`/`close()` jump straight to the
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl PanelState {
    /// `Opening` or `Closing`.
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }

    /// Anything but `Closed`.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

//=== Rect ================================================================

/// Axis-aligned screen rectangle (pixels, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Edges are inside.
    pub fn contains(&self, (px, py): (f32, f32)) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

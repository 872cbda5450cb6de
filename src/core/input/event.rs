//=========================================================================
// Input Event Types
//
// Engine-side representation of the raw input the panel layer cares
// about: keys for back/escape navigation and mouse buttons plus cursor
// position for outside-click dismissal.
//
// Event Flow:
// ```text
// Host / Platform (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (per-frame pressed/released)
//         ↓
//    UiCoordinator (back key, escape, outside click)
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons and anything the platform
/// layer does not name explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Serializable so the back key can be chosen in configuration files
/// (`back_key = "Escape"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys the platform layer does not map.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event handed to the coordinator once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Mouse button pressed.
    MouseButtonDown { button: MouseButton },

    /// Mouse button released.
    MouseButtonUp { button: MouseButton },

    /// Cursor moved, screen space (pixels, top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Anything else. Ignored.
    Unidentified,
}

impl InputEvent {
    /// Shorthand for a key press.
    pub fn key_down(key: KeyCode) -> Self {
        Self::KeyDown { key }
    }

    /// Shorthand for a key release.
    pub fn key_up(key: KeyCode) -> Self {
        Self::KeyUp { key }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Winit Event Mapper
//
// Converts winit window events into the panel layer's `InputEvent`s so a
// winit host can feed `UiCoordinator::update` directly.
//
// Responsibilities:
// - Translate keyboard and mouse events
// - Drop OS key repeat (a held back key must not close panel after panel)
// - Provide fallbacks (`Unidentified`) for unmapped inputs
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, MouseButton};

//=== Key Conversion ======================================================

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Numeric keys -----------------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Alphabetic keys --------------------------------------------------
            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrow keys -------------------------------------------------------
            ArrowDown => KeyCode::ArrowDown, ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight, ArrowUp => KeyCode::ArrowUp,

            //--- Navigation keys --------------------------------------------------
            Escape => KeyCode::Escape,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,
            Enter | NumpadEnter => KeyCode::Enter,
            Space => KeyCode::Space,
            Tab => KeyCode::Tab,

            //--- Fallback ---------------------------------------------------------
            _ => KeyCode::Unidentified,
        }
    }
}

//=== Mouse Conversion ====================================================

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=== Full Event Conversion ===============================================
//
// Unsupported events become `InputEvent::Unidentified`, which the
// state tracker ignores.
//
// Notes:
// - `KeyboardInput` is translated into `KeyDown`/`KeyUp`.
// - `MouseInput` becomes `MouseButtonDown`/`MouseButtonUp`.
// - `CursorMoved` maps to `MouseMoved`.
//

impl From<&WindowEvent> for InputEvent {
    fn from(win_event: &WindowEvent) -> Self {
        match win_event {
            //--- Keyboard Input ------------------------------------------
            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key, state, repeat, .. },
                ..
            } => {
                if *repeat {
                    return InputEvent::Unidentified;
                }

                let key = match physical_key {
                    PhysicalKey::Code(code) => KeyCode::from(*code),
                    _ => KeyCode::Unidentified,
                };

                match state {
                    ElementState::Pressed => InputEvent::KeyDown { key },
                    ElementState::Released => InputEvent::KeyUp { key },
                }
            }

            //--- Mouse Button Input --------------------------------------
            WindowEvent::MouseInput { state, button, .. } => {
                let button = MouseButton::from(*button);
                match state {
                    ElementState::Pressed => InputEvent::MouseButtonDown { button },
                    ElementState::Released => InputEvent::MouseButtonUp { button },
                }
            }

            //--- Mouse Movement ------------------------------------------
            WindowEvent::CursorMoved { position, .. } => InputEvent::MouseMoved {
                x: position.x as f32,
                y: position.y as f32,
            },

            //--- Unhandled Events ----------------------------------------
            _ => InputEvent::Unidentified,
        }
    }
}

impl From<WindowEvent> for InputEvent {
    fn from(win_event: WindowEvent) -> Self {
        InputEvent::from(&win_event)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

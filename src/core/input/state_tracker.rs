//=========================================================================
// State Tracker
//=========================================================================
//
// Input state with per-frame delta tracking, sized for UI navigation.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys/buttons held) → query
//
// Frame lifecycle: begin_frame() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== StateTracker ========================================================

/// Tracks held keys/buttons plus what changed during the current frame.
///
/// Clicks are recorded with the cursor position at the moment the button
/// went down, so a click and a cursor move in the same batch resolve in
/// event order.
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),

    //--- Frame Deltas (reset each frame via begin_frame()) ---------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    keys_released_this_frame: HashSet<KeyCode>,
    clicks_this_frame: Vec<(MouseButton, (f32, f32))>,
}

impl StateTracker {
    /// Creates a tracker with nothing held.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            keys_pressed_this_frame: HashSet::new(),
            keys_released_this_frame: HashSet::new(),
            clicks_this_frame: Vec::new(),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Drops last frame's deltas. Held state is kept.
    pub fn begin_frame(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
        self.clicks_this_frame.clear();
    }

    /// Applies a batch of events in order.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => {
                // Held keys re-reported by the OS do not count as a new press
                if self.keys_down.insert(key) {
                    self.keys_pressed_this_frame.insert(key);
                }
            }

            InputEvent::KeyUp { key } => {
                if self.keys_down.remove(&key) {
                    self.keys_released_this_frame.insert(key);
                }
            }

            InputEvent::MouseButtonDown { button } => {
                if self.mouse_buttons_down.insert(button) {
                    self.clicks_this_frame.push((button, self.mouse_position));
                }
            }

            InputEvent::MouseButtonUp { button } => {
                self.mouse_buttons_down.remove(&button);
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (x, y);
            }

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` if the key went UP → DOWN this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if the key went DOWN → UP this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    /// Returns `true` while the mouse button is held.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Positions of every press of `button` during this frame.
    pub fn clicks(&self, button: MouseButton) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.clicks_this_frame
            .iter()
            .filter(move |(b, _)| *b == button)
            .map(|(_, pos)| *pos)
    }

    /// Last known cursor position.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

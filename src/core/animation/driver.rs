//=========================================================================
// Transition Driver
//=========================================================================
//
// Flat list of panels with an in-flight transition.
//
// The coordinator steps every entry once per update instead of each
// panel scheduling its own per-frame continuation:
//
//   update(dt) → driver.step(|id| panel.advance(dt)) → finished ids dropped
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::panel::PanelId;

//=== TransitionDriver ====================================================

/// Ids of panels currently animating, in the order they started.
#[derive(Debug, Default)]
pub struct TransitionDriver {
    active: Vec<PanelId>,
}

impl TransitionDriver {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Starts tracking a panel. Already tracked ids are ignored.
    pub fn track(&mut self, id: &PanelId) {
        if !self.active.contains(id) {
            self.active.push(id.clone());
        }
    }

    /// Steps every tracked panel once.
    ///
    /// `step` returns `true` while the panel is still animating; entries
    /// that return `false` are dropped.
    pub fn step<F>(&mut self, mut step: F)
    where
        F: FnMut(&PanelId) -> bool,
    {
        self.active.retain(|id| step(id));
    }

    pub fn is_tracking(&self, id: &PanelId) -> bool {
        self.active.contains(id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

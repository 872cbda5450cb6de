//=========================================================================
// Navigation Stack
//=========================================================================
//
// Open panels in open order, plus the "current" (focal) panel.
//
// Invariants:
// - an id appears at most once
// - `current` is `None` or an element of the stack
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::panel::PanelId;

//=== ReopenPolicy ========================================================

/// What happens when a panel that is already stacked is opened again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReopenPolicy {
    /// Move the panel to the top so back navigation follows open order.
    #[default]
    MoveToTop,

    /// Leave stack order alone and only point `current` at the panel.
    /// Back navigation then pops in the original push order.
    Retarget,
}

//=== NavigationStack =====================================================

/// Ordered record of open panels, most recent on top.
#[derive(Debug, Default)]
pub struct NavigationStack {
    entries: Vec<PanelId>,
    current: Option<PanelId>,
    reopen_policy: ReopenPolicy,
}

impl NavigationStack {
    pub fn new(reopen_policy: ReopenPolicy) -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            reopen_policy,
        }
    }

    //--- Mutation ---------------------------------------------------------

    /// Makes `id` current, pushing it if absent.
    ///
    /// Already stacked ids follow the [`ReopenPolicy`].
    pub fn make_current(&mut self, id: &PanelId) {
        match self.position(id) {
            None => {
                debug!("Pushing panel {} onto navigation stack", id);
                self.entries.push(id.clone());
            }
            Some(pos) => match self.reopen_policy {
                ReopenPolicy::MoveToTop => {
                    debug!("Moving stacked panel {} to the top", id);
                    let entry = self.entries.remove(pos);
                    self.entries.push(entry);
                }
                ReopenPolicy::Retarget => {
                    debug!("Retargeting current to stacked panel {}", id);
                }
            },
        }
        self.current = Some(id.clone());
    }

    /// Pushes `id` on top if absent. Returns `false` for duplicates.
    ///
    /// `current` follows the new top.
    pub fn push(&mut self, id: &PanelId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.entries.push(id.clone());
        self.current = Some(id.clone());
        true
    }

    /// Pops the top entry.
    ///
    /// If it was current, the new top (or nothing) becomes current.
    pub fn pop(&mut self) -> Option<PanelId> {
        let top = self.entries.pop()?;
        if self.current.as_ref() == Some(&top) {
            self.current = self.entries.last().cloned();
        }
        Some(top)
    }

    /// Removes `id` from anywhere in the stack, keeping the relative
    /// order of the rest. Returns `false` if it was not stacked.
    pub fn remove(&mut self, id: &PanelId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.entries.remove(pos);
        if self.current.as_ref() == Some(id) {
            self.current = self.entries.last().cloned();
        }
        true
    }

    /// Empties the stack and clears `current`, returning the entries
    /// bottom to top.
    pub fn clear(&mut self) -> Vec<PanelId> {
        self.current = None;
        std::mem::take(&mut self.entries)
    }

    pub fn set_reopen_policy(&mut self, policy: ReopenPolicy) {
        self.reopen_policy = policy;
    }

    //--- Queries ----------------------------------------------------------

    pub fn current(&self) -> Option<&PanelId> {
        self.current.as_ref()
    }

    pub fn top(&self) -> Option<&PanelId> {
        self.entries.last()
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.entries.contains(id)
    }

    /// Bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PanelId> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[PanelId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reopen_policy(&self) -> ReopenPolicy {
        self.reopen_policy
    }

    fn position(&self, id: &PanelId) -> Option<usize> {
        self.entries.iter().position(|entry| entry == id)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Panel Registry
//=========================================================================
//
// Mapping from panel id to panel. First registration wins.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::panel::{Panel, PanelId, PanelView};

//=== PanelRegistry =======================================================

/// Owns every registered panel, keyed by id.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    panels: HashMap<PanelId, Panel>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self {
            panels: HashMap::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Stores the panel under its id.
    ///
    /// Returns `false` and drops `panel` if the id is already taken.
    pub fn register(&mut self, panel: Panel) -> bool {
        if self.panels.contains_key(panel.id()) {
            warn!("Panel {} is already registered, keeping the first", panel.id());
            return false;
        }

        debug!("Registered panel {}", panel.id());
        self.panels.insert(panel.id().clone(), panel);
        true
    }

    /// Removes and hands back the panel. Unknown ids are a no-op.
    pub fn unregister(&mut self, id: &PanelId) -> Option<Panel> {
        let removed = self.panels.remove(id);
        if removed.is_none() {
            debug!("Unregister of unknown panel {}", id);
        }
        removed
    }

    //--- Lookup -----------------------------------------------------------

    pub fn get(&self, id: &PanelId) -> Option<&Panel> {
        self.panels.get(id)
    }

    pub fn get_mut(&mut self, id: &PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(id)
    }

    /// Looks up the panel's view as `T`. `None` if missing or another type.
    pub fn get_as<T: PanelView>(&self, id: &PanelId) -> Option<&T> {
        self.panels.get(id).and_then(Panel::view_as::<T>)
    }

    pub fn get_as_mut<T: PanelView>(&mut self, id: &PanelId) -> Option<&mut T> {
        self.panels.get_mut(id).and_then(Panel::view_as_mut::<T>)
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.panels.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &PanelId> {
        self.panels.keys()
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Panel Identity
//=========================================================================

//=== External Dependencies ===============================================

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

//=== PanelId =============================================================

/// Stable string key identifying a panel within one coordinator.
///
/// Defaults to the view's display name unless set explicitly with
/// [`Panel::with_id`](super::Panel::with_id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&PanelId> for PanelId {
    fn from(id: &PanelId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for PanelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

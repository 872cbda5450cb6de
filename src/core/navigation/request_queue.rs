//=========================================================================
// Request Queue
//=========================================================================
//
// Deferred open/close/toggle requests.
//
// Panel hooks and external code queue requests here. The coordinator
// drains the queue at the tick boundary, after transitions have advanced,
// so a hook never re-enters the operation that invoked it.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::panel::PanelId;

//=== PanelRequest ========================================================

/// A navigation directive for one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRequest {
    Open(PanelId),
    Close(PanelId),
    Toggle(PanelId),
}

impl PanelRequest {
    pub fn id(&self) -> &PanelId {
        match self {
            Self::Open(id) | Self::Close(id) | Self::Toggle(id) => id,
        }
    }
}

//=== RequestQueue ========================================================

/// FIFO of pending panel requests.
#[derive(Debug, Default)]
pub struct RequestQueue {
    queue: Vec<PanelRequest>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a request for the next tick boundary.
    pub fn push(&mut self, request: PanelRequest) {
        self.queue.push(request);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelRequest> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Drains all requests in FIFO order.
    pub fn drain(&mut self) -> impl Iterator<Item = PanelRequest> + '_ {
        self.queue.drain(..)
    }

    /// Takes all requests, leaving the queue empty.
    pub fn take(&mut self) -> Vec<PanelRequest> {
        std::mem::take(&mut self.queue)
    }
}

//=== PanelCommands =======================================================

/// Handle given to [`PanelView`](crate::core::panel::PanelView) hooks.
///
/// Scoped to one panel: it can request transitions on that panel and
/// nothing else.
pub struct PanelCommands<'a> {
    id: &'a PanelId,
    queue: &'a mut RequestQueue,
}

impl<'a> PanelCommands<'a> {
    pub(crate) fn new(id: &'a PanelId, queue: &'a mut RequestQueue) -> Self {
        Self { id, queue }
    }

    /// Id of the panel these commands act on.
    pub fn id(&self) -> &PanelId {
        self.id
    }

    pub fn request_open(&mut self) {
        self.queue.push(PanelRequest::Open(self.id.clone()));
    }

    pub fn request_close(&mut self) {
        self.queue.push(PanelRequest::Close(self.id.clone()));
    }

    pub fn request_toggle(&mut self) {
        self.queue.push(PanelRequest::Toggle(self.id.clone()));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

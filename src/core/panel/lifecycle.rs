//=========================================================================
// Panel
//=========================================================================
//
// A single screen/overlay unit and its open/close state machine.
//
// Transitions (guards reject everything else silently):
//   Closed  ──open()──►  Opening ──advance() done──► Open
//   Open    ──close()──► Closing ──advance() done──► Closed
//
// Animation disabled: Closed → Open and Open → Closed in one call, still
// reporting both the "started" and the "completed" event.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{PanelConfig, PanelId, PanelState, PanelView};
use crate::core::animation::{Transition, TransitionStep, VisualFrame};
use crate::core::coordinator::UiEvent;
use crate::core::navigation::{PanelCommands, RequestQueue};

//=== Constants ===========================================================

/// Transition duration used until a coordinator supplies its own default.
pub const DEFAULT_TRANSITION_DURATION: f32 = 0.3;

//=== Panel ===============================================================

/// Registered UI unit: a consumer view plus the lifecycle around it.
pub struct Panel {
    id: PanelId,
    view: Box<dyn PanelView>,
    config: PanelConfig,
    fallback_duration: f32,

    state: PanelState,
    visual: VisualFrame,
    interactable: bool,
    active: bool,

    transition: Option<Transition>,
}

impl Panel {
    //--- Construction -----------------------------------------------------

    /// Wraps a view. The id defaults to the view's display name.
    pub fn new<V: PanelView>(view: V) -> Self {
        Self::from_boxed(Box::new(view))
    }

    pub fn from_boxed(view: Box<dyn PanelView>) -> Self {
        Self {
            id: PanelId::new(view.name()),
            view,
            config: PanelConfig::default(),
            fallback_duration: DEFAULT_TRANSITION_DURATION,
            state: PanelState::Closed,
            visual: VisualFrame::HIDDEN,
            interactable: false,
            active: false,
            transition: None,
        }
    }

    /// Overrides the identity derived from the view name.
    pub fn with_id(mut self, id: impl Into<PanelId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_config(mut self, config: PanelConfig) -> Self {
        self.config = config;
        self
    }

    //--- Accessors --------------------------------------------------------

    pub fn id(&self) -> &PanelId {
        &self.id
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Current opacity in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.visual.alpha
    }

    pub fn scale(&self) -> f32 {
        self.visual.scale
    }

    /// Whether the panel accepts input. Only `true` while `Open`.
    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    /// Whether the panel is part of the visible set.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn view(&self) -> &dyn PanelView {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> &mut dyn PanelView {
        self.view.as_mut()
    }

    /// The view as its concrete type, `None` on mismatch.
    pub fn view_as<T: PanelView>(&self) -> Option<&T> {
        super::AsAny::as_any(self.view.as_ref()).downcast_ref::<T>()
    }

    pub fn view_as_mut<T: PanelView>(&mut self) -> Option<&mut T> {
        super::AsAny::as_any_mut(self.view.as_mut()).downcast_mut::<T>()
    }

    fn open_duration(&self) -> f32 {
        self.config.open_duration.unwrap_or(self.fallback_duration)
    }

    fn close_duration(&self) -> f32 {
        self.config.close_duration.unwrap_or(self.fallback_duration)
    }

    //--- Coordinator Hooks ------------------------------------------------

    pub(crate) fn set_fallback_duration(&mut self, seconds: f32) {
        self.fallback_duration = seconds;
    }

    pub(crate) fn initialize(&mut self, requests: &mut RequestQueue) {
        self.view.on_initialize(&mut PanelCommands::new(&self.id, requests));
    }

    //--- State Machine ----------------------------------------------------

    /// Starts opening. Returns `false` (and does nothing) unless `Closed`.
    pub(crate) fn open(&mut self, requests: &mut RequestQueue, events: &mut Vec<UiEvent>) -> bool {
        if self.state != PanelState::Closed {
            debug!("Panel {} ignored open while {:?}", self.id, self.state);
            return false;
        }

        let duration = self.open_duration();
        self.active = true;
        self.interactable = false;

        if self.config.animation_enabled && duration > 0.0 {
            let transition = Transition::open(duration, self.config.open_easing);
            self.visual = transition.start_frame();
            self.transition = Some(transition);
            self.state = PanelState::Opening;
            events.push(UiEvent::OpenStarted(self.id.clone()));
            self.view.on_open(&mut PanelCommands::new(&self.id, requests));
        } else {
            self.state = PanelState::Opening;
            events.push(UiEvent::OpenStarted(self.id.clone()));
            self.view.on_open(&mut PanelCommands::new(&self.id, requests));
            self.finish_open(events);
        }

        true
    }

    /// Starts closing. Returns `false` (and does nothing) unless `Open`.
    pub(crate) fn close(&mut self, requests: &mut RequestQueue, events: &mut Vec<UiEvent>) -> bool {
        if self.state != PanelState::Open {
            debug!("Panel {} ignored close while {:?}", self.id, self.state);
            return false;
        }

        let duration = self.close_duration();
        self.interactable = false;
        self.state = PanelState::Closing;

        if self.config.animation_enabled && duration > 0.0 {
            let transition = Transition::close(duration, self.config.close_easing);
            self.visual = transition.start_frame();
            self.transition = Some(transition);
            events.push(UiEvent::CloseStarted(self.id.clone()));
            self.view.on_close(&mut PanelCommands::new(&self.id, requests));
        } else {
            events.push(UiEvent::CloseStarted(self.id.clone()));
            self.view.on_close(&mut PanelCommands::new(&self.id, requests));
            self.finish_close(events);
        }

        true
    }

    /// Steps the in-flight transition by `dt` unscaled seconds.
    ///
    /// Returns `true` while still animating.
    pub(crate) fn advance(&mut self, dt: f32, events: &mut Vec<UiEvent>) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };

        match transition.advance(dt) {
            TransitionStep::Running(frame) => {
                self.visual = frame;
                true
            }
            TransitionStep::Finished(frame) => {
                self.visual = frame;
                match self.state {
                    PanelState::Opening => self.finish_open(events),
                    PanelState::Closing => self.finish_close(events),
                    _ => self.transition = None,
                }
                false
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn finish_open(&mut self, events: &mut Vec<UiEvent>) {
        self.transition = None;
        self.visual = VisualFrame::SHOWN;
        self.interactable = true;
        self.state = PanelState::Open;
        events.push(UiEvent::Opened(self.id.clone()));
    }

    fn finish_close(&mut self, events: &mut Vec<UiEvent>) {
        self.transition = None;
        self.visual = VisualFrame::HIDDEN;
        self.interactable = false;
        self.active = false;
        self.state = PanelState::Closed;
        events.push(UiEvent::Closed(self.id.clone()));
    }
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("id", &self.id)
            .field("kind", &self.config.kind)
            .field("state", &self.state)
            .field("alpha", &self.visual.alpha)
            .field("scale", &self.visual.scale)
            .field("interactable", &self.interactable)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

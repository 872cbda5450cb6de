//=========================================================================
// UI Coordinator
//=========================================================================
//
// Orchestrates panel open/close requests.
//
// Responsibilities:
// - Own the registry, the navigation stack and the transition driver
// - Apply the exclusivity policy (single vs multiple open panels)
// - Derive "UI active" from the stack and couple it to game pause
// - Poll navigation input (back key, escape, outside click) once per frame
// - Publish lifecycle events after each operation settles
//
// Frame flow:
//   update(dt, events)
//     1. input      → back key / escape / outside click
//     2. animation  → TransitionDriver steps every in-flight panel
//     3. requests   → drain the RequestQueue filled by panel hooks
//     4. events     → flush to subscribers
//
// Invalid operations (unknown ids, guarded transitions) are silent
// no-ops reported at `debug!` level.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use crossbeam_channel::Receiver;
use log::debug;

//=== Internal Dependencies ===============================================

use super::{EventHub, PauseController, PauseSource, UiEvent};
use crate::core::animation::TransitionDriver;
use crate::core::config::UiConfig;
use crate::core::input::{InputEvent, KeyCode, MouseButton, StateTracker};
use crate::core::navigation::{
    NavigationStack, PanelRegistry, PanelRequest, RequestQueue, ReopenPolicy,
};
use crate::core::panel::{Panel, PanelId, PanelState, PanelView};

//=== Settle ==============================================================

/// Directive applied once a panel's current transition finishes.
///
/// Panels ignore directives mid-transition. When the stack changes under
/// a transitioning panel, the coordinator remembers the intent here and
/// brings the panel in line with the stack when it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settle {
    /// Removed from the stack while opening.
    Close,

    /// Put back on the stack while closing.
    Reopen,
}

//=== UiCoordinator =======================================================

/// Navigation and lifecycle engine for a fixed set of named panels.
///
/// Build with [`CoordinatorBuilder`](super::CoordinatorBuilder), register
/// panels, then call [`update`](Self::update) once per frame.
///
/// ```
/// use aetheric_panels::prelude::*;
///
/// struct Inventory;
/// impl PanelView for Inventory {
///     fn name(&self) -> &str { "Inventory" }
/// }
///
/// let mut ui = CoordinatorBuilder::new().build();
/// ui.register(Panel::new(Inventory));
///
/// ui.open("Inventory");
/// assert!(ui.is_ui_active());
/// assert_eq!(ui.time_scale(), 0.0);
///
/// ui.update(1.0, &[InputEvent::key_down(KeyCode::Escape)]);
/// assert!(!ui.is_ui_active());
/// assert_eq!(ui.time_scale(), 1.0);
/// ```
pub struct UiCoordinator {
    config: UiConfig,

    registry: PanelRegistry,
    stack: NavigationStack,
    driver: TransitionDriver,
    requests: RequestQueue,
    pending: HashMap<PanelId, Settle>,

    input: StateTracker,
    pause: PauseController,
    events: EventHub,

    ui_active: bool,
}

impl UiCoordinator {
    //--- Construction -----------------------------------------------------

    /// Coordinator with default settings.
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    pub(crate) fn with_config(config: UiConfig) -> Self {
        Self {
            registry: PanelRegistry::new(),
            stack: NavigationStack::new(config.reopen_policy),
            driver: TransitionDriver::new(),
            requests: RequestQueue::new(),
            pending: HashMap::new(),
            input: StateTracker::new(),
            pause: PauseController::new(config.base_time_scale),
            events: EventHub::new(),
            ui_active: false,
            config,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a panel and runs its `on_initialize` hook.
    ///
    /// Config overrides from [`UiConfig::panels`] replace the panel's own
    /// config. Returns `false` if the id is taken; the first panel stays.
    pub fn register(&mut self, mut panel: Panel) -> bool {
        if let Some(config) = self.config.panels.get(panel.id()) {
            panel = panel.with_config(config.clone());
        }
        panel.set_fallback_duration(self.config.default_transition_duration);

        let id = panel.id().clone();
        if !self.registry.register(panel) {
            return false;
        }

        if let Some(panel) = self.registry.get_mut(&id) {
            // Unregistered mid-transition: resume stepping it
            if panel.is_animating() {
                self.driver.track(&id);
            }
            panel.initialize(&mut self.requests);
        }
        true
    }

    /// Wraps `view` in a [`Panel`] with default config and registers it.
    pub fn register_view<V: PanelView>(&mut self, view: V) -> bool {
        self.register(Panel::new(view))
    }

    /// Removes a panel from the registry and hands it back.
    ///
    /// Neither closes the panel nor touches the navigation stack. An
    /// in-flight transition is frozen and resumes if the panel is
    /// registered again.
    pub fn unregister(&mut self, id: impl Into<PanelId>) -> Option<Panel> {
        let id = id.into();
        self.pending.remove(&id);
        self.registry.unregister(&id)
    }

    //--- Lookup -----------------------------------------------------------

    pub fn panel(&self, id: impl Into<PanelId>) -> Option<&Panel> {
        self.registry.get(&id.into())
    }

    pub fn panel_mut(&mut self, id: impl Into<PanelId>) -> Option<&mut Panel> {
        self.registry.get_mut(&id.into())
    }

    /// The panel's view as `T`. `None` if unknown or of another type.
    pub fn panel_as<T: PanelView>(&self, id: impl Into<PanelId>) -> Option<&T> {
        self.registry.get_as::<T>(&id.into())
    }

    pub fn panel_as_mut<T: PanelView>(&mut self, id: impl Into<PanelId>) -> Option<&mut T> {
        self.registry.get_as_mut::<T>(&id.into())
    }

    pub fn panel_state(&self, id: impl Into<PanelId>) -> Option<PanelState> {
        self.registry.get(&id.into()).map(Panel::state)
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    //--- Navigation -------------------------------------------------------

    /// Opens a panel by id. See [`open_panel`](Self::open_panel).
    pub fn open(&mut self, id: impl Into<PanelId>) -> bool {
        self.open_panel(id)
    }

    /// Closes a panel by id and drops it from the stack.
    pub fn close(&mut self, id: impl Into<PanelId>) -> bool {
        self.close_panel(id, true)
    }

    /// Makes the panel current and starts its open transition.
    ///
    /// With multiple panels disallowed, the previous current panel is
    /// closed and dropped from the stack first. Returns `true` if the
    /// panel accepted the open directive. Re-opening an already visible
    /// panel only refocuses it.
    pub fn open_panel(&mut self, id: impl Into<PanelId>) -> bool {
        let id = id.into();
        let Some(state) = self.registry.get(&id).map(Panel::state) else {
            debug!("Open of unregistered panel {}", id);
            return false;
        };

        //--- 1. Exclusivity ---------------------------------------------
        if !self.config.allow_multiple_panels {
            if let Some(previous) = self.stack.current().cloned() {
                if previous != id {
                    self.close_internal(&previous);
                    self.stack.remove(&previous);
                    self.defer_if_opening(&previous);
                }
            }
        }

        //--- 2. Stack bookkeeping ---------------------------------------
        self.stack.make_current(&id);

        //--- 3. Transition ----------------------------------------------
        let accepted = match state {
            PanelState::Closed => self.open_internal(&id),
            PanelState::Closing => {
                debug!("Panel {} is closing, reopening once it settles", id);
                self.pending.insert(id, Settle::Reopen);
                false
            }
            PanelState::Open | PanelState::Opening => {
                self.pending.remove(&id);
                false
            }
        };

        //--- 4. UI-active coupling --------------------------------------
        self.sync_ui_active();
        self.events.flush();
        accepted
    }

    /// Starts the panel's close transition.
    ///
    /// With `remove_from_stack` the panel is also removed from the
    /// stack, wherever it sits. Returns `true` if the panel accepted the
    /// close directive.
    pub fn close_panel(&mut self, id: impl Into<PanelId>, remove_from_stack: bool) -> bool {
        let id = id.into();
        if !self.registry.contains(&id) {
            debug!("Close of unregistered panel {}", id);
        }

        let accepted = self.close_internal(&id);
        if remove_from_stack {
            self.stack.remove(&id);
        }
        self.defer_if_opening(&id);

        self.sync_ui_active();
        self.events.flush();
        accepted
    }

    /// Pops the top panel and closes it. The global back action.
    pub fn close_top_panel(&mut self) -> bool {
        let Some(top) = self.stack.pop() else {
            return false;
        };

        let accepted = self.close_internal(&top);
        self.defer_if_opening(&top);

        self.sync_ui_active();
        self.events.flush();
        accepted
    }

    /// Closes every stacked panel, top first, and empties the stack.
    pub fn close_all_panels(&mut self) {
        let stacked = self.stack.clear();
        for id in stacked.iter().rev() {
            self.close_internal(id);
            self.defer_if_opening(id);
        }

        self.events.push(UiEvent::AllPanelsClosed);
        self.sync_ui_active();
        self.events.flush();
    }

    /// Closes the panel if it is open or on its way there, else opens it.
    pub fn toggle(&mut self, id: impl Into<PanelId>) -> bool {
        let id = id.into();
        let Some(state) = self.panel_state(&id) else {
            debug!("Toggle of unregistered panel {}", id);
            return false;
        };

        let showing = match state {
            PanelState::Open => true,
            PanelState::Opening => self.stack.contains(&id),
            PanelState::Closing => self.stack.contains(&id),
            PanelState::Closed => false,
        };

        if showing {
            self.close_panel(id, true)
        } else {
            self.open_panel(id)
        }
    }

    /// Queues a request for the next [`update`](Self::update).
    pub fn queue_request(&mut self, request: PanelRequest) {
        self.requests.push(request);
    }

    //--- Frame Update -----------------------------------------------------

    /// Advances the UI by one frame.
    ///
    /// `dt` is unscaled time in seconds, so transitions keep running while
    /// the game is paused. `events` is this frame's raw input.
    pub fn update(&mut self, dt: f32, events: &[InputEvent]) {
        self.input.begin_frame();
        self.input.process_events(events);
        self.handle_navigation_input();

        self.advance_transitions(dt);
        self.process_requests();

        self.events.flush();
    }

    //--- Queries ----------------------------------------------------------

    /// Focal panel, if any.
    pub fn current_panel(&self) -> Option<&PanelId> {
        self.stack.current()
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    /// `true` iff the navigation stack is non-empty.
    pub fn is_ui_active(&self) -> bool {
        self.ui_active
    }

    pub fn is_panel_open(&self, id: impl Into<PanelId>) -> bool {
        self.panel_state(id) == Some(PanelState::Open)
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn input(&self) -> &StateTracker {
        &self.input
    }

    /// Receives every event published from now on.
    pub fn subscribe(&mut self) -> Receiver<UiEvent> {
        self.events.subscribe()
    }

    //--- Time-Scale -------------------------------------------------------

    /// Effective game time-scale: 0 while paused, else the base scale.
    pub fn time_scale(&self) -> f32 {
        self.pause.time_scale()
    }

    /// Sets the base time-scale. While paused it applies on unpause.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.pause.set_base_scale(scale);
    }

    /// Pause requests from other systems share the same controller.
    pub fn pause_mut(&mut self) -> &mut PauseController {
        &mut self.pause
    }

    pub fn pause(&self) -> &PauseController {
        &self.pause
    }

    //--- Policy -----------------------------------------------------------

    pub fn set_allow_multiple_panels(&mut self, allow: bool) {
        self.config.allow_multiple_panels = allow;
    }

    /// Changes pause coupling, applying it to the current UI state.
    pub fn set_pause_on_panel(&mut self, pause: bool) {
        self.config.pause_game_on_panel = pause;
        if pause && self.ui_active {
            self.pause.request(PauseSource::Ui);
        } else {
            self.pause.release(PauseSource::Ui);
        }
    }

    pub fn set_reopen_policy(&mut self, policy: ReopenPolicy) {
        self.config.reopen_policy = policy;
        self.stack.set_reopen_policy(policy);
    }

    pub fn set_back_key(&mut self, key: KeyCode) {
        self.config.back_key = key;
    }

    //--- Internal Helpers -------------------------------------------------

    fn open_internal(&mut self, id: &PanelId) -> bool {
        let Some(panel) = self.registry.get_mut(id) else {
            return false;
        };

        let accepted = panel.open(&mut self.requests, self.events.outbox());
        if accepted {
            if panel.is_animating() {
                self.driver.track(id);
            }
            self.events.push(UiEvent::PanelOpened(id.clone()));
        }
        accepted
    }

    fn close_internal(&mut self, id: &PanelId) -> bool {
        let Some(panel) = self.registry.get_mut(id) else {
            return false;
        };

        let accepted = panel.close(&mut self.requests, self.events.outbox());
        if accepted {
            if panel.is_animating() {
                self.driver.track(id);
            }
            self.events.push(UiEvent::PanelClosed(id.clone()));
        }
        accepted
    }

    /// Remembers to close a panel that left the stack mid-open.
    fn defer_if_opening(&mut self, id: &PanelId) {
        let opening = self.panel_state(id) == Some(PanelState::Opening);
        if opening && !self.stack.contains(id) {
            debug!("Panel {} left the stack while opening, closing once it settles", id);
            self.pending.insert(id.clone(), Settle::Close);
        }
    }

    /// Brings a panel whose transition just finished in line with the stack.
    fn settle(&mut self, id: &PanelId) {
        let Some(directive) = self.pending.remove(id) else {
            return;
        };

        match directive {
            Settle::Close if !self.stack.contains(id) => {
                self.close_internal(id);
            }
            Settle::Reopen if self.stack.contains(id) => {
                self.open_internal(id);
            }
            _ => {}
        }
    }

    fn sync_ui_active(&mut self) {
        let active = !self.stack.is_empty();
        if active == self.ui_active {
            return;
        }

        self.ui_active = active;
        if self.config.pause_game_on_panel {
            if active {
                self.pause.request(PauseSource::Ui);
            } else {
                self.pause.release(PauseSource::Ui);
            }
        }

        debug!("UI active changed to {}", active);
        self.events.push(UiEvent::UiActiveChanged(active));
    }

    fn handle_navigation_input(&mut self) {
        let back_key = self.config.back_key;
        if self.ui_active && self.input.is_key_pressed(back_key) {
            self.close_top_panel();
            return;
        }

        let Some(current) = self.stack.current().cloned() else {
            return;
        };
        let Some(panel) = self.registry.get(&current) else {
            return;
        };

        let escape = panel.config().close_on_escape
            && back_key != KeyCode::Escape
            && self.input.is_key_pressed(KeyCode::Escape);

        let outside_click = panel.config().close_on_outside_click
            && panel.view().bounds().is_some_and(|bounds| {
                self.input
                    .clicks(MouseButton::Left)
                    .any(|position| !bounds.contains(position))
            });

        if escape || outside_click {
            self.close_panel(current, true);
        }
    }

    fn advance_transitions(&mut self, dt: f32) {
        let registry = &mut self.registry;
        let outbox = self.events.outbox();
        let mut finished = Vec::new();

        self.driver.step(|id| {
            let Some(panel) = registry.get_mut(id) else {
                return false;
            };
            let running = panel.advance(dt, outbox);
            if !running {
                finished.push(id.clone());
            }
            running
        });

        for id in finished {
            self.settle(&id);
        }
        self.sync_ui_active();
    }

    /// Applies requests queued before this frame. Requests queued while
    /// applying them wait for the next update.
    fn process_requests(&mut self) {
        for request in self.requests.take() {
            match request {
                PanelRequest::Open(id) => {
                    self.open_panel(id);
                }
                PanelRequest::Close(id) => {
                    self.close_panel(id, true);
                }
                PanelRequest::Toggle(id) => {
                    self.toggle(id);
                }
            }
        }
    }
}

impl Default for UiCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::panel::{PanelConfig, Rect};
    use crate::core::navigation::PanelCommands;
    use crate::core::CoordinatorBuilder;
    use approx::assert_abs_diff_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    struct TestView {
        name: &'static str,
        bounds: Option<Rect>,
        initialized: Rc<Cell<u32>>,
        close_on_open: bool,
    }

    impl TestView {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                bounds: None,
                initialized: Rc::new(Cell::new(0)),
                close_on_open: false,
            }
        }
    }

    impl PanelView for TestView {
        fn name(&self) -> &str {
            self.name
        }

        fn bounds(&self) -> Option<Rect> {
            self.bounds
        }

        fn on_initialize(&mut self, _commands: &mut PanelCommands<'_>) {
            self.initialized.set(self.initialized.get() + 1);
        }

        fn on_open(&mut self, commands: &mut PanelCommands<'_>) {
            if self.close_on_open {
                commands.request_close();
            }
        }
    }

    fn animated(name: &'static str) -> Panel {
        Panel::new(TestView::new(name))
    }

    fn immediate(name: &'static str) -> Panel {
        Panel::new(TestView::new(name)).with_config(PanelConfig::immediate())
    }

    /// Inventory + Map, single-panel policy, pause on panel, 0.3 s transitions.
    fn inventory_and_map() -> UiCoordinator {
        let mut ui = CoordinatorBuilder::new().build();
        ui.register(animated("Inventory"));
        ui.register(animated("Map"));
        ui
    }

    fn multi(names: &[&'static str]) -> UiCoordinator {
        let mut ui = CoordinatorBuilder::new().with_allow_multiple_panels(true).build();
        for name in names {
            ui.register(immediate(name));
        }
        ui
    }

    fn settle(ui: &mut UiCoordinator) {
        ui.update(1.0, &[]);
    }

    fn stack_names(ui: &UiCoordinator) -> Vec<String> {
        ui.stack().iter().map(|id| id.to_string()).collect()
    }

    fn assert_invariants(ui: &UiCoordinator) {
        let mut seen = std::collections::HashSet::new();
        for id in ui.stack().iter() {
            assert!(seen.insert(id.clone()), "duplicate {} in stack", id);
        }
        if let Some(current) = ui.current_panel() {
            assert!(ui.stack().contains(current), "current {} not in stack", current);
        }
        assert_eq!(ui.is_ui_active(), !ui.stack().is_empty());
    }

    fn count(events: &[UiEvent], wanted: &UiEvent) -> usize {
        events.iter().filter(|e| *e == wanted).count()
    }

    //=====================================================================
    // Scenarios
    //=====================================================================

    #[test]
    fn inventory_then_map_then_back() {
        let mut ui = inventory_and_map();

        assert!(ui.open("Inventory"));
        assert_eq!(ui.current_panel(), Some(&PanelId::from("Inventory")));
        assert_eq!(stack_names(&ui), vec!["Inventory"]);
        assert!(ui.is_ui_active());
        assert_eq!(ui.time_scale(), 0.0);
        settle(&mut ui);

        assert!(ui.open("Map"));
        assert_eq!(ui.panel_state("Inventory"), Some(PanelState::Closing));
        assert_eq!(ui.current_panel(), Some(&PanelId::from("Map")));
        assert_eq!(stack_names(&ui), vec!["Map"]);
        settle(&mut ui);

        ui.update(0.016, &[InputEvent::key_down(KeyCode::Escape)]);
        assert_eq!(ui.panel_state("Map"), Some(PanelState::Closing));
        assert!(ui.stack().is_empty());
        assert!(!ui.is_ui_active());
        assert_eq!(ui.time_scale(), 1.0);

        settle(&mut ui);
        assert_eq!(ui.panel_state("Map"), Some(PanelState::Closed));
        assert_eq!(ui.panel_state("Inventory"), Some(PanelState::Closed));
        assert_invariants(&ui);
    }

    #[test]
    fn rapid_double_open_yields_one_cycle() {
        let mut ui = inventory_and_map();
        let rx = ui.subscribe();

        assert!(ui.open("Inventory"));
        assert!(!ui.open("Inventory"));
        for _ in 0..5 {
            ui.update(0.1, &[]);
        }

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(count(&events, &UiEvent::OpenStarted("Inventory".into())), 1);
        assert_eq!(count(&events, &UiEvent::Opened("Inventory".into())), 1);
        assert_eq!(count(&events, &UiEvent::PanelOpened("Inventory".into())), 1);

        let panel = ui.panel("Inventory").unwrap();
        assert_eq!(panel.alpha(), 1.0);
        assert_eq!(panel.scale(), 1.0);
        assert!(panel.is_interactable());
    }

    #[test]
    fn open_then_close_round_trip_restores_baseline() {
        let mut ui = inventory_and_map();

        ui.open("Inventory");
        settle(&mut ui);
        ui.close("Inventory");
        settle(&mut ui);

        let panel = ui.panel("Inventory").unwrap();
        assert_eq!(panel.state(), PanelState::Closed);
        assert_eq!(panel.alpha(), 0.0);
        assert_eq!(panel.scale(), 1.0);
        assert!(!panel.is_interactable());
        assert!(!panel.is_active());
    }

    #[test]
    fn transition_interpolates_across_frames() {
        let mut ui = inventory_and_map();
        ui.open("Inventory");

        ui.update(0.15, &[]);
        let panel = ui.panel("Inventory").unwrap();
        assert_eq!(panel.state(), PanelState::Opening);
        assert!(!panel.is_interactable());
        assert!(panel.alpha() > 0.0 && panel.alpha() < 1.0);
        assert!(panel.scale() > 0.8 && panel.scale() < 1.0);

        ui.update(0.15, &[]);
        ui.update(0.01, &[]);
        assert_eq!(ui.panel_state("Inventory"), Some(PanelState::Open));
    }

    //=====================================================================
    // Idempotence & Silent No-ops
    //=====================================================================

    #[test]
    fn close_on_closed_panel_emits_nothing() {
        let mut ui = inventory_and_map();
        let rx = ui.subscribe();

        assert!(!ui.close("Inventory"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn unknown_ids_are_noops() {
        let mut ui = inventory_and_map();
        let rx = ui.subscribe();

        assert!(!ui.open("Missing"));
        assert!(!ui.close("Missing"));
        assert!(!ui.toggle("Missing"));
        assert!(ui.unregister("Missing").is_none());

        assert!(ui.stack().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn duplicate_registration_keeps_first_and_initializes_once() {
        let mut ui = CoordinatorBuilder::new().build();
        let first = TestView::new("Inventory");
        let initialized = first.initialized.clone();

        assert!(ui.register(Panel::new(first)));
        assert!(!ui.register(Panel::new(TestView::new("Inventory"))));

        assert_eq!(initialized.get(), 1);
        assert_eq!(ui.registry().len(), 1);
        assert!(ui.panel_as::<TestView>("Inventory").is_some());
    }

    #[test]
    fn reregistered_panel_finishes_its_transition() {
        let mut ui = inventory_and_map();
        ui.open("Inventory");
        ui.update(0.1, &[]);

        let panel = ui.unregister("Inventory").unwrap();
        ui.update(0.1, &[]);
        assert_eq!(panel.state(), PanelState::Opening);

        assert!(ui.register(panel));
        for _ in 0..3 {
            settle(&mut ui);
        }
        assert_eq!(ui.panel_state("Inventory"), Some(PanelState::Open));

        assert!(ui.close("Inventory"));
        settle(&mut ui);
        assert_eq!(ui.panel_state("Inventory"), Some(PanelState::Closed));
    }

    //=====================================================================
    // Exclusivity & Stack Policy
    //=====================================================================

    #[test]
    fn exclusivity_evicts_panel_still_opening() {
        let mut ui = inventory_and_map();

        ui.open("Inventory");
        ui.open("Map");
        assert_eq!(stack_names(&ui), vec!["Map"]);
        assert_eq!(ui.panel_state("Inventory"), Some(PanelState::Opening));

        settle(&mut ui);
        assert_eq!(ui.panel_state("Inventory"), Some(PanelState::Closing));
        settle(&mut ui);
        assert_eq!(ui.panel_state("Inventory"), Some(PanelState::Closed));
        assert_eq!(ui.panel_state("Map"), Some(PanelState::Open));
        assert_invariants(&ui);
    }

    #[test]
    fn reopening_while_closing_resumes_after_close() {
        let mut ui = inventory_and_map();
        ui.open("Inventory");
        settle(&mut ui);

        ui.close("Inventory");
        assert!(!ui.open("Inventory"));
        assert_eq!(stack_names(&ui), vec!["Inventory"]);
        assert!(ui.is_ui_active());

        settle(&mut ui);
        assert_eq!(ui.panel_state("Inventory"), Some(PanelState::Opening));
        settle(&mut ui);
        assert_eq!(ui.panel_state("Inventory"), Some(PanelState::Open));
    }

    #[test]
    fn multiple_panels_stack_and_back_pops_top() {
        let mut ui = multi(&["A", "B", "C"]);
        ui.open("A");
        ui.open("B");
        ui.open("C");
        assert_eq!(stack_names(&ui), vec!["A", "B", "C"]);

        assert!(ui.close_top_panel());
        assert_eq!(stack_names(&ui), vec!["A", "B"]);
        assert_eq!(ui.current_panel(), Some(&PanelId::from("B")));
        assert_eq!(ui.panel_state("C"), Some(PanelState::Closed));
        assert_invariants(&ui);
    }

    #[test]
    fn reopen_moves_panel_to_top_by_default() {
        let mut ui = multi(&["A", "B", "C"]);
        for name in ["A", "B", "C", "A"] {
            ui.open(name);
        }

        assert_eq!(stack_names(&ui), vec!["B", "C", "A"]);
        assert_eq!(ui.current_panel(), Some(&PanelId::from("A")));
    }

    #[test]
    fn retarget_policy_keeps_stack_order() {
        let mut ui = multi(&["A", "B", "C"]);
        ui.set_reopen_policy(ReopenPolicy::Retarget);
        for name in ["A", "B", "C", "A"] {
            ui.open(name);
        }

        assert_eq!(stack_names(&ui), vec!["A", "B", "C"]);
        assert_eq!(ui.current_panel(), Some(&PanelId::from("A")));

        // Back still pops in push order
        ui.close_top_panel();
        assert_eq!(ui.panel_state("C"), Some(PanelState::Closed));
        assert_eq!(ui.current_panel(), Some(&PanelId::from("A")));
        assert_invariants(&ui);
    }

    #[test]
    fn close_panel_removes_interior_entry() {
        let mut ui = multi(&["A", "B", "C"]);
        for name in ["A", "B", "C"] {
            ui.open(name);
        }

        assert!(ui.close_panel("B", true));
        assert_eq!(stack_names(&ui), vec!["A", "C"]);
        assert_eq!(ui.current_panel(), Some(&PanelId::from("C")));
    }

    #[test]
    fn close_panel_can_leave_stack_untouched() {
        let mut ui = multi(&["A", "B"]);
        ui.open("A");
        ui.open("B");

        assert!(ui.close_panel("A", false));
        assert_eq!(ui.panel_state("A"), Some(PanelState::Closed));
        assert_eq!(stack_names(&ui), vec!["A", "B"]);
    }

    #[test]
    fn close_all_emits_individual_and_aggregate_events() {
        let mut ui = multi(&["A", "B"]);
        ui.open("A");
        ui.open("B");
        let rx = ui.subscribe();

        ui.close_all_panels();

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(count(&events, &UiEvent::PanelClosed("A".into())), 1);
        assert_eq!(count(&events, &UiEvent::PanelClosed("B".into())), 1);
        assert_eq!(count(&events, &UiEvent::AllPanelsClosed), 1);
        assert_eq!(events.last(), Some(&UiEvent::UiActiveChanged(false)));
        assert!(ui.stack().is_empty());
        assert_eq!(ui.current_panel(), None);
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut ui = multi(&["A"]);

        assert!(ui.toggle("A"));
        assert!(ui.is_panel_open("A"));

        assert!(ui.toggle("A"));
        assert_eq!(ui.panel_state("A"), Some(PanelState::Closed));
        assert!(ui.stack().is_empty());
    }

    //=====================================================================
    // Registry / Stack Decoupling
    //=====================================================================

    #[test]
    fn unregister_does_not_pop_stack() {
        let mut ui = multi(&["A", "B"]);
        ui.open("A");
        ui.open("B");

        let panel = ui.unregister("B");
        assert!(panel.is_some());
        assert_eq!(stack_names(&ui), vec!["A", "B"]);

        // Closing the stale entry still cleans the stack up
        assert!(!ui.close("B"));
        assert_eq!(stack_names(&ui), vec!["A"]);
        assert_invariants(&ui);
    }

    //=====================================================================
    // Events & Pause Coupling
    //=====================================================================

    #[test]
    fn notifications_follow_state_changes_in_order() {
        let mut ui = multi(&["A"]);
        let rx = ui.subscribe();

        ui.open("A");
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                UiEvent::OpenStarted("A".into()),
                UiEvent::Opened("A".into()),
                UiEvent::PanelOpened("A".into()),
                UiEvent::UiActiveChanged(true),
            ]
        );
    }

    #[test]
    fn ui_active_changed_only_on_edges() {
        let mut ui = multi(&["A", "B"]);
        let rx = ui.subscribe();

        ui.open("A");
        ui.open("B");
        ui.close("A");
        ui.close("B");

        let toggles: Vec<_> = rx
            .try_iter()
            .filter(|e| matches!(e, UiEvent::UiActiveChanged(_)))
            .collect();
        assert_eq!(
            toggles,
            vec![UiEvent::UiActiveChanged(true), UiEvent::UiActiveChanged(false)]
        );
    }

    #[test]
    fn pause_disabled_leaves_time_scale_alone() {
        let mut ui = CoordinatorBuilder::new().with_pause_on_panel(false).build();
        ui.register(immediate("A"));

        ui.open("A");
        assert_eq!(ui.time_scale(), 1.0);
    }

    #[test]
    fn gameplay_time_scale_change_survives_unpause() {
        let mut ui = multi(&["A"]);
        ui.open("A");

        ui.set_time_scale(0.5);
        assert_eq!(ui.time_scale(), 0.0);

        ui.close("A");
        assert_abs_diff_eq!(ui.time_scale(), 0.5);
    }

    #[test]
    fn other_pause_sources_outlive_ui() {
        let mut ui = multi(&["A"]);
        ui.pause_mut().request(PauseSource::custom(1));

        ui.open("A");
        ui.close("A");
        assert_eq!(ui.time_scale(), 0.0);

        ui.pause_mut().release(PauseSource::custom(1));
        assert_eq!(ui.time_scale(), 1.0);
    }

    #[test]
    fn toggling_pause_coupling_applies_immediately() {
        let mut ui = multi(&["A"]);
        ui.open("A");

        ui.set_pause_on_panel(false);
        assert_eq!(ui.time_scale(), 1.0);

        ui.set_pause_on_panel(true);
        assert_eq!(ui.time_scale(), 0.0);
    }

    //=====================================================================
    // Input
    //=====================================================================

    #[test]
    fn back_key_ignored_when_ui_inactive() {
        let mut ui = multi(&["A"]);
        let rx = ui.subscribe();

        ui.update(0.016, &[InputEvent::key_down(KeyCode::Escape)]);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn held_back_key_closes_one_panel_per_press() {
        let mut ui = multi(&["A", "B"]);
        ui.open("A");
        ui.open("B");

        ui.update(0.016, &[InputEvent::key_down(KeyCode::Escape)]);
        ui.update(0.016, &[InputEvent::key_down(KeyCode::Escape)]);
        assert_eq!(stack_names(&ui), vec!["A"]);

        ui.update(0.016, &[InputEvent::key_up(KeyCode::Escape), InputEvent::key_down(KeyCode::Escape)]);
        assert!(ui.stack().is_empty());
    }

    #[test]
    fn escape_respects_panel_flag_with_custom_back_key() {
        let mut ui = CoordinatorBuilder::new()
            .with_allow_multiple_panels(true)
            .with_back_key(KeyCode::Backspace)
            .build();
        ui.register(immediate("Sticky").with_config(PanelConfig::immediate().with_close_on_escape(false)));
        ui.register(immediate("Dismissable"));

        ui.open("Sticky");
        ui.update(0.016, &[InputEvent::key_down(KeyCode::Escape)]);
        assert!(ui.is_panel_open("Sticky"));

        ui.open("Dismissable");
        ui.update(0.016, &[InputEvent::key_up(KeyCode::Escape), InputEvent::key_down(KeyCode::Escape)]);
        assert_eq!(ui.panel_state("Dismissable"), Some(PanelState::Closed));

        ui.update(0.016, &[InputEvent::key_down(KeyCode::Backspace)]);
        assert_eq!(ui.panel_state("Sticky"), Some(PanelState::Closed));
    }

    #[test]
    fn outside_click_closes_only_outside_bounds() {
        let mut ui = multi(&[]);
        let mut view = TestView::new("Popup");
        view.bounds = Some(Rect::new(100.0, 100.0, 200.0, 100.0));
        ui.register(
            Panel::new(view)
                .with_config(PanelConfig::immediate().with_close_on_outside_click(true)),
        );
        ui.open("Popup");

        ui.update(0.016, &[
            InputEvent::MouseMoved { x: 150.0, y: 150.0 },
            InputEvent::MouseButtonDown { button: MouseButton::Left },
            InputEvent::MouseButtonUp { button: MouseButton::Left },
        ]);
        assert!(ui.is_panel_open("Popup"));

        ui.update(0.016, &[
            InputEvent::MouseMoved { x: 10.0, y: 10.0 },
            InputEvent::MouseButtonDown { button: MouseButton::Left },
        ]);
        assert_eq!(ui.panel_state("Popup"), Some(PanelState::Closed));
    }

    //=====================================================================
    // Hooks, Requests & Config
    //=====================================================================

    #[test]
    fn hook_requests_apply_on_next_update() {
        let mut ui = multi(&[]);
        let mut view = TestView::new("Flash");
        view.close_on_open = true;
        ui.register(Panel::new(view).with_config(PanelConfig::immediate()));

        ui.open("Flash");
        assert!(ui.is_panel_open("Flash"));

        ui.update(0.016, &[]);
        assert_eq!(ui.panel_state("Flash"), Some(PanelState::Closed));
        assert!(ui.stack().is_empty());
    }

    #[test]
    fn queued_external_requests_apply_in_order() {
        let mut ui = multi(&["A", "B"]);
        ui.queue_request(PanelRequest::Open("A".into()));
        ui.queue_request(PanelRequest::Toggle("B".into()));
        ui.queue_request(PanelRequest::Close("A".into()));

        ui.update(0.016, &[]);
        assert_eq!(stack_names(&ui), vec!["B"]);
    }

    #[test]
    fn config_overrides_apply_at_registration() {
        let mut config = UiConfig::default();
        config.panels.insert("Inventory".into(), PanelConfig::immediate());
        let mut ui = CoordinatorBuilder::from_config(config).build();
        ui.register(animated("Inventory"));

        ui.open("Inventory");
        assert!(ui.is_panel_open("Inventory"));
    }

    #[test]
    fn default_duration_reaches_unconfigured_panels() {
        let mut ui = CoordinatorBuilder::new().with_default_transition_duration(2.0).build();
        ui.register(animated("Slow"));

        ui.open("Slow");
        ui.update(1.0, &[]);
        assert_eq!(ui.panel_state("Slow"), Some(PanelState::Opening));
        ui.update(1.0, &[]);
        assert_eq!(ui.panel_state("Slow"), Some(PanelState::Open));
    }

    #[test]
    fn invariants_hold_through_mixed_operations() {
        let mut ui = inventory_and_map();
        ui.register(animated("Settings"));

        let script: [fn(&mut UiCoordinator); 15] = [
            |ui: &mut UiCoordinator| { ui.open("Inventory"); },
            |ui: &mut UiCoordinator| { ui.open("Map"); },
            |ui: &mut UiCoordinator| ui.update(0.1, &[]),
            |ui: &mut UiCoordinator| { ui.toggle("Settings"); },
            |ui: &mut UiCoordinator| { ui.set_allow_multiple_panels(true); },
            |ui: &mut UiCoordinator| { ui.open("Inventory"); },
            |ui: &mut UiCoordinator| ui.update(0.2, &[]),
            |ui: &mut UiCoordinator| { ui.open("Map"); },
            |ui: &mut UiCoordinator| { ui.close_top_panel(); },
            |ui: &mut UiCoordinator| ui.update(0.5, &[]),
            |ui: &mut UiCoordinator| { ui.close_panel("Settings", false); },
            |ui: &mut UiCoordinator| ui.update(0.016, &[InputEvent::key_down(KeyCode::Escape)]),
            |ui: &mut UiCoordinator| ui.close_all_panels(),
            |ui: &mut UiCoordinator| ui.update(1.0, &[]),
            |ui: &mut UiCoordinator| ui.update(1.0, &[]),
        ];

        for step in script {
            step(&mut ui);
            assert_invariants(&ui);
        }

        for id in ["Inventory", "Map", "Settings"] {
            assert_eq!(ui.panel_state(id), Some(PanelState::Closed), "{} left open", id);
        }
    }
}

//! Mode controller coordinating slots, link traffic, and telemetry
//!
//! The controller is the single owner of every counter and cursor the
//! app mutates: the active slot, the config cursor, uptime, active
//! time, the last battery reading. Each event produces at most one
//! display update and at most one outbound request; the runtime applies
//! both and comes back with the next event.

use wristlink_protocol::{decode_reply, encode_request, Dict, SourceId};

use crate::config::{SlotStore, SLOT_COUNT};
use crate::dispatch::events::Event;
use crate::dispatch::machine::{LocalMode, State};
use crate::motion::{AccelSample, MotionClassifier};
use crate::render::{self, RenderText};
use crate::telemetry::{BatterySnapshot, ClockState};
use crate::traits::SlotStorage;

/// One display update
#[derive(Debug, Clone, PartialEq)]
pub struct Render {
    /// Text for the output layer
    pub text: RenderText,
    /// Invert the layer (config screen "currently selected" indicator)
    pub highlight: bool,
}

impl Render {
    fn plain(text: RenderText) -> Self {
        Self {
            text,
            highlight: false,
        }
    }
}

/// What the runtime should do after an event
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Action {
    /// Display update, if the screen changed
    pub render: Option<Render>,
    /// Outbound request to hand to the link, if any
    pub request: Option<Dict>,
}

impl Action {
    /// No visible effect
    fn none() -> Self {
        Self::default()
    }

    fn render(text: RenderText) -> Self {
        Self {
            render: Some(Render::plain(text)),
            request: None,
        }
    }

    fn request(dict: Dict) -> Self {
        Self {
            render: None,
            request: Some(dict),
        }
    }
}

/// The engine's state, owned in one place
pub struct Controller<S: SlotStorage> {
    state: State,
    current_slot: usize,
    cursor: SourceId,
    store: SlotStore<S>,
    motion: MotionClassifier,
    clock: ClockState,
    battery: BatterySnapshot,
}

impl<S: SlotStorage> Controller<S> {
    /// Create a controller over a loaded slot store
    pub fn new(store: SlotStore<S>) -> Self {
        Self {
            state: State::Idle,
            current_slot: 0,
            cursor: SourceId::Location,
            store,
            motion: MotionClassifier::new(),
            clock: ClockState::new(),
            battery: BatterySnapshot::default(),
        }
    }

    /// Enter slot 0, as the process does right after launch
    ///
    /// A remote source fires its first request immediately; a local
    /// source starts rendering without any link traffic.
    pub fn startup(&mut self) -> Action {
        self.enter_slot()
    }

    /// Current controller state
    pub fn state(&self) -> State {
        self.state
    }

    /// Active slot index
    pub fn current_slot(&self) -> usize {
        self.current_slot
    }

    /// Config-screen cursor
    pub fn cursor(&self) -> SourceId {
        self.cursor
    }

    /// The slot store (for the config screen's selected indicator)
    pub fn store(&self) -> &SlotStore<S> {
        &self.store
    }

    /// Motion classifier state
    pub fn motion(&self) -> &MotionClassifier {
        &self.motion
    }

    /// Uptime clock state
    pub fn clock(&self) -> &ClockState {
        &self.clock
    }

    /// Process one event to completion
    pub fn handle(&mut self, event: Event) -> Action {
        match event {
            Event::Tick(battery) => self.on_tick(battery),
            Event::AccelBatch(samples) => self.on_accel(&samples),
            Event::Message(dict) => self.on_message(&dict),
            Event::NextSlot => self.on_slot_step(1),
            Event::PrevSlot => self.on_slot_step(SLOT_COUNT - 1),
            Event::OpenConfig => self.on_open_config(),
            Event::CursorNext => self.on_cursor(SourceId::cycle_next),
            Event::CursorPrev => self.on_cursor(SourceId::cycle_prev),
            Event::Confirm => self.on_confirm(),
            Event::CloseConfig => self.on_close_config(),
        }
    }

    /// Resolve the current slot's source and show it
    fn enter_slot(&mut self) -> Action {
        let source = match self.store.get(self.current_slot) {
            Ok(source) => source,
            // Slot index is bounded by construction; render the range
            // diagnostic and stay put rather than crash
            Err(_) => return Action::render(render::item_range_error_text()),
        };

        match LocalMode::from_source(source) {
            Some(mode) => {
                self.state = State::DisplayingLocal(mode);
                Action::render(self.local_text(mode))
            }
            None => match encode_request(source, None) {
                Ok(dict) => {
                    self.state = State::AwaitingReply;
                    Action::request(dict)
                }
                Err(_) => Action::render(render::item_range_error_text()),
            },
        }
    }

    fn local_text(&self, mode: LocalMode) -> RenderText {
        match mode {
            LocalMode::Uptime => render::uptime_text(self.clock.seconds()),
            LocalMode::ActiveTime => render::active_time_text(self.motion.active_seconds()),
            LocalMode::Battery => render::battery_text(self.battery),
        }
    }

    fn on_tick(&mut self, battery: BatterySnapshot) -> Action {
        self.battery = battery;
        // Uptime advances in every mode, not only while shown
        self.clock.tick();

        match self.state {
            State::DisplayingLocal(mode) => Action::render(self.local_text(mode)),
            _ => Action::none(),
        }
    }

    fn on_accel(&mut self, samples: &[AccelSample]) -> Action {
        // Motion only accumulates while the active-time screen is up;
        // batches delivered in any other mode are discarded
        if self.state == State::DisplayingLocal(LocalMode::ActiveTime) {
            self.motion.ingest(samples);
            Action::render(render::active_time_text(self.motion.active_seconds()))
        } else {
            Action::none()
        }
    }

    fn on_message(&mut self, dict: &Dict) -> Action {
        match self.state {
            State::AwaitingReply => match decode_reply(dict) {
                Ok(record) => {
                    self.state = State::Idle;
                    Action::render(render::reply_text(&record))
                }
                // Render the diagnostic but leave the state alone
                Err(_) => Action::render(render::dict_error_text()),
            },
            // Unsolicited messages still reach the screen on the main
            // idle view; the phone may push without being asked
            State::Idle => match decode_reply(dict) {
                Ok(record) => Action::render(render::reply_text(&record)),
                Err(_) => Action::render(render::dict_error_text()),
            },
            // A local screen or the chooser owns the display
            State::ConfiguringSlot | State::DisplayingLocal(_) => Action::none(),
        }
    }

    fn on_slot_step(&mut self, delta: usize) -> Action {
        if self.state.in_config() {
            return Action::none();
        }
        self.current_slot = (self.current_slot + delta) % SLOT_COUNT;
        self.enter_slot()
    }

    fn on_open_config(&mut self) -> Action {
        if self.state.in_config() {
            return Action::none();
        }
        self.state = State::ConfiguringSlot;
        self.cursor = self
            .store
            .raw(self.current_slot)
            .ok()
            .flatten()
            .unwrap_or(SourceId::Location);
        self.config_view()
    }

    fn on_cursor(&mut self, step: fn(SourceId) -> SourceId) -> Action {
        if !self.state.in_config() {
            return Action::none();
        }
        self.cursor = step(self.cursor);
        self.config_view()
    }

    fn on_confirm(&mut self) -> Action {
        if !self.state.in_config() {
            return Action::none();
        }
        // Write-through; on storage failure the cache still holds the
        // new value and the slot reverts on restart
        let _ = self.store.set(self.current_slot, self.cursor);
        self.state = State::Idle;
        Action::render(RenderText::new())
    }

    fn on_close_config(&mut self) -> Action {
        if !self.state.in_config() {
            return Action::none();
        }
        self.state = State::Idle;
        Action::render(RenderText::new())
    }

    /// Chooser view: source name, inverted when it is the stored choice
    fn config_view(&self) -> Action {
        Action {
            render: Some(Render {
                text: render::source_name_text(self.cursor),
                highlight: self.store.is_selected(self.current_slot, self.cursor),
            }),
            request: None,
        }
    }
}

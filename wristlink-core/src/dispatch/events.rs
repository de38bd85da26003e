//! Events delivered by the runtime
//!
//! The runtime is cooperative: one event at a time, each handled to
//! completion. Every callback the vendor toolkit offers maps onto one
//! variant here, which makes the whole engine drivable from tests.

use wristlink_protocol::Dict;

use crate::motion::{AccelSample, ACCEL_BATCH};
use crate::telemetry::BatterySnapshot;

/// Events that drive the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Timer and sensor events
    /// One-second timer tick, with a fresh battery reading
    Tick(BatterySnapshot),
    /// A batch of accelerometer samples (10 Hz, delivered together)
    AccelBatch([AccelSample; ACCEL_BATCH]),

    // Link events
    /// An inbound message from the phone
    Message(Dict),

    // Main-screen navigation
    /// Advance to the next slot (wraps)
    NextSlot,
    /// Go back to the previous slot (wraps)
    PrevSlot,

    // Configuration screen
    /// Open the source chooser for the current slot
    OpenConfig,
    /// Step the chooser cursor forward (wraps)
    CursorNext,
    /// Step the chooser cursor backward (wraps)
    CursorPrev,
    /// Persist the cursor as the slot's source
    Confirm,
    /// Leave the chooser without saving
    CloseConfig,
}

impl Event {
    /// Check if this event came from a button press
    pub fn is_user_event(&self) -> bool {
        matches!(
            self,
            Event::NextSlot
                | Event::PrevSlot
                | Event::OpenConfig
                | Event::CursorNext
                | Event::CursorPrev
                | Event::Confirm
                | Event::CloseConfig
        )
    }

    /// Check if this event came from a timer or sensor
    pub fn is_sensor_event(&self) -> bool {
        matches!(self, Event::Tick(_) | Event::AccelBatch(_))
    }

    /// Check if this event came over the phone link
    pub fn is_link_event(&self) -> bool {
        matches!(self, Event::Message(_))
    }
}

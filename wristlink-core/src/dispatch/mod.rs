//! Event dispatch and mode control
//!
//! One controller instance owns every mutable counter and cursor the
//! app has; the runtime feeds it events one at a time and applies the
//! returned action (display text, outbound request) to the vendor UI.

pub mod controller;
pub mod events;
pub mod machine;

pub use controller::{Action, Controller, Render};
pub use events::Event;
pub use machine::{LocalMode, State};

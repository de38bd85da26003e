//! Board-agnostic engine logic for the Wristlink watch app
//!
//! This crate contains all application logic that does not depend on
//! the vendor UI runtime:
//!
//! - Slot configuration store (4 screens, persisted source choice)
//! - Motion classifier (accelerometer batches -> active time)
//! - Local telemetry counters (uptime, battery snapshot)
//! - Render text builders (owned, fixed-capacity strings)
//! - Event dispatcher / mode controller
//!
//! The runtime above delivers one event at a time and each handler runs
//! to completion before the next event arrives; nothing here blocks or
//! needs a lock.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod dispatch;
pub mod motion;
pub mod render;
pub mod telemetry;
pub mod traits;

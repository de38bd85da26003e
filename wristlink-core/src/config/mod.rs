//! Slot configuration
//!
//! Maps the four display screens to data sources. Stored as a single
//! postcard binary record behind the [`crate::traits::SlotStorage`]
//! seam.

pub mod slots;

pub use slots::{ConfigError, SlotConfig, SlotStore, SLOT_COUNT};

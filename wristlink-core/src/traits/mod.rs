//! Seams between the engine and the platform
//!
//! The vendor runtime owns the actual persistence API; the engine only
//! sees these traits.

pub mod storage;

pub use storage::{MemoryStorage, SlotStorage};

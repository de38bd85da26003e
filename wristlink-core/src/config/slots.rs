//! Per-slot source configuration store
//!
//! Each of the four screens remembers which source it shows. A slot
//! that was never configured resolves to the location source; the
//! absent/present distinction is still kept so the config screen can
//! tell "defaulted" apart from "explicitly chosen".

use serde::{Deserialize, Serialize};
use wristlink_protocol::SourceId;

use crate::traits::storage::{SlotStorage, MAX_RECORD_SIZE};

/// Number of display slots
pub const SLOT_COUNT: usize = 4;

/// Configuration store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Slot index outside 0-3
    SlotOutOfRange,
    /// Underlying storage failed to persist the record
    Storage,
}

/// The persisted slot configuration record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotConfig {
    /// Chosen source per slot; `None` until first configured
    pub slots: [Option<SourceId>; SLOT_COUNT],
}

/// Write-through slot store
///
/// Caches the record in RAM and persists on every `set`. Reads are
/// served from the cache; the single-threaded run-to-completion model
/// makes set/get trivially atomic.
pub struct SlotStore<S: SlotStorage> {
    config: SlotConfig,
    storage: S,
}

impl<S: SlotStorage> SlotStore<S> {
    /// Load the store from persistent storage
    ///
    /// A missing or undecodable record yields all-unset slots rather
    /// than an error; the device must come up regardless.
    pub fn load(mut storage: S) -> Self {
        let mut buf = [0u8; MAX_RECORD_SIZE];
        let config = match storage.read(&mut buf) {
            Ok(Some(len)) => postcard::from_bytes(&buf[..len]).unwrap_or_default(),
            Ok(None) | Err(_) => SlotConfig::default(),
        };
        Self { config, storage }
    }

    /// Resolve the source for a slot
    ///
    /// A never-configured slot resolves to `Location`; defaulting on
    /// absence is deliberate, not an omission.
    pub fn get(&self, slot: usize) -> Result<SourceId, ConfigError> {
        self.raw(slot).map(|v| v.unwrap_or(SourceId::Location))
    }

    /// The persisted value for a slot, keeping the absent distinction
    pub fn raw(&self, slot: usize) -> Result<Option<SourceId>, ConfigError> {
        self.config
            .slots
            .get(slot)
            .copied()
            .ok_or(ConfigError::SlotOutOfRange)
    }

    /// Configure a slot and persist immediately (write-through)
    ///
    /// On storage failure the cache update stands and the error is
    /// reported; the slot reverts to its old value on restart.
    pub fn set(&mut self, slot: usize, source: SourceId) -> Result<(), ConfigError> {
        if slot >= SLOT_COUNT {
            return Err(ConfigError::SlotOutOfRange);
        }
        self.config.slots[slot] = Some(source);
        self.persist()
    }

    /// True iff a value was explicitly persisted and equals `candidate`
    ///
    /// A never-set slot is never "selected", even though `get` resolves
    /// it to `Location`.
    pub fn is_selected(&self, slot: usize, candidate: SourceId) -> bool {
        matches!(self.raw(slot), Ok(Some(v)) if v == candidate)
    }

    fn persist(&mut self) -> Result<(), ConfigError> {
        let mut buf = [0u8; MAX_RECORD_SIZE];
        let data =
            postcard::to_slice(&self.config, &mut buf).map_err(|_| ConfigError::Storage)?;
        self.storage.write(data).map_err(|_| ConfigError::Storage)
    }
}

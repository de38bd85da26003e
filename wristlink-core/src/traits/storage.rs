//! Persistent storage trait for the slot configuration record
//!
//! The configuration survives process restarts as a single opaque
//! record. The platform decides where it lives; the store only reads
//! and replaces it.

use heapless::Vec;

/// Maximum persisted record size in bytes
pub const MAX_RECORD_SIZE: usize = 16;

/// Trait for the single persisted configuration record
pub trait SlotStorage {
    /// Storage-specific error type
    type Error;

    /// Read the record into `buf`
    ///
    /// Returns `Ok(Some(len))` with the record length, or `Ok(None)`
    /// when no record has ever been written.
    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>, Self::Error>;

    /// Write (replace) the record
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// RAM-backed storage for host tests and simulators
///
/// Holds at most one record; `write` replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    record: Option<Vec<u8, MAX_RECORD_SIZE>>,
}

/// Errors for [`MemoryStorage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MemoryStorageError {
    /// Record exceeds the fixed capacity
    RecordTooLarge,
}

impl MemoryStorage {
    /// Create an empty storage (no record)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with a record
    pub fn with_record(data: &[u8]) -> Self {
        let mut record = Vec::new();
        let _ = record.extend_from_slice(data);
        Self {
            record: Some(record),
        }
    }
}

impl SlotStorage for MemoryStorage {
    type Error = MemoryStorageError;

    fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>, Self::Error> {
        match &self.record {
            Some(record) => {
                if buf.len() < record.len() {
                    return Err(MemoryStorageError::RecordTooLarge);
                }
                buf[..record.len()].copy_from_slice(record);
                Ok(Some(record.len()))
            }
            None => Ok(None),
        }
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let mut record = Vec::new();
        record
            .extend_from_slice(data)
            .map_err(|_| MemoryStorageError::RecordTooLarge)?;
        self.record = Some(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_storage_reads_none() {
        let mut storage = MemoryStorage::new();
        let mut buf = [0u8; MAX_RECORD_SIZE];
        assert_eq!(storage.read(&mut buf), Ok(None));
    }

    #[test]
    fn test_write_then_read() {
        let mut storage = MemoryStorage::new();
        storage.write(&[1, 2, 3]).unwrap();

        let mut buf = [0u8; MAX_RECORD_SIZE];
        assert_eq!(storage.read(&mut buf), Ok(Some(3)));
        assert_eq!(&buf[..3], &[1, 2, 3]);
    }

    #[test]
    fn test_write_replaces() {
        let mut storage = MemoryStorage::new();
        storage.write(&[1, 2, 3]).unwrap();
        storage.write(&[9]).unwrap();

        let mut buf = [0u8; MAX_RECORD_SIZE];
        assert_eq!(storage.read(&mut buf), Ok(Some(1)));
        assert_eq!(buf[0], 9);
    }

    #[test]
    fn test_oversized_record_rejected() {
        let mut storage = MemoryStorage::new();
        let data = [0u8; MAX_RECORD_SIZE + 1];
        assert_eq!(
            storage.write(&data),
            Err(MemoryStorageError::RecordTooLarge)
        );
    }
}

//! Tuple dictionary encoding and decoding for the phone link.
//!
//! Every message on the link is a dictionary of typed tuples:
//! - COUNT (1 byte): number of tuples
//! - per tuple:
//!   - KEY (4 bytes): tuple key, little endian
//!   - TYPE (1 byte): 0x01 text, 0x03 int32
//!   - LENGTH (2 bytes): data length in bytes, little endian
//!   - DATA (LENGTH bytes)

use heapless::{String, Vec};

/// Maximum tuples per dictionary
pub const MAX_TUPLES: usize = 8;

/// Maximum text value length in bytes
pub const MAX_VALUE_LEN: usize = 32;

/// Per-tuple header size (KEY + TYPE + LENGTH)
const TUPLE_HEADER_LEN: usize = 7;

/// Maximum complete dictionary size (COUNT + worst-case tuples)
pub const MAX_DICT_SIZE: usize = 1 + MAX_TUPLES * (TUPLE_HEADER_LEN + MAX_VALUE_LEN);

// Wire type identifiers
const TYPE_TEXT: u8 = 0x01;
const TYPE_INT32: u8 = 0x03;

/// Errors that can occur during dictionary parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// Dictionary already holds the maximum number of tuples
    TooManyTuples,
    /// Text value exceeds maximum allowed length
    ValueTooLong,
    /// Input ends before the declared tuple data
    Truncated,
    /// Unknown tuple type identifier
    UnsupportedType,
    /// Tuple structure is malformed (bad length, trailing bytes)
    InvalidTuple,
    /// Text value is not valid UTF-8
    InvalidUtf8,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A single tuple value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleValue {
    /// Signed 32-bit integer
    Int(i32),
    /// Text value
    Text(String<MAX_VALUE_LEN>),
}

impl TupleValue {
    /// Get the integer value, if this tuple holds one
    pub fn as_int(&self) -> Option<i32> {
        match self {
            TupleValue::Int(v) => Some(*v),
            TupleValue::Text(_) => None,
        }
    }

    /// Get the text value, if this tuple holds one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TupleValue::Int(_) => None,
            TupleValue::Text(s) => Some(s.as_str()),
        }
    }

    fn data_len(&self) -> usize {
        match self {
            TupleValue::Int(_) => 4,
            TupleValue::Text(s) => s.len(),
        }
    }
}

/// A parsed or constructed tuple dictionary
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dict {
    tuples: Vec<(u32, TupleValue), MAX_TUPLES>,
}

impl Dict {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self { tuples: Vec::new() }
    }

    /// Number of tuples in the dictionary
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Check if the dictionary holds no tuples
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Append an int32 tuple
    pub fn push_int(&mut self, key: u32, value: i32) -> Result<(), DictError> {
        self.tuples
            .push((key, TupleValue::Int(value)))
            .map_err(|_| DictError::TooManyTuples)
    }

    /// Append a text tuple
    pub fn push_text(&mut self, key: u32, value: &str) -> Result<(), DictError> {
        let mut s = String::new();
        s.push_str(value).map_err(|_| DictError::ValueTooLong)?;
        self.tuples
            .push((key, TupleValue::Text(s)))
            .map_err(|_| DictError::TooManyTuples)
    }

    /// Find the value for a key (first match wins)
    pub fn find(&self, key: u32) -> Option<&TupleValue> {
        self.tuples.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Iterate over all (key, value) tuples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(u32, TupleValue)> {
        self.tuples.iter()
    }

    /// Number of bytes this dictionary occupies on the wire
    pub fn encoded_len(&self) -> usize {
        1 + self
            .tuples
            .iter()
            .map(|(_, v)| TUPLE_HEADER_LEN + v.data_len())
            .sum::<usize>()
    }

    /// Encode this dictionary into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, DictError> {
        let total = self.encoded_len();
        if buffer.len() < total {
            return Err(DictError::BufferTooSmall);
        }

        buffer[0] = self.tuples.len() as u8;
        let mut pos = 1;

        for (key, value) in &self.tuples {
            buffer[pos..pos + 4].copy_from_slice(&key.to_le_bytes());
            pos += 4;
            match value {
                TupleValue::Int(v) => {
                    buffer[pos] = TYPE_INT32;
                    buffer[pos + 1..pos + 3].copy_from_slice(&4u16.to_le_bytes());
                    pos += 3;
                    buffer[pos..pos + 4].copy_from_slice(&v.to_le_bytes());
                    pos += 4;
                }
                TupleValue::Text(s) => {
                    let data = s.as_bytes();
                    buffer[pos] = TYPE_TEXT;
                    buffer[pos + 1..pos + 3].copy_from_slice(&(data.len() as u16).to_le_bytes());
                    pos += 3;
                    buffer[pos..pos + data.len()].copy_from_slice(data);
                    pos += data.len();
                }
            }
        }

        Ok(total)
    }

    /// Encode this dictionary into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_DICT_SIZE>, DictError> {
        let mut buffer = [0u8; MAX_DICT_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| DictError::BufferTooSmall)?;
        Ok(vec)
    }

    /// Parse a dictionary from a byte slice
    ///
    /// The slice must contain exactly one dictionary; trailing bytes are
    /// rejected as `InvalidTuple`.
    pub fn parse(input: &[u8]) -> Result<Self, DictError> {
        let (&count, mut rest) = input.split_first().ok_or(DictError::Truncated)?;
        if count as usize > MAX_TUPLES {
            return Err(DictError::TooManyTuples);
        }

        let mut dict = Dict::new();
        for _ in 0..count {
            if rest.len() < TUPLE_HEADER_LEN {
                return Err(DictError::Truncated);
            }
            let key = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
            let tuple_type = rest[4];
            let data_len = u16::from_le_bytes([rest[5], rest[6]]) as usize;
            rest = &rest[TUPLE_HEADER_LEN..];

            if rest.len() < data_len {
                return Err(DictError::Truncated);
            }
            let (data, remainder) = rest.split_at(data_len);
            rest = remainder;

            let value = match tuple_type {
                TYPE_INT32 => {
                    if data_len != 4 {
                        return Err(DictError::InvalidTuple);
                    }
                    TupleValue::Int(i32::from_le_bytes([data[0], data[1], data[2], data[3]]))
                }
                TYPE_TEXT => {
                    if data_len > MAX_VALUE_LEN {
                        return Err(DictError::ValueTooLong);
                    }
                    let text = core::str::from_utf8(data).map_err(|_| DictError::InvalidUtf8)?;
                    let mut s = String::new();
                    s.push_str(text).map_err(|_| DictError::ValueTooLong)?;
                    TupleValue::Text(s)
                }
                _ => return Err(DictError::UnsupportedType),
            };

            // Count already bounded by MAX_TUPLES
            let _ = dict.tuples.push((key, value));
        }

        if !rest.is_empty() {
            return Err(DictError::InvalidTuple);
        }

        Ok(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        let dict = Dict::new();
        let mut buffer = [0u8; 4];
        let len = dict.encode(&mut buffer).unwrap();

        assert_eq!(len, 1);
        assert_eq!(buffer[0], 0); // count
    }

    #[test]
    fn test_encode_int_layout() {
        let mut dict = Dict::new();
        dict.push_int(1, 6).unwrap();
        let mut buffer = [0u8; 16];
        let len = dict.encode(&mut buffer).unwrap();

        assert_eq!(len, 12);
        assert_eq!(buffer[0], 1); // count
        assert_eq!(&buffer[1..5], &1u32.to_le_bytes()); // key
        assert_eq!(buffer[5], TYPE_INT32);
        assert_eq!(&buffer[6..8], &4u16.to_le_bytes()); // length
        assert_eq!(&buffer[8..12], &6i32.to_le_bytes()); // data
    }

    #[test]
    fn test_encode_text_layout() {
        let mut dict = Dict::new();
        dict.push_text(302, "21").unwrap();
        let mut buffer = [0u8; 16];
        let len = dict.encode(&mut buffer).unwrap();

        assert_eq!(len, 10);
        assert_eq!(buffer[0], 1);
        assert_eq!(&buffer[1..5], &302u32.to_le_bytes());
        assert_eq!(buffer[5], TYPE_TEXT);
        assert_eq!(&buffer[6..8], &2u16.to_le_bytes());
        assert_eq!(&buffer[8..10], b"21");
    }

    #[test]
    fn test_roundtrip_mixed() {
        let mut dict = Dict::new();
        dict.push_int(1, 0).unwrap();
        dict.push_text(100, "48.85341").unwrap();
        dict.push_text(101, "2.3488").unwrap();

        let encoded = dict.encode_to_vec().unwrap();
        let parsed = Dict::parse(&encoded).unwrap();

        assert_eq!(parsed, dict);
        assert_eq!(parsed.find(1).and_then(TupleValue::as_int), Some(0));
        assert_eq!(
            parsed.find(100).and_then(TupleValue::as_text),
            Some("48.85341")
        );
    }

    #[test]
    fn test_find_missing_key() {
        let mut dict = Dict::new();
        dict.push_int(1, 5).unwrap();
        assert!(dict.find(2).is_none());
    }

    #[test]
    fn test_parse_truncated_header() {
        let mut dict = Dict::new();
        dict.push_int(1, 5).unwrap();
        let encoded = dict.encode_to_vec().unwrap();

        let result = Dict::parse(&encoded[..4]);
        assert_eq!(result, Err(DictError::Truncated));
    }

    #[test]
    fn test_parse_truncated_data() {
        let mut dict = Dict::new();
        dict.push_text(100, "hello").unwrap();
        let encoded = dict.encode_to_vec().unwrap();

        let result = Dict::parse(&encoded[..encoded.len() - 2]);
        assert_eq!(result, Err(DictError::Truncated));
    }

    #[test]
    fn test_parse_unsupported_type() {
        // count=1, key=1, type=0x7F, length=0
        let bytes = [1u8, 1, 0, 0, 0, 0x7F, 0, 0];
        let result = Dict::parse(&bytes);
        assert_eq!(result, Err(DictError::UnsupportedType));
    }

    #[test]
    fn test_parse_bad_int_length() {
        // count=1, key=1, type=int32, length=2, data=2 bytes
        let bytes = [1u8, 1, 0, 0, 0, TYPE_INT32, 2, 0, 0xAB, 0xCD];
        let result = Dict::parse(&bytes);
        assert_eq!(result, Err(DictError::InvalidTuple));
    }

    #[test]
    fn test_parse_trailing_garbage() {
        let mut dict = Dict::new();
        dict.push_int(1, 5).unwrap();
        let mut encoded = dict.encode_to_vec().unwrap();
        encoded.push(0xFF).unwrap();

        let result = Dict::parse(&encoded);
        assert_eq!(result, Err(DictError::InvalidTuple));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        // count=1, key=100, type=text, length=2, data=invalid UTF-8
        let bytes = [1u8, 100, 0, 0, 0, TYPE_TEXT, 2, 0, 0xC3, 0x28];
        let result = Dict::parse(&bytes);
        assert_eq!(result, Err(DictError::InvalidUtf8));
    }

    #[test]
    fn test_value_too_long() {
        let mut dict = Dict::new();
        let long = "0123456789012345678901234567890123456789";
        assert_eq!(dict.push_text(1, long), Err(DictError::ValueTooLong));
    }

    #[test]
    fn test_too_many_tuples() {
        let mut dict = Dict::new();
        for key in 0..MAX_TUPLES as u32 {
            dict.push_int(key, 0).unwrap();
        }
        assert_eq!(dict.push_int(99, 0), Err(DictError::TooManyTuples));
    }

    #[test]
    fn test_buffer_too_small() {
        let mut dict = Dict::new();
        dict.push_int(1, 5).unwrap();
        let mut buffer = [0u8; 4];
        assert_eq!(dict.encode(&mut buffer), Err(DictError::BufferTooSmall));
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_value() -> impl Strategy<Value = TupleValue> {
        prop_oneof![
            any::<i32>().prop_map(TupleValue::Int),
            proptest::collection::vec(proptest::char::range('a', 'z'), 0..=MAX_VALUE_LEN).prop_map(|chars| {
                let mut s = String::<MAX_VALUE_LEN>::new();
                for c in chars {
                    let _ = s.push(c);
                }
                TupleValue::Text(s)
            }),
        ]
    }

    fn arb_dict() -> impl Strategy<Value = Dict> {
        proptest::collection::vec((0u32..1000, arb_value()), 0..=MAX_TUPLES).prop_map(|entries| {
            let mut dict = Dict::new();
            for (key, value) in entries {
                match value {
                    TupleValue::Int(v) => dict.push_int(key, v).unwrap(),
                    TupleValue::Text(s) => dict.push_text(key, &s).unwrap(),
                }
            }
            dict
        })
    }

    proptest! {
        #[test]
        fn dict_roundtrip(dict in arb_dict()) {
            let encoded = dict.encode_to_vec().unwrap();
            let parsed = Dict::parse(&encoded).unwrap();
            prop_assert_eq!(parsed, dict);
        }
    }
}

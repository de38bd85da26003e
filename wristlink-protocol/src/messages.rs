//! Request and reply messages for the phone link
//!
//! An outbound request is a single int32 tuple naming the source, plus
//! an optional text payload. Inbound replies echo the source id under
//! the same tag key and carry a fixed, source-specific set of text
//! fields.

use heapless::{String, Vec};

use crate::dict::{Dict, DictError, TupleValue, MAX_VALUE_LEN};
use crate::sources::SourceId;

/// Tag key carrying the source id in requests and replies
pub const KEY_REQUEST: u32 = 1;
/// Optional request payload
pub const KEY_PAYLOAD: u32 = 2;

// Location API
pub const KEY_LATITUDE: u32 = 100;
pub const KEY_LONGITUDE: u32 = 101;
pub const KEY_DISTANCE: u32 = 102;
pub const KEY_DIRECTION: u32 = 103;
// Elevation API
pub const KEY_ALTITUDE: u32 = 200;
// Weather API
pub const KEY_STATUS: u32 = 300;
pub const KEY_DESCRIPTION: u32 = 301;
pub const KEY_TEMPERATURE: u32 = 302;
pub const KEY_PRESSURE: u32 = 303;
pub const KEY_HUMIDITY: u32 = 304;
pub const KEY_WIND_SPEED: u32 = 305;
pub const KEY_WIND_DIRECTION: u32 = 306;
pub const KEY_SUNRISE: u32 = 307;
pub const KEY_SUNSET: u32 = 308;
// Transport API
pub const KEY_DEPARTURE: u32 = 400;
pub const KEY_DEPARTURE_TIME: u32 = 401;
pub const KEY_ARRIVAL: u32 = 402;
pub const KEY_ARRIVAL_TIME: u32 = 403;

/// Maximum fields in a single reply (transport uses all four)
pub const MAX_REPLY_FIELDS: usize = 4;

/// Errors that can occur while building or decoding messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// Source is local-only and cannot be requested over the link
    NotRemote,
    /// Reply tag is missing, out of range, or names a source that
    /// carries no reply body
    UnknownSource,
    /// An expected reply field is absent or not text
    MissingField(u32),
    /// Underlying dictionary error
    Dict(DictError),
}

impl From<DictError> for ProtocolError {
    fn from(e: DictError) -> Self {
        ProtocolError::Dict(e)
    }
}

/// Reply field schema for a source
///
/// Returns `None` for sources whose replies carry no body: the two
/// fire-and-forget navigation controls and the local telemetry modes.
pub fn reply_fields(source: SourceId) -> Option<&'static [u32]> {
    match source {
        SourceId::Location => Some(&[KEY_LATITUDE, KEY_LONGITUDE]),
        SourceId::NavStart => Some(&[KEY_DISTANCE, KEY_DIRECTION]),
        SourceId::Elevation => Some(&[KEY_ALTITUDE]),
        SourceId::WeatherStatus => Some(&[KEY_STATUS, KEY_DESCRIPTION]),
        SourceId::Temperature => Some(&[KEY_TEMPERATURE]),
        SourceId::Pressure => Some(&[KEY_PRESSURE]),
        SourceId::Humidity => Some(&[KEY_HUMIDITY]),
        SourceId::Wind => Some(&[KEY_WIND_SPEED, KEY_WIND_DIRECTION]),
        SourceId::Sunrise => Some(&[KEY_SUNRISE]),
        SourceId::Sunset => Some(&[KEY_SUNSET]),
        SourceId::Transport => Some(&[
            KEY_DEPARTURE,
            KEY_DEPARTURE_TIME,
            KEY_ARRIVAL,
            KEY_ARRIVAL_TIME,
        ]),
        SourceId::FixLocation
        | SourceId::NavStop
        | SourceId::Uptime
        | SourceId::ActiveTime
        | SourceId::Battery => None,
    }
}

/// Build an outbound request for a remote source
///
/// Fails with `NotRemote` for local telemetry sources; the caller is
/// expected to have resolved the source kind already.
pub fn encode_request(source: SourceId, payload: Option<&str>) -> Result<Dict, ProtocolError> {
    if !source.is_remote() {
        return Err(ProtocolError::NotRemote);
    }

    let mut dict = Dict::new();
    dict.push_int(KEY_REQUEST, source.as_u8() as i32)?;
    if let Some(text) = payload {
        dict.push_text(KEY_PAYLOAD, text)?;
    }
    Ok(dict)
}

/// A decoded reply: the answering source plus its text fields
///
/// Constructed from one inbound dictionary, consumed to produce a
/// render string, then discarded. No history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRecord {
    /// Source that produced this reply
    pub source: SourceId,
    fields: Vec<(u32, String<MAX_VALUE_LEN>), MAX_REPLY_FIELDS>,
}

impl ReplyRecord {
    /// Get a field value by key
    pub fn field(&self, key: u32) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Decode an inbound reply dictionary
///
/// Reads the mandatory tag to recover the source, then the field set
/// that source's schema expects. No retry logic lives here; a bad
/// reply surfaces as an error for the caller to render.
pub fn decode_reply(dict: &Dict) -> Result<ReplyRecord, ProtocolError> {
    let tag = dict
        .find(KEY_REQUEST)
        .and_then(TupleValue::as_int)
        .ok_or(ProtocolError::UnknownSource)?;

    let source = u8::try_from(tag)
        .ok()
        .and_then(SourceId::from_u8)
        .ok_or(ProtocolError::UnknownSource)?;
    let schema = reply_fields(source).ok_or(ProtocolError::UnknownSource)?;

    let mut fields = Vec::new();
    for &key in schema {
        let value = dict
            .find(key)
            .and_then(TupleValue::as_text)
            .ok_or(ProtocolError::MissingField(key))?;
        let mut text = String::new();
        // Dict values are already bounded by MAX_VALUE_LEN
        let _ = text.push_str(value);
        // Schema length is bounded by MAX_REPLY_FIELDS
        let _ = fields.push((key, text));
    }

    Ok(ReplyRecord { source, fields })
}

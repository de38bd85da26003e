//! Wristlink Phone Communication Protocol
//!
//! This crate defines the message protocol between the watch app and its
//! phone companion. The companion is reachable only through this protocol;
//! everything it does (GPS, weather lookups, transit queries) appears on
//! the watch as a typed key/value reply.
//!
//! # Protocol Overview
//!
//! All messages are tuple dictionaries:
//! ```text
//! ┌───────┬──────────────────────────────────────────────┐
//! │ COUNT │ TUPLE × COUNT                                │
//! │ 1B    │ key:u32 │ type:u8 │ length:u16 │ data:len B  │
//! └───────┴──────────────────────────────────────────────┘
//! ```
//!
//! Outbound requests carry a single int32 tuple naming the requested
//! source. Inbound replies echo the source id under the same key and add
//! the text fields that source's schema defines. Messages are
//! fire-and-forget: there is no correlation id, retry, or timeout; the
//! next inbound message is assumed to answer the last request.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod dict;
pub mod messages;
pub mod sources;

pub use dict::{Dict, DictError, TupleValue, MAX_DICT_SIZE, MAX_TUPLES, MAX_VALUE_LEN};
pub use messages::{decode_reply, encode_request, reply_fields, ProtocolError, ReplyRecord};
pub use sources::{SourceId, SourceKind, SOURCE_COUNT};

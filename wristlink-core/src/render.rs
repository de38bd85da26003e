//! Render text builders
//!
//! Every screen update is a freshly built, owned string sized to the
//! display cap. Handlers never share a buffer; whatever a handler
//! returns is handed to the display and dropped on the next event.

use core::fmt::Write;

use heapless::String;
use wristlink_protocol::messages::{
    KEY_ALTITUDE, KEY_ARRIVAL, KEY_ARRIVAL_TIME, KEY_DEPARTURE, KEY_DEPARTURE_TIME,
    KEY_DESCRIPTION, KEY_DIRECTION, KEY_DISTANCE, KEY_HUMIDITY, KEY_LATITUDE, KEY_LONGITUDE,
    KEY_PRESSURE, KEY_STATUS, KEY_SUNRISE, KEY_SUNSET, KEY_TEMPERATURE, KEY_WIND_DIRECTION,
    KEY_WIND_SPEED,
};
use wristlink_protocol::{ReplyRecord, SourceId};

use crate::telemetry::BatterySnapshot;

/// Display text cap in bytes
pub const MAX_TEXT_LEN: usize = 128;

/// One screenful of text
pub type RenderText = String<MAX_TEXT_LEN>;

/// Diagnostic for a reply that failed to decode
pub const DICT_KEYS_ERROR: &str = "Error.\nPlease check your dictionary KEYS";

/// Diagnostic for a source outside the configurable range
pub const ITEM_RANGE_ERROR: &str = "Error.\nPlease check if NUMBER_OF_ITEMS is OK";

/// Format whole seconds as `"{h}h {m}m {s}s"`
pub fn format_hms(total_seconds: u32) -> String<24> {
    let seconds = total_seconds % 60;
    let minutes = (total_seconds % 3600) / 60;
    let hours = total_seconds / 3600;

    let mut out = String::new();
    let _ = write!(out, "{}h {}m {}s", hours, minutes, seconds);
    out
}

/// Render a decoded reply with its source's template
///
/// Pure function of the record; the same record always renders the
/// same text. A worst-case transport reply can exceed the display cap,
/// in which case the tail is dropped.
pub fn reply_text(record: &ReplyRecord) -> RenderText {
    let field = |key| record.field(key).unwrap_or("");
    let mut out = RenderText::new();

    let _ = match record.source {
        SourceId::Location => write!(
            out,
            "lat : {}\nlon : {}",
            field(KEY_LATITUDE),
            field(KEY_LONGITUDE)
        ),
        SourceId::NavStart => write!(
            out,
            "distance : {}\ndirection : {}",
            field(KEY_DISTANCE),
            field(KEY_DIRECTION)
        ),
        SourceId::Elevation => write!(out, "altitude : {}m", field(KEY_ALTITUDE)),
        SourceId::WeatherStatus => write!(
            out,
            "{}\n{}",
            field(KEY_STATUS),
            field(KEY_DESCRIPTION)
        ),
        SourceId::Temperature => write!(out, "{}°C", field(KEY_TEMPERATURE)),
        SourceId::Pressure => write!(out, "pressure : {}", field(KEY_PRESSURE)),
        SourceId::Humidity => write!(out, "humidity : {}", field(KEY_HUMIDITY)),
        SourceId::Wind => write!(
            out,
            "wind speed : {}km/h\nwind direction : {}",
            field(KEY_WIND_SPEED),
            field(KEY_WIND_DIRECTION)
        ),
        SourceId::Sunrise => write!(out, "sunrise :\n{}", field(KEY_SUNRISE)),
        SourceId::Sunset => write!(out, "sunset :\n{}", field(KEY_SUNSET)),
        SourceId::Transport => write!(
            out,
            "{} : {}\n{} : {}",
            field(KEY_DEPARTURE),
            field(KEY_DEPARTURE_TIME),
            field(KEY_ARRIVAL),
            field(KEY_ARRIVAL_TIME)
        ),
        // No reply schema exists for these; a record can only carry
        // them if the decoder grows a hole
        _ => write!(out, "{}", DICT_KEYS_ERROR),
    };

    out
}

/// Config-screen label for a source
pub fn source_name_text(source: SourceId) -> RenderText {
    let mut out = RenderText::new();
    let _ = out.push_str(source.name());
    out
}

/// Uptime screen text
pub fn uptime_text(up_time_s: u32) -> RenderText {
    let mut out = RenderText::new();
    let _ = write!(out, "Uptime:\n{}", format_hms(up_time_s));
    out
}

/// Active-time screen text
pub fn active_time_text(active_s: u32) -> RenderText {
    let mut out = RenderText::new();
    let _ = write!(out, "Active time:\n{}", format_hms(active_s));
    out
}

/// Battery screen text
pub fn battery_text(battery: BatterySnapshot) -> RenderText {
    let mut out = RenderText::new();
    if battery.is_charging {
        let _ = out.push_str("Battery is charging");
    } else {
        let _ = write!(out, "Battery is\n{}% charged", battery.charge_percent);
    }
    out
}

/// Screen header for a slot (1-based, as shown to the user)
pub fn slot_title(slot: usize) -> RenderText {
    let mut out = RenderText::new();
    let _ = write!(out, "Screen {}", slot + 1);
    out
}

/// The fixed reply-decode diagnostic as render text
pub fn dict_error_text() -> RenderText {
    let mut out = RenderText::new();
    let _ = out.push_str(DICT_KEYS_ERROR);
    out
}

/// The fixed source-range diagnostic as render text
pub fn item_range_error_text() -> RenderText {
    let mut out = RenderText::new();
    let _ = out.push_str(ITEM_RANGE_ERROR);
    out
}

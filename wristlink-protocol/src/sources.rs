//! Data source identifiers
//!
//! Sixteen sources drive the four display screens. Sources 0-12 are
//! answered by the phone over the link; 13-15 are rendered on the watch
//! from local state and never leave the device.

/// Number of configurable sources
pub const SOURCE_COUNT: u8 = 16;

/// A data source selectable for a display screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceId {
    /// One-shot location fix (latitude/longitude)
    Location,
    /// Pin the current location as a navigation target
    FixLocation,
    /// Start threaded navigation updates (distance/direction)
    NavStart,
    /// Stop threaded navigation updates
    NavStop,
    /// Elevation at the current position
    Elevation,
    /// Weather status and description
    WeatherStatus,
    /// Temperature
    Temperature,
    /// Barometric pressure
    Pressure,
    /// Relative humidity
    Humidity,
    /// Wind speed and direction
    Wind,
    /// Sunrise time
    Sunrise,
    /// Sunset time
    Sunset,
    /// Next transport departure/arrival
    Transport,
    /// Time since the app started (local)
    Uptime,
    /// Accumulated motion time (local)
    ActiveTime,
    /// Battery charge state (local)
    Battery,
}

/// Whether a source is answered remotely or rendered from local state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceKind {
    /// Requested from the phone over the link
    Remote,
    /// Rendered on the watch, no link traffic
    Local,
}

impl SourceId {
    /// Parse a source from its wire/persisted value
    ///
    /// Values outside 0-15 are rejected, never clamped.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(SourceId::Location),
            1 => Some(SourceId::FixLocation),
            2 => Some(SourceId::NavStart),
            3 => Some(SourceId::NavStop),
            4 => Some(SourceId::Elevation),
            5 => Some(SourceId::WeatherStatus),
            6 => Some(SourceId::Temperature),
            7 => Some(SourceId::Pressure),
            8 => Some(SourceId::Humidity),
            9 => Some(SourceId::Wind),
            10 => Some(SourceId::Sunrise),
            11 => Some(SourceId::Sunset),
            12 => Some(SourceId::Transport),
            13 => Some(SourceId::Uptime),
            14 => Some(SourceId::ActiveTime),
            15 => Some(SourceId::Battery),
            _ => None,
        }
    }

    /// Convert to the wire/persisted value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this source is remote-queried or local-only
    pub fn kind(self) -> SourceKind {
        if self.as_u8() < 13 {
            SourceKind::Remote
        } else {
            SourceKind::Local
        }
    }

    /// Returns true if this source is answered by the phone
    pub fn is_remote(self) -> bool {
        self.kind() == SourceKind::Remote
    }

    /// Configuration-screen label for this source
    pub fn name(self) -> &'static str {
        match self {
            SourceId::Location => "LOCATION",
            SourceId::FixLocation => "FIXING TARGET",
            SourceId::NavStart => "START THREAD NAVIGATION",
            SourceId::NavStop => "STOP THREAD NAVIGATION",
            SourceId::Elevation => "ELEVATION",
            SourceId::WeatherStatus => "WEATHER_STATUS",
            SourceId::Temperature => "TEMPERATURE",
            SourceId::Pressure => "PRESSURE",
            SourceId::Humidity => "HUMIDITY",
            SourceId::Wind => "WIND",
            SourceId::Sunrise => "SUNRISE",
            SourceId::Sunset => "SUNSET",
            SourceId::Transport => "TRANSPORT",
            SourceId::Uptime => "SHOW_UP_TIME",
            SourceId::ActiveTime => "SHOW_ACTIVE_TIME",
            SourceId::Battery => "SHOW_BATTERY_STATE",
        }
    }

    /// Next source with wrap-around (config cursor stepping up)
    pub fn cycle_next(self) -> Self {
        let next = (self.as_u8() + 1) % SOURCE_COUNT;
        // Always in range by construction
        Self::from_u8(next).unwrap_or(SourceId::Location)
    }

    /// Previous source with wrap-around (config cursor stepping down)
    pub fn cycle_prev(self) -> Self {
        let prev = (self.as_u8() + SOURCE_COUNT - 1) % SOURCE_COUNT;
        Self::from_u8(prev).unwrap_or(SourceId::Battery)
    }

    /// All sources in wire order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SOURCE_COUNT).filter_map(Self::from_u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_roundtrip() {
        for source in SourceId::all() {
            let value = source.as_u8();
            let parsed = SourceId::from_u8(value).unwrap();
            assert_eq!(source, parsed);
        }
    }

    #[test]
    fn test_exactly_sixteen_sources() {
        assert_eq!(SourceId::all().count(), 16);
        assert!(SourceId::from_u8(16).is_none());
        assert!(SourceId::from_u8(255).is_none());
    }

    #[test]
    fn test_kind_split() {
        for source in SourceId::all() {
            let expected = if source.as_u8() < 13 {
                SourceKind::Remote
            } else {
                SourceKind::Local
            };
            assert_eq!(source.kind(), expected);
        }
        assert!(SourceId::Transport.is_remote());
        assert!(!SourceId::Uptime.is_remote());
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(SourceId::Battery.cycle_next(), SourceId::Location);
        assert_eq!(SourceId::Location.cycle_prev(), SourceId::Battery);
        assert_eq!(SourceId::Location.cycle_next(), SourceId::FixLocation);
        assert_eq!(SourceId::Temperature.cycle_prev(), SourceId::WeatherStatus);
    }

    #[test]
    fn test_cycle_covers_all() {
        let mut cursor = SourceId::Location;
        for _ in 0..SOURCE_COUNT {
            cursor = cursor.cycle_next();
        }
        assert_eq!(cursor, SourceId::Location);
    }

    #[test]
    fn test_names_are_distinct() {
        for a in SourceId::all() {
            for b in SourceId::all() {
                if a != b {
                    assert_ne!(a.name(), b.name());
                }
            }
        }
    }
}

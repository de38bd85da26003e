//! Controller states
//!
//! Display behavior is a function of the current state and an event.
//! The state says what the output layer is currently showing and which
//! events are allowed to repaint it.

use wristlink_protocol::SourceId;

/// Which local telemetry screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LocalMode {
    /// Seconds since app start
    Uptime,
    /// Accumulated motion time
    ActiveTime,
    /// Battery charge state
    Battery,
}

impl LocalMode {
    /// Map a local-only source to its telemetry screen
    pub fn from_source(source: SourceId) -> Option<Self> {
        match source {
            SourceId::Uptime => Some(LocalMode::Uptime),
            SourceId::ActiveTime => Some(LocalMode::ActiveTime),
            SourceId::Battery => Some(LocalMode::Battery),
            _ => None,
        }
    }

    /// The source this screen renders
    pub fn source(self) -> SourceId {
        match self {
            LocalMode::Uptime => SourceId::Uptime,
            LocalMode::ActiveTime => SourceId::ActiveTime,
            LocalMode::Battery => SourceId::Battery,
        }
    }
}

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Main screen, nothing pending
    Idle,
    /// A request is out; the next inbound message answers it
    AwaitingReply,
    /// Source chooser open for the current slot
    ConfiguringSlot,
    /// A local telemetry screen is live-updating
    DisplayingLocal(LocalMode),
}

impl State {
    /// Check if a local telemetry screen owns the display
    pub fn is_local(&self) -> bool {
        matches!(self, State::DisplayingLocal(_))
    }

    /// Check if the next inbound message answers an outstanding request
    pub fn awaits_reply(&self) -> bool {
        matches!(self, State::AwaitingReply)
    }

    /// Check if the source chooser is open
    pub fn in_config(&self) -> bool {
        matches!(self, State::ConfiguringSlot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_mode_mapping() {
        assert_eq!(
            LocalMode::from_source(SourceId::Uptime),
            Some(LocalMode::Uptime)
        );
        assert_eq!(
            LocalMode::from_source(SourceId::ActiveTime),
            Some(LocalMode::ActiveTime)
        );
        assert_eq!(
            LocalMode::from_source(SourceId::Battery),
            Some(LocalMode::Battery)
        );
        assert_eq!(LocalMode::from_source(SourceId::Location), None);
        assert_eq!(LocalMode::from_source(SourceId::Transport), None);
    }

    #[test]
    fn test_local_mode_roundtrip() {
        for mode in [LocalMode::Uptime, LocalMode::ActiveTime, LocalMode::Battery] {
            assert_eq!(LocalMode::from_source(mode.source()), Some(mode));
        }
    }

    #[test]
    fn test_state_predicates() {
        assert!(State::DisplayingLocal(LocalMode::Uptime).is_local());
        assert!(!State::Idle.is_local());

        assert!(State::AwaitingReply.awaits_reply());
        assert!(!State::ConfiguringSlot.awaits_reply());

        assert!(State::ConfiguringSlot.in_config());
        assert!(!State::AwaitingReply.in_config());
    }
}

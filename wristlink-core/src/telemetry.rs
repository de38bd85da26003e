//! Local telemetry state
//!
//! Uptime and battery are rendered on the watch without any link
//! traffic. Both counters live and die with the process; surviving a
//! restart is explicitly not wanted (uptime is uptime).

/// Wall-clock uptime counter
///
/// Ticked once per second by the runtime's timer event, in every mode.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    up_time_s: u32,
}

impl ClockState {
    /// Create a zeroed clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one second
    pub fn tick(&mut self) {
        self.up_time_s = self.up_time_s.saturating_add(1);
    }

    /// Seconds since process start
    pub fn seconds(&self) -> u32 {
        self.up_time_s
    }
}

/// One battery reading, as sampled by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatterySnapshot {
    /// Charge level, 0-100
    pub charge_percent: u8,
    /// True while on the charger
    pub is_charging: bool,
}

impl BatterySnapshot {
    /// Create a snapshot from a platform reading
    pub const fn new(charge_percent: u8, is_charging: bool) -> Self {
        Self {
            charge_percent,
            is_charging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero() {
        assert_eq!(ClockState::new().seconds(), 0);
    }

    #[test]
    fn test_clock_ticks() {
        let mut clock = ClockState::new();
        for _ in 0..75 {
            clock.tick();
        }
        assert_eq!(clock.seconds(), 75);
    }

    #[test]
    fn test_clock_saturates() {
        let mut clock = ClockState { up_time_s: u32::MAX };
        clock.tick();
        assert_eq!(clock.seconds(), u32::MAX);
    }
}

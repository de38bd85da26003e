//! Active-motion classifier
//!
//! Samples arrive in fixed batches at 10 Hz. Each sample is scaled,
//! squared and compared against the gravity baseline: a watch resting
//! in any orientation reads ~1 g, so a squared norm far from (1 g)²
//! means the wrist is moving. Squaring instead of taking a root keeps
//! the whole path in integer math.

use heapless::{String, Vec};

/// Samples per accelerometer batch (10 Hz, one batch per second)
pub const ACCEL_BATCH: usize = 10;

/// Raw axis divisor applied before squaring, bounds the norm
pub const AXIS_DIVISOR: i32 = 10;

/// (1 g)² after scaling
pub const GRAVITY_SQ: i32 = 10_000;

/// Band half-width around the gravity baseline
pub const MOTION_THRESHOLD: i32 = 8_000;

/// Active ticks per second (one tick per sample)
pub const TICKS_PER_SECOND: u32 = 10;

/// One raw 3-axis accelerometer reading, in milli-g
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl AccelSample {
    /// Create a sample from raw axis readings
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Squared norm after axis scaling
    ///
    /// Raw axes span ±4000; divided by 10 the squared sum stays well
    /// inside i32.
    fn norm_sq(&self) -> i32 {
        let x = self.x as i32 / AXIS_DIVISOR;
        let y = self.y as i32 / AXIS_DIVISOR;
        let z = self.z as i32 / AXIS_DIVISOR;
        x * x + y * y + z * z
    }

    /// True if this sample is outside the resting-gravity band
    fn is_active(&self) -> bool {
        (self.norm_sq() - GRAVITY_SQ).abs() > MOTION_THRESHOLD
    }
}

/// Accumulating motion classifier
///
/// `active_ticks` counts samples classified as motion since process
/// start. It is monotonically non-decreasing, never persisted and
/// never reset; active time is defined relative to process lifetime.
#[derive(Debug, Clone, Default)]
pub struct MotionClassifier {
    window: Vec<AccelSample, ACCEL_BATCH>,
    active_ticks: u32,
}

impl MotionClassifier {
    /// Create a classifier with an empty window and zero active time
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a batch, retaining it as the current sample window
    ///
    /// Returns the number of samples outside the gravity band. Does
    /// not touch the accumulated counter.
    pub fn classify(&mut self, samples: &[AccelSample]) -> u8 {
        self.window.clear();
        // Window capacity equals the batch size
        let _ = self.window.extend_from_slice(&samples[..samples.len().min(ACCEL_BATCH)]);

        self.window.iter().filter(|s| s.is_active()).count() as u8
    }

    /// Add classified ticks to the running counter
    pub fn accumulate(&mut self, count: u8) {
        self.active_ticks = self.active_ticks.saturating_add(count as u32);
    }

    /// Classify a batch and accumulate its active count
    pub fn ingest(&mut self, samples: &[AccelSample]) -> u8 {
        let count = self.classify(samples);
        self.accumulate(count);
        count
    }

    /// Raw accumulated tick count (1 tick = 1/10 s)
    pub fn active_ticks(&self) -> u32 {
        self.active_ticks
    }

    /// Accumulated active time in whole seconds
    pub fn active_seconds(&self) -> u32 {
        self.active_ticks / TICKS_PER_SECOND
    }

    /// The most recently classified batch
    pub fn window(&self) -> &[AccelSample] {
        &self.window
    }

    /// Accumulated active time as `"{h}h {m}m {s}s"`
    pub fn format_elapsed(&self) -> String<24> {
        crate::render::format_hms(self.active_seconds())
    }
}

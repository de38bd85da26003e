//! Motion classification
//!
//! Turns raw accelerometer batches into an accumulated "active time"
//! estimate.

pub mod classifier;

pub use classifier::{
    AccelSample, MotionClassifier, ACCEL_BATCH, AXIS_DIVISOR, GRAVITY_SQ, MOTION_THRESHOLD,
    TICKS_PER_SECOND,
};

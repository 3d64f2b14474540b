//! Exponential smoothing of raw motion samples
//!
//! Each axis is smoothed independently:
//!
//! ```text
//! filtered[n] = filtered[n-1] + α × (raw[n] − filtered[n-1]),  α = 0.25
//! ```
//!
//! The step is computed in `f32` and narrowed to `i16` by truncation toward
//! zero. The `f32` result is exact for every pair of `i16` inputs, so the
//! narrowing is the only rounding in the pipeline. Because of it, a constant
//! input is approached to within 3 counts, not reached exactly.

use crate::devices::traits::{Motion6Reading, Vector3i16};

/// Smoothing factor: weight of the newest raw sample
pub const SMOOTHING_ALPHA: f32 = 0.25;

/// One smoothing step without narrowing
pub fn smooth(previous: f32, raw: f32) -> f32 {
    previous + SMOOTHING_ALPHA * (raw - previous)
}

/// One smoothing step on raw counts, truncated toward zero
pub fn smooth_axis(previous: i16, raw: i16) -> i16 {
    // The result lies between `previous` and `raw`, so the cast never saturates
    smooth(previous as f32, raw as f32) as i16
}

/// Smoothed acceleration and angular rate with previous-cycle snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionFilter {
    accel: Vector3i16,
    gyro: Vector3i16,
    prev_accel: Vector3i16,
    prev_gyro: Vector3i16,
}

impl MotionFilter {
    /// Create a filter with all state at zero
    pub fn new() -> Self {
        Self {
            accel: Vector3i16::zeros(),
            gyro: Vector3i16::zeros(),
            prev_accel: Vector3i16::zeros(),
            prev_gyro: Vector3i16::zeros(),
        }
    }

    /// Feed one raw sample
    ///
    /// Snapshots the current filtered values into the previous-cycle vectors,
    /// then applies one smoothing step per axis.
    pub fn apply(&mut self, raw: &Motion6Reading) {
        self.prev_accel = self.accel;
        self.prev_gyro = self.gyro;

        self.accel = self.prev_accel.zip_map(&raw.accel, smooth_axis);
        self.gyro = self.prev_gyro.zip_map(&raw.gyro, smooth_axis);
    }

    /// Zero the filtered values
    ///
    /// The previous-cycle snapshots are left as they are; the next `apply`
    /// overwrites them with the zeroed values.
    pub fn reset(&mut self) {
        self.accel = Vector3i16::zeros();
        self.gyro = Vector3i16::zeros();
    }

    /// Filtered linear acceleration
    pub fn accel(&self) -> &Vector3i16 {
        &self.accel
    }

    /// Filtered angular rate
    pub fn gyro(&self) -> &Vector3i16 {
        &self.gyro
    }

    /// Filtered linear acceleration from the previous cycle
    pub fn prev_accel(&self) -> &Vector3i16 {
        &self.prev_accel
    }

    /// Filtered angular rate from the previous cycle
    pub fn prev_gyro(&self) -> &Vector3i16 {
        &self.prev_gyro
    }
}

impl Default for MotionFilter {
    fn default() -> Self {
        Self::new()
    }
}

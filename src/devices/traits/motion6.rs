//! Raw 6-axis Motion Sensor Trait
//!
//! Device-independent interface for accelerometer + gyroscope chips that are
//! read as raw signed 16-bit counts (no on-chip fusion). The motion subsystem
//! only needs a combined read, the configuration setters applied at setup, and
//! the sleep toggle used by mode control.
//!
//! ## Usage
//!
//! ```ignore
//! use keyglove_motion::devices::traits::{Motion6Sensor, ImuError};
//!
//! fn sample<S: Motion6Sensor>(sensor: &mut S) -> Result<(), ImuError> {
//!     let reading = sensor.read_motion6()?;
//!     // reading.accel, reading.gyro in raw counts
//!     Ok(())
//! }
//! ```

use core::fmt;

use crate::devices::imu::mpu6050::config::{
    DlpfBandwidth, GyroRange, InterruptConfig, Mpu6050Config,
};
use nalgebra::Vector3;

/// Three signed 16-bit components (x, y, z) in raw sensor counts
pub type Vector3i16 = Vector3<i16>;

/// Motion sensor error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuError {
    /// I2C communication failed
    I2cError,

    /// Data validation failed (e.g., unexpected WHO_AM_I)
    InvalidData,

    /// Driver not initialized
    NotInitialized,
}

impl fmt::Display for ImuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImuError::I2cError => write!(f, "sensor bus communication failed"),
            ImuError::InvalidData => write!(f, "sensor returned invalid data"),
            ImuError::NotInitialized => write!(f, "sensor not initialized"),
        }
    }
}

/// One combined raw read of all six axes
///
/// Both vectors come from the same output-register burst, so acceleration and
/// angular rate always belong to the same sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion6Reading {
    /// Linear acceleration, raw counts
    pub accel: Vector3i16,

    /// Angular rate, raw counts
    pub gyro: Vector3i16,
}

impl Default for Motion6Reading {
    fn default() -> Self {
        Self {
            accel: Vector3::zeros(),
            gyro: Vector3::zeros(),
        }
    }
}

impl Motion6Reading {
    /// Build a reading from the six axis values in register order
    pub fn new(ax: i16, ay: i16, az: i16, gx: i16, gy: i16, gz: i16) -> Self {
        Self {
            accel: Vector3::new(ax, ay, az),
            gyro: Vector3::new(gx, gy, gz),
        }
    }
}

/// Raw 6-axis motion sensor interface
pub trait Motion6Sensor {
    /// Reset and wake the chip into its power-on configuration
    fn initialize(&mut self) -> Result<(), ImuError>;

    /// Read acceleration and angular rate in one burst
    fn read_motion6(&mut self) -> Result<Motion6Reading, ImuError>;

    /// Set sample rate divider: rate = internal rate / (1 + divider)
    fn set_rate_divider(&mut self, divider: u8) -> Result<(), ImuError>;

    /// Set the digital low-pass filter bandwidth
    fn set_dlpf_bandwidth(&mut self, bandwidth: DlpfBandwidth) -> Result<(), ImuError>;

    /// Set gyroscope full-scale range
    fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), ImuError>;

    /// Set INT pin electrical/latching behaviour and interrupt sources
    fn set_interrupt_config(&mut self, config: InterruptConfig) -> Result<(), ImuError>;

    /// Enter (`true`) or leave (`false`) low-power sleep
    fn set_sleep_enabled(&mut self, enabled: bool) -> Result<(), ImuError>;

    /// Whether the chip is currently in low-power sleep
    fn sleep_enabled(&self) -> bool;

    /// Apply a full configuration
    ///
    /// Order follows the chip's recommended sequence: gyro range, low-pass
    /// filter, sample rate, then interrupt configuration.
    fn configure(&mut self, config: &Mpu6050Config) -> Result<(), ImuError> {
        self.set_gyro_range(config.gyro_range)?;
        self.set_dlpf_bandwidth(config.dlpf)?;
        self.set_rate_divider(config.sample_rate_div)?;
        self.set_interrupt_config(config.interrupt)?;
        Ok(())
    }
}

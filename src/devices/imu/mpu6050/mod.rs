//! MPU-6050 6-axis motion sensor
//!
//! Register map and typed configuration for the InvenSense MPU-6050 mounted on
//! the back of the hand. The register-level bus driver is provided by the
//! board support layer through [`Motion6Sensor`](crate::devices::traits::Motion6Sensor).
//!
//! ## Default Configuration
//!
//! - Gyroscope: ±2000 °/s
//! - DLPF: 42 Hz (1 kHz internal sampling)
//! - Sample rate: 1 kHz / (9 + 1) = 100 Hz
//! - INT: active low, open drain, 50 µs pulse, cleared on any read, data ready

pub mod config;
pub mod registers;

pub use config::{DlpfBandwidth, GyroRange, InterruptConfig, Mpu6050Config};

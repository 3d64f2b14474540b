//! Device drivers
//!
//! ## Modules
//!
//! - `imu`: Motion sensor configuration (MPU-6050) and mock sensor
//! - `traits`: Device trait definitions (Motion6Sensor)

pub mod imu;
pub mod traits;

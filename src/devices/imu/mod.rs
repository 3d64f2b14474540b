//! Motion sensors
//!
//! ## Available Modules
//!
//! - `mpu6050`: MPU-6050 register map and configuration values
//! - `mock`: Mock 6-axis sensor for testing (always available)

pub mod mock;
pub mod mpu6050;

pub use mock::MockMotion6;
pub use mpu6050::Mpu6050Config;

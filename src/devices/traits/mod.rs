//! Device traits
//!
//! This module contains hardware-independent trait definitions for device drivers.
//! These traits enable:
//! - Unit testing with mock implementations
//! - Sensor independence for the motion subsystem

pub mod motion6;

pub use motion6::{ImuError, Motion6Reading, Motion6Sensor, Vector3i16};

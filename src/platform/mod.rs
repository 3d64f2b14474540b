//! Platform abstraction layer
//!
//! This module provides the hardware services the motion pipeline needs from a
//! microcontroller: an interrupt-capable input pin for the sensor's INT line and
//! a blocking timer for power-up delays.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{GpioMode, InterruptEdge, InterruptPin, TimerInterface};

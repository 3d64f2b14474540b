//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use keyglove_motion::core::InterruptLatch;
//! use keyglove_motion::platform::mock::MockInterruptPin;
//! use keyglove_motion::platform::traits::{InterruptEdge, InterruptPin};
//!
//! let latch = InterruptLatch::new();
//! let mut pin = MockInterruptPin::new();
//! pin.attach_interrupt(InterruptEdge::Falling)?;
//! pin.simulate_edge(InterruptEdge::Falling, &latch);
//! assert!(latch.is_set());
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod timer;

pub use gpio::MockInterruptPin;
pub use timer::MockTimer;

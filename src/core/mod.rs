//! Core infrastructure
//!
//! This module contains the pieces shared by every layer of the motion pipeline:
//! the interrupt latch that hands data-ready signals to the main loop, and the
//! logging macros.

pub mod latch;
pub mod logging;

pub use latch::InterruptLatch;

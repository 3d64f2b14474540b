#![cfg_attr(not(test), no_std)]

//! keyglove_motion - Hand-mounted motion sensor support for the Keyglove controller
//!
//! This library provides the acquisition pipeline for the MPU-6050 mounted on the
//! back of the hand: data-ready interrupt latching, exponential smoothing of raw
//! acceleration and angular rate, and emission of KGAPI motion event packets.
//!
//! # Modules
//!
//! - [`platform`]: GPIO interrupt pin and timer abstractions (plus mocks)
//! - [`devices`]: Motion sensor trait and MPU-6050 configuration
//! - [`core`]: Interrupt latch and logging macros
//! - [`communication`]: KGAPI motion packet encoding and emission
//! - [`subsystems`]: Hand motion acquisition cycle and mode control

// Platform abstraction layer
pub mod platform;

// Device traits and sensor configuration
pub mod devices;

// Core infrastructure (latch, logging)
pub mod core;

// KGAPI host protocol
pub mod communication;

// Motion acquisition subsystem
pub mod subsystems;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging

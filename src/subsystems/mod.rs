//! Subsystems
//!
//! - `motion`: Hand-mounted motion sensor acquisition and mode control

pub mod motion;

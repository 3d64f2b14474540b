//! Hand motion subsystem
//!
//! Ties the sensor, its data-ready interrupt and the KGAPI motion events together.
//!
//! # Control Flow
//!
//! ```text
//! set_mode(true) ──► arm INT (falling) ──► sensor asserts INT
//!                                              │
//!                                              ▼
//!                                     InterruptLatch::signal()
//!                                              │
//!  main loop: poll() ──► update(): clear latch ─► read raw ─► snapshot
//!                                              ─► smooth ─► emit motion_data
//! ```

pub mod filter;
pub mod hand;

pub use filter::{MotionFilter, SMOOTHING_ALPHA};
pub use hand::{HandMotion, MotionError};

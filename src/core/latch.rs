//! Interrupt latch
//!
//! Single-bit signal from the sensor's data-ready interrupt to the polling main
//! loop. The interrupt handler only ever sets the flag; the acquisition cycle
//! is the only code that clears it.
//!
//! # Usage
//!
//! ```ignore
//! use keyglove_motion::core::InterruptLatch;
//!
//! static HAND_MOTION_LATCH: InterruptLatch = InterruptLatch::new();
//!
//! // Interrupt context (falling edge on the INT line)
//! fn on_hand_motion_interrupt() {
//!     HAND_MOTION_LATCH.signal();
//! }
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

/// Data-ready flag shared between interrupt context and the main loop
///
/// Only plain atomic loads and stores are used, so the latch also works on
/// cores without compare-and-swap (e.g. Cortex-M0+).
#[derive(Debug)]
pub struct InterruptLatch {
    pending: AtomicBool,
}

impl InterruptLatch {
    /// Create a cleared latch (const for static initialization)
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Set the latch
    ///
    /// This is the entire interrupt handler body: one store, no I/O, cannot fail.
    /// Repeated signals before the latch is consumed collapse into one.
    #[inline]
    pub fn signal(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Check whether the latch is set without consuming it
    #[inline]
    pub fn is_set(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Clear the latch
    #[inline]
    pub fn clear(&self) {
        self.pending.store(false, Ordering::Release);
    }

    /// Consume the latch, returning whether it was set
    ///
    /// For loops that drive `HandMotion::update` themselves; `HandMotion::poll`
    /// only observes the latch and leaves clearing to the cycle. A signal
    /// arriving between the load and the store is merged into the one being
    /// consumed, and the cycle that follows reads the newest sample.
    pub fn take(&self) -> bool {
        if self.is_set() {
            self.clear();
            true
        } else {
            false
        }
    }
}

impl Default for InterruptLatch {
    fn default() -> Self {
        Self::new()
    }
}

//! Blocking delay and monotonic clock used during sensor bring-up

use crate::platform::error::{PlatformError, TimerError};
use crate::platform::Result;

/// Timer interface trait
///
/// The motion pipeline only blocks during setup (the settle time after the
/// sensor is initialized), so a busy-wait implementation is sufficient.
pub trait TimerInterface {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for at least `ms` milliseconds
    ///
    /// # Errors
    ///
    /// Returns `TimerError::Overflow` if `ms` does not fit in a `u32`
    /// microsecond count (more than ~71 minutes).
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        let us = ms
            .checked_mul(1000)
            .ok_or(PlatformError::Timer(TimerError::Overflow))?;
        self.delay_us(us)
    }

    /// Microseconds since platform initialization
    fn now_us(&self) -> u64;

    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}

//! Simulated clock for testing

use crate::platform::{traits::TimerInterface, Result};

/// Mock timer
///
/// Delays advance the simulated clock instantly and are counted, so tests can
/// check how long (and how often) the code under test blocked.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
    delay_count: u32,
}

impl MockTimer {
    /// Create a mock timer at t = 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed delay calls
    pub fn delay_count(&self) -> u32 {
        self.delay_count
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.now_us = self.now_us.saturating_add(us as u64);
        self.delay_count += 1;
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}

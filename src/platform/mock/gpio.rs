//! Mock interrupt pin implementation for testing

use crate::core::InterruptLatch;
use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioMode, InterruptEdge, InterruptPin},
    Result,
};

/// Mock interrupt pin
///
/// Tracks pin level, mode and arming state for test verification, and routes
/// simulated edges into a latch the way the platform's interrupt vector would.
#[derive(Debug)]
pub struct MockInterruptPin {
    level: bool,
    mode: GpioMode,
    armed: Option<InterruptEdge>,
    attach_count: u32,
    detach_count: u32,
    fail_attach: bool,
}

impl MockInterruptPin {
    /// Create a new mock pin in floating input mode, idle low, disarmed
    pub fn new() -> Self {
        Self {
            level: false,
            mode: GpioMode::Input,
            armed: None,
            attach_count: 0,
            detach_count: 0,
            fail_attach: false,
        }
    }

    /// Make subsequent `attach_interrupt` calls fail (line already in use)
    pub fn set_fail_attach(&mut self, fail: bool) {
        self.fail_attach = fail;
    }

    /// Number of successful `attach_interrupt` calls
    pub fn attach_count(&self) -> u32 {
        self.attach_count
    }

    /// Number of `detach_interrupt` calls
    pub fn detach_count(&self) -> u32 {
        self.detach_count
    }

    /// Simulate a signal transition on the pin
    ///
    /// Updates the pin level and, if the interrupt is armed for this edge,
    /// runs the handler by signalling `latch`. Returns whether it fired.
    pub fn simulate_edge(&mut self, edge: InterruptEdge, latch: &InterruptLatch) -> bool {
        match edge {
            InterruptEdge::Falling => self.level = false,
            InterruptEdge::Rising => self.level = true,
            InterruptEdge::Both => self.level = !self.level,
        }

        match self.armed {
            Some(armed) if armed.matches(edge) => {
                latch.signal();
                true
            }
            _ => false,
        }
    }
}

impl Default for MockInterruptPin {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptPin for MockInterruptPin {
    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode = mode;
        // A pulled-up input idles high until the sensor drives it
        self.level = mode == GpioMode::InputPullUp;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }

    fn read(&self) -> bool {
        self.level
    }

    fn attach_interrupt(&mut self, edge: InterruptEdge) -> Result<()> {
        if self.fail_attach {
            return Err(PlatformError::Gpio(GpioError::InterruptInUse));
        }
        self.armed = Some(edge);
        self.attach_count += 1;
        Ok(())
    }

    fn detach_interrupt(&mut self) -> Result<()> {
        self.armed = None;
        self.detach_count += 1;
        Ok(())
    }

    fn armed_edge(&self) -> Option<InterruptEdge> {
        self.armed
    }
}

//! GPIO interrupt pin trait
//!
//! This module defines the interrupt-capable input pin that carries the motion
//! sensor's INT signal. The platform routes the pin's interrupt vector to the
//! handler registered for it (typically a function that calls
//! [`InterruptLatch::signal`](crate::core::InterruptLatch::signal)).

use crate::platform::Result;

/// GPIO pin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioMode {
    /// Input mode (high impedance)
    Input,
    /// Input mode with pull-up resistor
    InputPullUp,
    /// Input mode with pull-down resistor
    InputPullDown,
}

/// Signal edge that triggers the pin interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptEdge {
    /// High to low transition (active-low data ready)
    Falling,
    /// Low to high transition
    Rising,
    /// Either transition
    Both,
}

impl InterruptEdge {
    /// Whether an interrupt armed on `self` fires for a transition on `edge`
    pub fn matches(self, edge: InterruptEdge) -> bool {
        match self {
            InterruptEdge::Both => true,
            armed => armed == edge || edge == InterruptEdge::Both,
        }
    }
}

/// Interrupt-capable input pin
///
/// # Safety Invariants
///
/// - Only one owner per pin instance
/// - The registered handler must be safe to run in interrupt context
pub trait InterruptPin {
    /// Set pin input mode
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the mode cannot be set.
    fn set_mode(&mut self, mode: GpioMode) -> Result<()>;

    /// Get current pin mode
    fn mode(&self) -> GpioMode;

    /// Read pin level (`true` = high)
    fn read(&self) -> bool;

    /// Arm the pin interrupt for the given edge
    ///
    /// Arming an already armed pin replaces its edge selection.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the interrupt line is unavailable.
    fn attach_interrupt(&mut self, edge: InterruptEdge) -> Result<()>;

    /// Disarm the pin interrupt
    ///
    /// Disarming a pin that is not armed is a no-op.
    fn detach_interrupt(&mut self) -> Result<()>;

    /// Edge the interrupt is currently armed on, if any
    fn armed_edge(&self) -> Option<InterruptEdge>;

    /// Whether the interrupt is currently armed
    fn is_armed(&self) -> bool {
        self.armed_edge().is_some()
    }
}

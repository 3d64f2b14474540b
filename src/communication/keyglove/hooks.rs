//! Application override hooks for motion events
//!
//! The host application may intercept each motion event before it reaches the
//! transport. A hook returns `true` to skip the default transport for that one
//! event; the decision is made fresh on every emission.
//!
//! Hooks run synchronously on the acquisition path: they must not block.

/// Override hooks for motion-class events
///
/// Both methods default to "never skip", so an implementation only overrides
/// the events it cares about.
pub trait MotionEventOverride {
    /// Called before a `motion_mode` event is sent
    fn on_motion_mode(&mut self, _sensor: u8, _mode: u8) -> bool {
        false
    }

    /// Called before a `motion_data` event is sent
    ///
    /// `data` is the `data_len`-byte axis block (little-endian `i16` × 6).
    fn on_motion_data(&mut self, _sensor: u8, _flags: u8, _data_len: u8, _data: &[u8]) -> bool {
        false
    }
}

/// No hooks installed
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOverride;

impl MotionEventOverride for NoOverride {}

/// `motion_mode` callback signature
pub type MotionModeHook = fn(sensor: u8, mode: u8) -> bool;

/// `motion_data` callback signature
pub type MotionDataHook = fn(sensor: u8, flags: u8, data_len: u8, data: &[u8]) -> bool;

/// Hooks registered as plain function pointers
///
/// Either callback may be left unset, which behaves as "never skip".
#[derive(Default, Clone, Copy)]
pub struct FnOverride {
    pub motion_mode: Option<MotionModeHook>,
    pub motion_data: Option<MotionDataHook>,
}

impl FnOverride {
    /// No callbacks registered
    pub const fn new() -> Self {
        Self {
            motion_mode: None,
            motion_data: None,
        }
    }

    /// Register the `motion_mode` callback
    pub const fn with_motion_mode(mut self, hook: MotionModeHook) -> Self {
        self.motion_mode = Some(hook);
        self
    }

    /// Register the `motion_data` callback
    pub const fn with_motion_data(mut self, hook: MotionDataHook) -> Self {
        self.motion_data = Some(hook);
        self
    }
}

impl MotionEventOverride for FnOverride {
    fn on_motion_mode(&mut self, sensor: u8, mode: u8) -> bool {
        self.motion_mode.is_some_and(|hook| hook(sensor, mode))
    }

    fn on_motion_data(&mut self, sensor: u8, flags: u8, data_len: u8, data: &[u8]) -> bool {
        self.motion_data
            .is_some_and(|hook| hook(sensor, flags, data_len, data))
    }
}

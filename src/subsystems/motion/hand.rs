//! Hand-mounted MPU-6050 acquisition and mode control
//!
//! [`HandMotion`] is the explicit context for the hand sensor: it owns the
//! sensor, its INT pin, the packet transport and the override hooks, and
//! borrows the [`InterruptLatch`] that the pin's interrupt handler sets.
//!
//! # Usage
//!
//! ```ignore
//! static HAND_LATCH: InterruptLatch = InterruptLatch::new();
//!
//! let mut motion = HandMotion::new(sensor, int_pin, transport, NoOverride, &HAND_LATCH);
//! motion.setup(&mut timer)?;
//! motion.set_mode(true);
//!
//! loop {
//!     motion.poll();
//!     // ... other main loop work ...
//! }
//! ```
//!
//! # Latch Policy
//!
//! `update` clears the latch on entry, before the sensor read. An interrupt
//! that fires while the cycle runs leaves the latch set and schedules the next
//! cycle instead of being lost.

use core::fmt;

use crate::communication::keyglove::emitter::{emit_motion_data, emit_motion_mode};
use crate::communication::keyglove::hooks::MotionEventOverride;
use crate::communication::keyglove::packet::SENSOR_INDEX;
use crate::communication::keyglove::transport::PacketTransport;
use crate::core::InterruptLatch;
use crate::devices::imu::mpu6050::Mpu6050Config;
use crate::devices::traits::{ImuError, Motion6Sensor, Vector3i16};
use crate::platform::traits::{GpioMode, InterruptEdge, InterruptPin, TimerInterface};
use crate::platform::PlatformError;

use super::filter::MotionFilter;

/// Settling time after sensor initialization before configuration writes
pub const SETUP_DELAY_MS: u32 = 30;

/// INT edge signalling new data (sensor INT is active low)
pub const DATA_READY_EDGE: InterruptEdge = InterruptEdge::Falling;

/// Consecutive read failures before the sensor is reported unhealthy
const MAX_CONSECUTIVE_ERRORS: u32 = 3;

/// Errors surfaced by [`HandMotion::setup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionError {
    /// Sensor initialization or configuration failed
    Sensor(ImuError),
    /// INT pin or timer operation failed
    Platform(PlatformError),
}

impl From<ImuError> for MotionError {
    fn from(e: ImuError) -> Self {
        MotionError::Sensor(e)
    }
}

impl From<PlatformError> for MotionError {
    fn from(e: PlatformError) -> Self {
        MotionError::Platform(e)
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::Sensor(e) => write!(f, "motion sensor: {}", e),
            MotionError::Platform(e) => write!(f, "motion platform: {}", e),
        }
    }
}

/// Hand motion acquisition context
pub struct HandMotion<'a, S, P, T, O> {
    sensor: S,
    int_pin: P,
    transport: T,
    hooks: O,
    latch: &'a InterruptLatch,
    filter: MotionFilter,
    error_count: u32,
}

impl<'a, S, P, T, O> HandMotion<'a, S, P, T, O>
where
    S: Motion6Sensor,
    P: InterruptPin,
    T: PacketTransport,
    O: MotionEventOverride,
{
    /// Create the context; no hardware is touched until [`setup`](Self::setup)
    pub fn new(sensor: S, int_pin: P, transport: T, hooks: O, latch: &'a InterruptLatch) -> Self {
        Self {
            sensor,
            int_pin,
            transport,
            hooks,
            latch,
            filter: MotionFilter::new(),
            error_count: 0,
        }
    }

    /// Configure the INT pin and the sensor
    ///
    /// Sets the pin to pulled-up input (the sensor drives an open-drain,
    /// active-low line), clears the latch, initializes the sensor, waits
    /// [`SETUP_DELAY_MS`] and applies [`Mpu6050Config::default`]. The sensor is
    /// left asleep with the interrupt disarmed; call `set_mode(true)` to start.
    pub fn setup<D: TimerInterface>(&mut self, timer: &mut D) -> Result<(), MotionError> {
        self.int_pin.set_mode(GpioMode::InputPullUp)?;
        self.latch.clear();

        self.sensor.initialize()?;
        timer.delay_ms(SETUP_DELAY_MS)?;

        let config = Mpu6050Config::default();
        self.sensor.configure(&config)?;
        self.sensor.set_sleep_enabled(true)?;

        crate::log_info!(
            "Hand MPU-6050 configured: {} Hz, DLPF {:?}, gyro {:?}",
            config.sample_rate_hz(),
            config.dlpf,
            config.gyro_range
        );
        Ok(())
    }

    /// Enable or disable motion acquisition
    ///
    /// Enabling zeroes the filtered vectors, forces the latch so the next
    /// `poll` runs a cycle immediately, arms the INT falling edge and wakes the
    /// sensor. Disabling puts the sensor to sleep and disarms the interrupt.
    ///
    /// A `motion_mode` event is emitted unless the transport is inside a
    /// received binary packet. Hardware failures are logged and do not stop
    /// the remaining steps.
    pub fn set_mode(&mut self, enabled: bool) {
        if enabled {
            self.filter.reset();
            self.latch.signal();
            if let Err(e) = self.int_pin.attach_interrupt(DATA_READY_EDGE) {
                crate::log_warn!("Hand motion: failed to arm INT: {}", e);
            }
            if let Err(e) = self.sensor.set_sleep_enabled(false) {
                crate::log_warn!("Hand motion: failed to wake sensor: {}", e);
            }
        } else {
            if let Err(e) = self.sensor.set_sleep_enabled(true) {
                crate::log_warn!("Hand motion: failed to sleep sensor: {}", e);
            }
            if let Err(e) = self.int_pin.detach_interrupt() {
                crate::log_warn!("Hand motion: failed to disarm INT: {}", e);
            }
        }

        crate::log_info!("Hand motion {}", if enabled { "enabled" } else { "disabled" });

        if !self.transport.in_bin_packet() {
            emit_motion_mode(
                &mut self.transport,
                &mut self.hooks,
                SENSOR_INDEX,
                enabled as u8,
            );
        }
    }

    /// Run one acquisition cycle
    ///
    /// Call whenever the latch is observed set. Clears the latch, reads all six
    /// axes, smooths them and emits a `motion_data` event. A failed read is
    /// logged and leaves the filter untouched with no event.
    pub fn update(&mut self) {
        self.latch.clear();

        let raw = match self.sensor.read_motion6() {
            Ok(raw) => {
                self.error_count = 0;
                raw
            }
            Err(e) => {
                self.error_count = self.error_count.saturating_add(1);
                crate::log_warn!(
                    "Hand motion read failed ({} consecutive): {}",
                    self.error_count,
                    e
                );
                return;
            }
        };

        self.filter.apply(&raw);

        let accel = *self.filter.accel();
        let gyro = *self.filter.gyro();
        crate::log_trace!(
            "Hand motion a=({}, {}, {}) g=({}, {}, {})",
            accel.x,
            accel.y,
            accel.z,
            gyro.x,
            gyro.y,
            gyro.z
        );

        emit_motion_data(&mut self.transport, &mut self.hooks, &accel, &gyro);
    }

    /// Main loop entry point: run a cycle if the latch is set
    ///
    /// Returns whether a cycle ran. The latch is only observed here; `update`
    /// clears it, so an interrupt during the read re-arms the next poll.
    pub fn poll(&mut self) -> bool {
        if self.latch.is_set() {
            self.update();
            true
        } else {
            false
        }
    }

    /// Whether acquisition is enabled (interrupt armed and sensor awake)
    pub fn is_enabled(&self) -> bool {
        self.int_pin.is_armed() && !self.sensor.sleep_enabled()
    }

    /// Whether recent sensor reads have been succeeding
    pub fn is_healthy(&self) -> bool {
        self.error_count < MAX_CONSECUTIVE_ERRORS
    }

    /// Filtered linear acceleration
    pub fn accel(&self) -> &Vector3i16 {
        self.filter.accel()
    }

    /// Filtered angular rate
    pub fn gyro(&self) -> &Vector3i16 {
        self.filter.gyro()
    }

    /// Full filter state
    pub fn filter(&self) -> &MotionFilter {
        &self.filter
    }

    /// The latch shared with the INT handler
    pub fn latch(&self) -> &'a InterruptLatch {
        self.latch
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn int_pin(&self) -> &P {
        &self.int_pin
    }

    pub fn int_pin_mut(&mut self) -> &mut P {
        &mut self.int_pin
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn hooks_mut(&mut self) -> &mut O {
        &mut self.hooks
    }

    /// Release the owned collaborators
    pub fn into_parts(self) -> (S, P, T, O) {
        (self.sensor, self.int_pin, self.transport, self.hooks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::communication::keyglove::hooks::NoOverride;
    use crate::communication::keyglove::mock::MockTransport;
    use crate::communication::keyglove::packet::PacketId;
    use crate::devices::imu::mpu6050::{DlpfBandwidth, GyroRange, InterruptConfig};
    use crate::devices::imu::MockMotion6;
    use crate::devices::traits::Motion6Reading;
    use crate::platform::mock::{MockInterruptPin, MockTimer};
    use nalgebra::Vector3;

    type TestMotion<'a, O = NoOverride> =
        HandMotion<'a, MockMotion6, MockInterruptPin, MockTransport, O>;

    /// Hooks with a switchable skip decision, counting calls
    #[derive(Default)]
    struct SwitchHooks {
        skip_mode: bool,
        skip_data: bool,
        mode_calls: u32,
        data_calls: u32,
    }

    impl MotionEventOverride for SwitchHooks {
        fn on_motion_mode(&mut self, _sensor: u8, _mode: u8) -> bool {
            self.mode_calls += 1;
            self.skip_mode
        }

        fn on_motion_data(&mut self, _sensor: u8, _flags: u8, _len: u8, _data: &[u8]) -> bool {
            self.data_calls += 1;
            self.skip_data
        }
    }

    /// Sensor whose read overlaps the next data-ready interrupt
    struct InterruptDuringRead<'a> {
        inner: MockMotion6,
        latch: &'a InterruptLatch,
    }

    impl Motion6Sensor for InterruptDuringRead<'_> {
        fn initialize(&mut self) -> Result<(), ImuError> {
            self.inner.initialize()
        }

        fn read_motion6(&mut self) -> Result<Motion6Reading, ImuError> {
            self.latch.signal();
            self.inner.read_motion6()
        }

        fn set_rate_divider(&mut self, divider: u8) -> Result<(), ImuError> {
            self.inner.set_rate_divider(divider)
        }

        fn set_dlpf_bandwidth(&mut self, bandwidth: DlpfBandwidth) -> Result<(), ImuError> {
            self.inner.set_dlpf_bandwidth(bandwidth)
        }

        fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), ImuError> {
            self.inner.set_gyro_range(range)
        }

        fn set_interrupt_config(&mut self, config: InterruptConfig) -> Result<(), ImuError> {
            self.inner.set_interrupt_config(config)
        }

        fn set_sleep_enabled(&mut self, enabled: bool) -> Result<(), ImuError> {
            self.inner.set_sleep_enabled(enabled)
        }

        fn sleep_enabled(&self) -> bool {
            self.inner.sleep_enabled()
        }
    }

    fn motion_with<'a>(latch: &'a InterruptLatch, readings: &[Motion6Reading]) -> TestMotion<'a> {
        let mut motion = HandMotion::new(
            MockMotion6::with_readings(readings),
            MockInterruptPin::new(),
            MockTransport::new(),
            NoOverride,
            latch,
        );
        motion.setup(&mut MockTimer::new()).unwrap();
        motion
    }

    #[test]
    fn test_setup_configures_sensor_and_pin() {
        let latch = InterruptLatch::new();
        latch.signal();
        let mut timer = MockTimer::new();
        let mut motion = HandMotion::new(
            MockMotion6::with_default_reading(),
            MockInterruptPin::new(),
            MockTransport::new(),
            NoOverride,
            &latch,
        );

        motion.setup(&mut timer).unwrap();

        let sensor = motion.sensor();
        assert!(sensor.is_initialized());
        assert_eq!(sensor.gyro_range(), Some(GyroRange::Dps2000));
        assert_eq!(sensor.dlpf(), Some(DlpfBandwidth::Bw42Hz));
        assert_eq!(sensor.rate_divider(), Some(9));
        assert_eq!(sensor.interrupt_config(), Some(InterruptConfig::default()));
        assert!(sensor.sleep_enabled());

        assert_eq!(motion.int_pin().mode(), GpioMode::InputPullUp);
        assert!(!motion.int_pin().is_armed());
        assert!(!latch.is_set());
        assert_eq!(timer.now_ms(), SETUP_DELAY_MS as u64);
        assert_eq!(timer.delay_count(), 1);

        assert!(!motion.is_enabled());
        assert_eq!(motion.transport().sent_count(), 0);
    }

    #[test]
    fn test_setup_propagates_sensor_failure() {
        let latch = InterruptLatch::new();
        let mut sensor = MockMotion6::with_default_reading();
        sensor.set_fail_writes(true);
        let mut motion = HandMotion::new(
            sensor,
            MockInterruptPin::new(),
            MockTransport::new(),
            NoOverride,
            &latch,
        );

        let result = motion.setup(&mut MockTimer::new());
        assert_eq!(result, Err(MotionError::Sensor(ImuError::I2cError)));
    }

    #[test]
    fn test_enable_arms_wakes_and_forces_latch() {
        let latch = InterruptLatch::new();
        let mut motion = motion_with(&latch, &[]);

        motion.set_mode(true);

        assert!(latch.is_set());
        assert_eq!(motion.int_pin().armed_edge(), Some(InterruptEdge::Falling));
        assert!(!motion.sensor().sleep_enabled());
        assert!(motion.is_enabled());
    }

    #[test]
    fn test_enable_resets_filtered_values_only() {
        let latch = InterruptLatch::new();
        let reading = Motion6Reading::new(400, 400, 400, 400, 400, 400);
        let mut motion = motion_with(&latch, &[reading, reading]);
        motion.set_mode(true);
        motion.update();
        motion.update();
        let prev_accel = *motion.filter().prev_accel();
        assert_ne!(*motion.accel(), Vector3::zeros());

        motion.set_mode(true);

        assert_eq!(*motion.accel(), Vector3::zeros());
        assert_eq!(*motion.gyro(), Vector3::zeros());
        assert_eq!(*motion.filter().prev_accel(), prev_accel);
    }

    #[test]
    fn test_disable_sleeps_disarms_and_keeps_filter() {
        let latch = InterruptLatch::new();
        let mut motion = motion_with(&latch, &[Motion6Reading::new(100, -200, 300, 0, 0, 0)]);
        motion.set_mode(true);
        motion.update();
        let accel = *motion.accel();

        motion.set_mode(false);

        assert!(motion.sensor().sleep_enabled());
        assert!(!motion.int_pin().is_armed());
        assert!(!motion.is_enabled());
        assert_eq!(*motion.accel(), accel);
    }

    #[test]
    fn test_set_mode_emits_mode_event() {
        let latch = InterruptLatch::new();
        let mut motion = motion_with(&latch, &[]);

        motion.set_mode(true);
        let packet = motion.transport().last().unwrap();
        assert_eq!(packet.header.id, PacketId::MotionMode);
        assert_eq!(packet.payload.as_slice(), &[0x00, 0x01]);

        motion.set_mode(false);
        let packet = motion.transport().last().unwrap();
        assert_eq!(packet.payload.as_slice(), &[0x00, 0x00]);
        assert_eq!(motion.transport().sent_count(), 2);
    }

    #[test]
    fn test_set_mode_inside_bin_packet_is_silent() {
        let latch = InterruptLatch::new();
        let mut motion = motion_with(&latch, &[]);
        motion.transport_mut().set_in_bin_packet(true);

        motion.set_mode(true);

        assert!(motion.is_enabled());
        assert_eq!(motion.transport().sent_count(), 0);
    }

    #[test]
    fn test_mode_hook_skip_is_fresh_each_call() {
        let latch = InterruptLatch::new();
        let mut motion: TestMotion<'_, SwitchHooks> = HandMotion::new(
            MockMotion6::with_default_reading(),
            MockInterruptPin::new(),
            MockTransport::new(),
            SwitchHooks {
                skip_mode: true,
                ..Default::default()
            },
            &latch,
        );
        motion.setup(&mut MockTimer::new()).unwrap();

        motion.set_mode(true);
        assert_eq!(motion.transport().sent_count(), 0);

        motion.hooks_mut().skip_mode = false;
        motion.set_mode(false);
        assert_eq!(motion.transport().sent_count(), 1);
        assert_eq!(motion.hooks_mut().mode_calls, 2);
    }

    #[test]
    fn test_update_scenario_payload() {
        let latch = InterruptLatch::new();
        let mut motion = motion_with(&latch, &[Motion6Reading::new(100, -200, 300, 0, 0, 0)]);
        motion.set_mode(true);
        motion.transport_mut().clear();

        motion.update();

        assert_eq!(*motion.accel(), Vector3::new(25, -50, 75));
        assert_eq!(*motion.gyro(), Vector3::zeros());

        let packet = motion.transport().last().unwrap();
        assert_eq!(packet.header.id, PacketId::MotionData);
        assert_eq!(&packet.payload[..3], &[0x00, 0x03, 0x0C]);
        assert_eq!(&packet.payload[3..9], &[0x19, 0x00, 0xCE, 0xFF, 0x4B, 0x00]);
        assert_eq!(motion.transport().sent_count(), 1);
    }

    #[test]
    fn test_update_clears_latch_on_entry() {
        let latch = InterruptLatch::new();
        let mut motion = motion_with(&latch, &[]);
        motion.set_mode(true);
        assert!(latch.is_set());

        motion.update();
        assert!(!latch.is_set());
    }

    #[test]
    fn test_poll_runs_only_when_latched() {
        let latch = InterruptLatch::new();
        let mut motion = motion_with(&latch, &[]);
        motion.set_mode(true);

        // Forced by set_mode
        assert!(motion.poll());
        assert!(!motion.poll());
        assert_eq!(motion.sensor().read_count(), 1);

        latch.signal();
        assert!(motion.poll());
        assert_eq!(motion.sensor().read_count(), 2);
    }

    #[test]
    fn test_interrupt_during_read_schedules_next_cycle() {
        let latch = InterruptLatch::new();
        let sensor = InterruptDuringRead {
            inner: MockMotion6::with_default_reading(),
            latch: &latch,
        };
        let mut motion = HandMotion::new(
            sensor,
            MockInterruptPin::new(),
            MockTransport::new(),
            NoOverride,
            &latch,
        );
        motion.setup(&mut MockTimer::new()).unwrap();
        motion.set_mode(true);

        assert!(motion.poll());
        assert!(latch.is_set());
        assert!(motion.poll());
        assert!(latch.is_set());
        assert_eq!(motion.sensor().inner.read_count(), 2);
    }

    #[test]
    fn test_take_then_manual_update() {
        let latch = InterruptLatch::new();
        let mut motion = motion_with(&latch, &[]);
        motion.set_mode(true);

        if latch.take() {
            motion.update();
        }
        assert!(!latch.is_set());
        assert!(!latch.take());
        assert_eq!(motion.sensor().read_count(), 1);
    }

    #[test]
    fn test_interrupt_edge_drives_poll() {
        let latch = InterruptLatch::new();
        let mut motion = motion_with(&latch, &[]);
        motion.set_mode(true);
        motion.poll();

        assert!(motion.int_pin_mut().simulate_edge(InterruptEdge::Falling, &latch));
        assert!(motion.poll());

        motion.set_mode(false);
        assert!(!motion.int_pin_mut().simulate_edge(InterruptEdge::Falling, &latch));
        assert!(!motion.poll());
    }

    #[test]
    fn test_data_hook_skip_suppresses_each_emission() {
        let latch = InterruptLatch::new();
        let mut motion: TestMotion<'_, SwitchHooks> = HandMotion::new(
            MockMotion6::with_default_reading(),
            MockInterruptPin::new(),
            MockTransport::new(),
            SwitchHooks {
                skip_data: true,
                ..Default::default()
            },
            &latch,
        );
        motion.setup(&mut MockTimer::new()).unwrap();
        motion.set_mode(true);
        motion.transport_mut().clear();

        motion.update();
        motion.update();
        assert_eq!(motion.transport().sent_count(), 0);

        motion.hooks_mut().skip_data = false;
        motion.update();
        assert_eq!(motion.transport().sent_count(), 1);
        assert_eq!(motion.hooks_mut().data_calls, 3);
    }

    #[test]
    fn test_read_failure_keeps_state_and_skips_emission() {
        let latch = InterruptLatch::new();
        let mut motion = motion_with(&latch, &[Motion6Reading::new(100, -200, 300, 0, 0, 0)]);
        motion.set_mode(true);
        motion.update();
        motion.transport_mut().clear();
        let filter = *motion.filter();

        motion.sensor_mut().set_fail_reads(true);
        motion.update();

        assert_eq!(*motion.filter(), filter);
        assert_eq!(motion.transport().sent_count(), 0);
        assert!(motion.is_healthy());
    }

    #[test]
    fn test_consecutive_read_failures_mark_unhealthy() {
        let latch = InterruptLatch::new();
        let mut motion = motion_with(&latch, &[]);
        motion.set_mode(true);
        motion.sensor_mut().set_fail_reads(true);

        for _ in 0..MAX_CONSECUTIVE_ERRORS {
            motion.update();
        }
        assert!(!motion.is_healthy());

        motion.sensor_mut().set_fail_reads(false);
        motion.update();
        assert!(motion.is_healthy());
    }

    #[test]
    fn test_arm_failure_still_wakes_and_notifies() {
        let latch = InterruptLatch::new();
        let mut motion = motion_with(&latch, &[]);
        motion.int_pin_mut().set_fail_attach(true);

        motion.set_mode(true);

        assert!(!motion.int_pin().is_armed());
        assert!(!motion.sensor().sleep_enabled());
        assert!(latch.is_set());
        assert_eq!(motion.transport().sent_count(), 1);
        // Interrupt not armed, so not considered enabled
        assert!(!motion.is_enabled());
    }

    #[test]
    fn test_motion_error_display() {
        let err = MotionError::from(ImuError::NotInitialized);
        assert_eq!(format!("{}", err), "motion sensor: sensor not initialized");
    }
}

//! Mock 6-axis sensor implementation for testing
//!
//! Provides a configurable mock that implements `Motion6Sensor`.
//! Useful for unit testing the acquisition cycle without hardware.
//!
//! ## Usage
//!
//! ```ignore
//! use keyglove_motion::devices::imu::MockMotion6;
//! use keyglove_motion::devices::traits::{Motion6Reading, Motion6Sensor};
//!
//! let mut sensor = MockMotion6::with_readings(&[
//!     Motion6Reading::new(100, -200, 300, 0, 0, 0),
//! ]);
//! let reading = sensor.read_motion6()?;
//! ```

use crate::devices::imu::mpu6050::config::{DlpfBandwidth, GyroRange, InterruptConfig};
use crate::devices::imu::mpu6050::registers;
use crate::devices::traits::{ImuError, Motion6Reading, Motion6Sensor};

/// Capacity of the queued reading sequence
const MAX_QUEUED_READINGS: usize = 64;

/// Mock 6-axis motion sensor
///
/// Returns preset readings in sequence, then repeats a default reading.
/// Configuration calls are recorded both as typed values and as the register
/// image a real driver would write.
pub struct MockMotion6 {
    /// Queue of readings to return
    readings: heapless::Deque<Motion6Reading, MAX_QUEUED_READINGS>,

    /// Reading returned when the queue is empty
    default_reading: Motion6Reading,

    initialized: bool,
    sleeping: bool,
    read_count: u32,
    fail_reads: bool,
    fail_writes: bool,

    rate_divider: Option<u8>,
    dlpf: Option<DlpfBandwidth>,
    gyro_range: Option<GyroRange>,
    interrupt: Option<InterruptConfig>,

    /// Register image: CONFIG, GYRO_CONFIG, INT_PIN_CFG, INT_ENABLE, PWR_MGMT_1
    config_reg: u8,
    gyro_config_reg: u8,
    int_pin_cfg_reg: u8,
    int_enable_reg: u8,
    pwr_mgmt_1_reg: u8,
}

impl MockMotion6 {
    /// Create a mock sensor that returns an all-zero reading
    ///
    /// Like the chip after power-on reset, the mock starts asleep.
    pub fn with_default_reading() -> Self {
        Self {
            readings: heapless::Deque::new(),
            default_reading: Motion6Reading::default(),
            initialized: false,
            sleeping: true,
            read_count: 0,
            fail_reads: false,
            fail_writes: false,
            rate_divider: None,
            dlpf: None,
            gyro_range: None,
            interrupt: None,
            config_reg: 0,
            gyro_config_reg: 0,
            int_pin_cfg_reg: 0,
            int_enable_reg: 0,
            pwr_mgmt_1_reg: registers::PWR_MGMT_1_SLEEP,
        }
    }

    /// Create a mock sensor with a sequence of readings
    ///
    /// # Panics
    ///
    /// Panics if more than 64 readings are given.
    pub fn with_readings(readings: &[Motion6Reading]) -> Self {
        assert!(
            readings.len() <= MAX_QUEUED_READINGS,
            "MockMotion6 queues at most {} readings, got {}",
            MAX_QUEUED_READINGS,
            readings.len()
        );
        let mut sensor = Self::with_default_reading();
        for reading in readings {
            let _ = sensor.readings.push_back(*reading);
        }
        sensor
    }

    /// Set the reading returned when the queue is empty
    pub fn set_default_reading(&mut self, reading: Motion6Reading) {
        self.default_reading = reading;
    }

    /// Push a reading onto the queue
    pub fn push_reading(&mut self, reading: Motion6Reading) -> Result<(), Motion6Reading> {
        self.readings.push_back(reading)
    }

    /// Make subsequent reads fail with `ImuError::I2cError`
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make subsequent configuration writes fail with `ImuError::I2cError`
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Whether `initialize` has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of successful `read_motion6` calls
    pub fn read_count(&self) -> u32 {
        self.read_count
    }

    /// Last configured sample rate divider
    pub fn rate_divider(&self) -> Option<u8> {
        self.rate_divider
    }

    /// Last configured low-pass bandwidth
    pub fn dlpf(&self) -> Option<DlpfBandwidth> {
        self.dlpf
    }

    /// Last configured gyroscope range
    pub fn gyro_range(&self) -> Option<GyroRange> {
        self.gyro_range
    }

    /// Last configured interrupt behaviour
    pub fn interrupt_config(&self) -> Option<InterruptConfig> {
        self.interrupt
    }

    /// Register image a driver would have written
    ///
    /// Returns `None` for registers the mock does not model.
    pub fn register(&self, address: u8) -> Option<u8> {
        match address {
            registers::SMPLRT_DIV => Some(self.rate_divider.unwrap_or(0)),
            registers::CONFIG => Some(self.config_reg),
            registers::GYRO_CONFIG => Some(self.gyro_config_reg),
            registers::INT_PIN_CFG => Some(self.int_pin_cfg_reg),
            registers::INT_ENABLE => Some(self.int_enable_reg),
            registers::PWR_MGMT_1 => Some(self.pwr_mgmt_1_reg),
            registers::WHO_AM_I => Some(registers::MPU6050_WHO_AM_I_VALUE),
            _ => None,
        }
    }

    fn write_guard(&self) -> Result<(), ImuError> {
        if self.fail_writes {
            Err(ImuError::I2cError)
        } else {
            Ok(())
        }
    }
}

impl Motion6Sensor for MockMotion6 {
    fn initialize(&mut self) -> Result<(), ImuError> {
        self.write_guard()?;
        // Power-on defaults, PLL clock, awake
        self.config_reg = registers::DLPF_CFG_256HZ;
        self.gyro_config_reg = registers::GYRO_FS_SEL_250DPS;
        self.pwr_mgmt_1_reg = registers::PWR_MGMT_1_CLKSEL_PLL_XGYRO;
        self.sleeping = false;
        self.initialized = true;
        Ok(())
    }

    fn read_motion6(&mut self) -> Result<Motion6Reading, ImuError> {
        if !self.initialized {
            return Err(ImuError::NotInitialized);
        }
        if self.fail_reads {
            return Err(ImuError::I2cError);
        }

        self.read_count += 1;
        Ok(self.readings.pop_front().unwrap_or(self.default_reading))
    }

    fn set_rate_divider(&mut self, divider: u8) -> Result<(), ImuError> {
        self.write_guard()?;
        self.rate_divider = Some(divider);
        Ok(())
    }

    fn set_dlpf_bandwidth(&mut self, bandwidth: DlpfBandwidth) -> Result<(), ImuError> {
        self.write_guard()?;
        self.dlpf = Some(bandwidth);
        self.config_reg = bandwidth.register_value();
        Ok(())
    }

    fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), ImuError> {
        self.write_guard()?;
        self.gyro_range = Some(range);
        self.gyro_config_reg = range.register_value();
        Ok(())
    }

    fn set_interrupt_config(&mut self, config: InterruptConfig) -> Result<(), ImuError> {
        self.write_guard()?;
        self.interrupt = Some(config);
        self.int_pin_cfg_reg = config.pin_cfg_value();
        self.int_enable_reg = config.enable_value();
        Ok(())
    }

    fn set_sleep_enabled(&mut self, enabled: bool) -> Result<(), ImuError> {
        self.write_guard()?;
        self.sleeping = enabled;
        if enabled {
            self.pwr_mgmt_1_reg |= registers::PWR_MGMT_1_SLEEP;
        } else {
            self.pwr_mgmt_1_reg &= !registers::PWR_MGMT_1_SLEEP;
        }
        Ok(())
    }

    fn sleep_enabled(&self) -> bool {
        self.sleeping
    }
}

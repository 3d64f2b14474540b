//! MPU-6050 Configuration
//!
//! Configuration values for sample rate, low-pass filter, gyroscope range and
//! the INT pin. Register encodings are provided for drivers that write them.

use super::registers;

/// Gyroscope full scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// ±250 °/s
    Dps250,
    /// ±500 °/s
    Dps500,
    /// ±1000 °/s
    Dps1000,
    /// ±2000 °/s (fast hand gestures)
    #[default]
    Dps2000,
}

impl GyroRange {
    /// Get the GYRO_CONFIG register value for this range
    pub fn register_value(self) -> u8 {
        match self {
            GyroRange::Dps250 => registers::GYRO_FS_SEL_250DPS,
            GyroRange::Dps500 => registers::GYRO_FS_SEL_500DPS,
            GyroRange::Dps1000 => registers::GYRO_FS_SEL_1000DPS,
            GyroRange::Dps2000 => registers::GYRO_FS_SEL_2000DPS,
        }
    }
}

/// Digital Low Pass Filter bandwidth (accel/gyro share one setting)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DlpfBandwidth {
    /// 256 Hz gyro / 260 Hz accel, 8 kHz gyro output rate
    Bw256Hz,
    /// 188 Hz
    Bw188Hz,
    /// 98 Hz
    Bw98Hz,
    /// 42 Hz (hand motion pipeline)
    #[default]
    Bw42Hz,
    /// 20 Hz
    Bw20Hz,
    /// 10 Hz
    Bw10Hz,
    /// 5 Hz
    Bw5Hz,
}

impl DlpfBandwidth {
    /// Get the CONFIG register DLPF_CFG value
    pub fn register_value(self) -> u8 {
        match self {
            DlpfBandwidth::Bw256Hz => registers::DLPF_CFG_256HZ,
            DlpfBandwidth::Bw188Hz => registers::DLPF_CFG_188HZ,
            DlpfBandwidth::Bw98Hz => registers::DLPF_CFG_98HZ,
            DlpfBandwidth::Bw42Hz => registers::DLPF_CFG_42HZ,
            DlpfBandwidth::Bw20Hz => registers::DLPF_CFG_20HZ,
            DlpfBandwidth::Bw10Hz => registers::DLPF_CFG_10HZ,
            DlpfBandwidth::Bw5Hz => registers::DLPF_CFG_5HZ,
        }
    }

    /// Gyro output rate feeding the sample rate divider
    pub fn gyro_output_rate_hz(self) -> u32 {
        match self {
            DlpfBandwidth::Bw256Hz => registers::GYRO_OUTPUT_RATE_HZ,
            _ => registers::GYRO_OUTPUT_RATE_DLPF_HZ,
        }
    }
}

/// INT pin behaviour and interrupt sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptConfig {
    /// Drive INT low when asserted (falling edge = data ready)
    pub active_low: bool,

    /// Open-drain output (needs the host pin's pull-up)
    pub open_drain: bool,

    /// Hold INT until cleared instead of emitting a 50 µs pulse
    pub latch_enabled: bool,

    /// Clear interrupt status on any register read
    pub clear_on_any_read: bool,

    /// Assert INT when a new sample is ready
    pub data_ready_enabled: bool,
}

impl Default for InterruptConfig {
    fn default() -> Self {
        Self {
            active_low: true,
            open_drain: true,
            latch_enabled: false,
            clear_on_any_read: true,
            data_ready_enabled: true,
        }
    }
}

impl InterruptConfig {
    /// Get the INT_PIN_CFG register value
    pub fn pin_cfg_value(&self) -> u8 {
        let mut value = 0;
        if self.active_low {
            value |= registers::INT_PIN_CFG_INT_LEVEL;
        }
        if self.open_drain {
            value |= registers::INT_PIN_CFG_INT_OPEN;
        }
        if self.latch_enabled {
            value |= registers::INT_PIN_CFG_LATCH_INT_EN;
        }
        if self.clear_on_any_read {
            value |= registers::INT_PIN_CFG_INT_RD_CLEAR;
        }
        value
    }

    /// Get the INT_ENABLE register value
    pub fn enable_value(&self) -> u8 {
        if self.data_ready_enabled {
            registers::INT_ENABLE_DATA_RDY_EN
        } else {
            0
        }
    }
}

/// MPU-6050 configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mpu6050Config {
    /// Gyroscope full scale range
    pub gyro_range: GyroRange,

    /// Digital low pass filter
    pub dlpf: DlpfBandwidth,

    /// Sample rate divider: SAMPLE_RATE = output rate / (1 + sample_rate_div)
    pub sample_rate_div: u8,

    /// INT pin configuration
    pub interrupt: InterruptConfig,
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Self {
            gyro_range: GyroRange::Dps2000,
            dlpf: DlpfBandwidth::Bw42Hz,
            sample_rate_div: 9, // 1kHz / (9 + 1) = 100Hz
            interrupt: InterruptConfig::default(),
        }
    }
}

impl Mpu6050Config {
    /// Effective output data rate in Hz
    pub fn sample_rate_hz(&self) -> u32 {
        self.dlpf.gyro_output_rate_hz() / (1 + self.sample_rate_div as u32)
    }
}

//! MPU-6050 Register Definitions
//!
//! Based on MPU-6000/MPU-6050 Register Map and Descriptions (RM-MPU-6000A-00 v4.2).
//! Only the registers touched by the motion pipeline's configuration are listed.

// ============================================================================
// Identity
// ============================================================================

/// Expected WHO_AM_I value
pub const MPU6050_WHO_AM_I_VALUE: u8 = 0x68;

// ============================================================================
// Registers
// ============================================================================

/// Sample rate divider: SAMPLE_RATE = Gyro_Output_Rate / (1 + SMPLRT_DIV)
pub const SMPLRT_DIV: u8 = 0x19;

/// Configuration register (DLPF_CFG, EXT_SYNC_SET)
pub const CONFIG: u8 = 0x1A;

/// Gyroscope configuration (FS_SEL)
pub const GYRO_CONFIG: u8 = 0x1B;

/// INT pin / bypass enable configuration
pub const INT_PIN_CFG: u8 = 0x37;

/// Interrupt enable
pub const INT_ENABLE: u8 = 0x38;

/// Power management 1 (SLEEP, CLKSEL)
pub const PWR_MGMT_1: u8 = 0x6B;

/// Device identity
pub const WHO_AM_I: u8 = 0x75;

// ============================================================================
// CONFIG (0x1A) - DLPF_CFG[2:0]
// ============================================================================

pub const DLPF_CFG_256HZ: u8 = 0x00;
pub const DLPF_CFG_188HZ: u8 = 0x01;
pub const DLPF_CFG_98HZ: u8 = 0x02;
pub const DLPF_CFG_42HZ: u8 = 0x03;
pub const DLPF_CFG_20HZ: u8 = 0x04;
pub const DLPF_CFG_10HZ: u8 = 0x05;
pub const DLPF_CFG_5HZ: u8 = 0x06;

/// Gyro output rate with DLPF enabled (DLPF_CFG 1..=6)
pub const GYRO_OUTPUT_RATE_DLPF_HZ: u32 = 1_000;

/// Gyro output rate with DLPF disabled (DLPF_CFG 0)
pub const GYRO_OUTPUT_RATE_HZ: u32 = 8_000;

// ============================================================================
// GYRO_CONFIG (0x1B) - FS_SEL[4:3]
// ============================================================================

pub const GYRO_FS_SEL_250DPS: u8 = 0x00;
pub const GYRO_FS_SEL_500DPS: u8 = 0x08;
pub const GYRO_FS_SEL_1000DPS: u8 = 0x10;
pub const GYRO_FS_SEL_2000DPS: u8 = 0x18;

// ============================================================================
// INT_PIN_CFG (0x37)
// ============================================================================

/// INT pin logic level: 1 = active low
pub const INT_PIN_CFG_INT_LEVEL: u8 = 1 << 7;

/// INT pin drive: 1 = open drain
pub const INT_PIN_CFG_INT_OPEN: u8 = 1 << 6;

/// 1 = INT held until cleared, 0 = 50 µs pulse
pub const INT_PIN_CFG_LATCH_INT_EN: u8 = 1 << 5;

/// 1 = status cleared by any read, 0 = only by reading INT_STATUS
pub const INT_PIN_CFG_INT_RD_CLEAR: u8 = 1 << 4;

// ============================================================================
// INT_ENABLE (0x38)
// ============================================================================

/// Data ready interrupt enable
pub const INT_ENABLE_DATA_RDY_EN: u8 = 1 << 0;

// ============================================================================
// PWR_MGMT_1 (0x6B)
// ============================================================================

/// Low-power sleep
pub const PWR_MGMT_1_SLEEP: u8 = 1 << 6;

/// Clock source: PLL with X axis gyroscope reference
pub const PWR_MGMT_1_CLKSEL_PLL_XGYRO: u8 = 0x01;

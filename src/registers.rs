pub const DEFAULT_ADDR: u8 = 0x68;
pub const ALT_ADDR: u8 = 0x69;
pub const WHO_AM_I_VALUE: u8 = 0x68;

/// PWR_MGMT_1 value that clears SLEEP and selects the internal oscillator.
pub const PWR_WAKE: u8 = 0x00;
/// PWR_MGMT_1 DEVICE_RESET bit.
pub const PWR_DEVICE_RESET: u8 = 0x80;

/// FS_SEL / AFS_SEL live in bits 4:3 of the config registers.
pub const FULL_SCALE_SHIFT: u8 = 3;

/// Number of 16-bit words in the accel + temp + gyro block.
pub const DATA_BLOCK_WORDS: usize = 7;

#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Registers {
    /// Configuration
    SampleRateDiv = 0x19,
    Config = 0x1A,
    GyroConfig = 0x1B,
    AccelConfig = 0x1C,
    FifoEnable = 0x23,

    /// Reading data
    /// Accel
    AccelXHi = 0x3B,
    AccelXLo = 0x3C,
    AccelYHi = 0x3D,
    AccelYLo = 0x3E,
    AccelZHi = 0x3F,
    AccelZLo = 0x40,

    /// Temperature
    TempHi = 0x41,
    TempLo = 0x42,

    /// Gyro
    GyroXHi = 0x43,
    GyroXLo = 0x44,
    GyroYHi = 0x45,
    GyroYLo = 0x46,
    GyroZHi = 0x47,
    GyroZLo = 0x48,

    /// Control
    SignalPathReset = 0x68,
    UserCtrl = 0x6A,
    PowerMgmt1 = 0x6B,
    PowerMgmt2 = 0x6C,
    FifoCountHi = 0x72,
    FifoCountLo = 0x73,
    FifoReadWrite = 0x74,
    WhoAmI = 0x75,
}

impl Registers {
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

impl From<Registers> for u8 {
    fn from(reg: Registers) -> u8 {
        reg as u8
    }
}

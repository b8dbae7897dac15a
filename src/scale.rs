use num_traits::FromPrimitive;

use crate::registers::FULL_SCALE_SHIFT;
use crate::vector::Vector3;

/// LSB per g, indexed by accelerometer selector.
pub const ACCEL_SCALE: [u16; 4] = [16384, 8192, 4096, 2048];
/// Divisor per gyroscope selector.
pub const GYRO_SCALE: [u16; 4] = [250, 500, 1000, 2000];

const TEMP_SENSITIVITY: f32 = 340.0;
const TEMP_OFFSET: f32 = 36.53;

/// Full scale range selector, shared by the accelerometer and the gyroscope.
///
/// `Sel0` is the narrowest range of each sensor (±2g, ±250°/s), each step up
/// doubles it (up to ±16g, ±2000°/s).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FullScale {
    #[default]
    Sel0 = 0,
    Sel1 = 1,
    Sel2 = 2,
    Sel3 = 3,
}

impl FullScale {
    pub const ALL: [FullScale; 4] = [Self::Sel0, Self::Sel1, Self::Sel2, Self::Sel3];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn accel_divisor(self) -> u16 {
        ACCEL_SCALE[self.index()]
    }

    pub fn gyro_divisor(self) -> u16 {
        GYRO_SCALE[self.index()]
    }

    /// Value for GYRO_CONFIG / ACCEL_CONFIG with the selector in its field.
    pub fn register_value(self) -> u8 {
        (self as u8) << FULL_SCALE_SHIFT
    }
}

impl FromPrimitive for FullScale {
    fn from_i64(n: i64) -> Option<Self> {
        match n {
            0 => Some(Self::Sel0),
            1 => Some(Self::Sel1),
            2 => Some(Self::Sel2),
            3 => Some(Self::Sel3),
            _ => None,
        }
    }

    fn from_u64(n: u64) -> Option<Self> {
        i64::try_from(n).ok().and_then(Self::from_i64)
    }
}

impl TryFrom<u8> for FullScale {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(value)
    }
}

impl From<FullScale> for u8 {
    fn from(fs: FullScale) -> u8 {
        fs as u8
    }
}

pub fn scale_axes(raw: [u16; 3], divisor: u16) -> Vector3 {
    let divisor = divisor as f32;
    Vector3 {
        x: (raw[0] as i16) as f32 / divisor,
        y: (raw[1] as i16) as f32 / divisor,
        z: (raw[2] as i16) as f32 / divisor,
    }
}

pub fn scale_accel(raw: [u16; 3], fs: FullScale) -> Vector3 {
    scale_axes(raw, fs.accel_divisor())
}

pub fn scale_gyro(raw: [u16; 3], fs: FullScale) -> Vector3 {
    scale_axes(raw, fs.gyro_divisor())
}

/// Degrees Celsius from the raw TEMP_OUT word.
pub fn scale_temperature(raw: u16) -> f32 {
    (raw as i16) as f32 / TEMP_SENSITIVITY + TEMP_OFFSET
}

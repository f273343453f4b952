//! Supported register widths.

use core::fmt;

use crate::error::ConfigError;

/// CRC register width.
///
/// The table-driven update consumes one byte per step, so only whole-byte
/// widths with a native integer type are supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Width {
  /// 8-bit register (`u8`).
  W8 = 8,
  /// 16-bit register (`u16`).
  W16 = 16,
  /// 32-bit register (`u32`).
  W32 = 32,
  /// 64-bit register (`u64`).
  W64 = 64,
}

impl Width {
  /// All supported widths, narrowest first.
  pub const ALL: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

  /// Parse a width given in bits.
  #[inline]
  pub const fn from_bits(bits: u32) -> Result<Self, ConfigError> {
    match bits {
      8 => Ok(Self::W8),
      16 => Ok(Self::W16),
      32 => Ok(Self::W32),
      64 => Ok(Self::W64),
      other => Err(ConfigError::UnsupportedWidth(other)),
    }
  }

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    self as u32
  }

  /// Width in bytes.
  #[inline]
  #[must_use]
  pub const fn bytes(self) -> usize {
    (self as usize) / 8
  }

  /// Mask covering the low `bits()` bits.
  #[inline]
  #[must_use]
  pub const fn mask(self) -> u64 {
    u64::MAX >> (64 - self.bits())
  }

  /// True if `value` has no bits set above this width.
  #[inline]
  #[must_use]
  pub const fn fits(self, value: u64) -> bool {
    value & !self.mask() == 0
  }
}

impl TryFrom<u32> for Width {
  type Error = ConfigError;

  #[inline]
  fn try_from(bits: u32) -> Result<Self, Self::Error> {
    Self::from_bits(bits)
  }
}

impl From<Width> for u32 {
  #[inline]
  fn from(width: Width) -> Self {
    width.bits()
  }
}

impl fmt::Display for Width {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-bit", self.bits())
  }
}

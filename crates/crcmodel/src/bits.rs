//! Bit and byte reflection primitives.
//!
//! Two flavours are provided:
//!
//! - Runtime-width free functions ([`reflect_bits`], [`reflect_bytes`]) used by
//!   table construction, parameter handling and the bitwise reference.
//! - The [`Register`] trait, implemented for the four native register types,
//!   used on the hot path where the width is fixed by the type.
//!
//! Both reflections are involutions on values that fit the width.

use core::{
  fmt::{Debug, LowerHex},
  ops::BitXor,
};

use crate::{
  config::KernelChoice,
  kernels::{self, Candidate},
  width::Width,
};

/// Reverse the order of the low `width` bits of `value`.
///
/// Bits above `width` are discarded first.
#[inline]
#[must_use]
pub const fn reflect_bits(value: u64, width: Width) -> u64 {
  (value & width.mask()).reverse_bits() >> (64 - width.bits())
}

/// Reverse the byte order of the low `width` bits of `value`.
///
/// Identity for [`Width::W8`]. Used to store non-reflected tables (and the
/// running register) byte-swapped so every width shares the right-shift update.
#[inline]
#[must_use]
pub const fn reflect_bytes(value: u64, width: Width) -> u64 {
  (value & width.mask()).swap_bytes() >> (64 - width.bits())
}

mod sealed {
  pub trait Sealed {}
}

/// A native CRC register: `u8`, `u16`, `u32` or `u64`.
///
/// Sealed; the set of widths is closed.
pub trait Register:
  sealed::Sealed + Copy + Eq + Default + Debug + LowerHex + BitXor<Output = Self> + Send + Sync + 'static
{
  /// Register width.
  const WIDTH: Width;

  /// Kernels available for this width, in auto-selection order.
  ///
  /// The last entry is always the bytewise reference kernel.
  const CANDIDATES: &'static [Candidate<Self>];

  /// Truncate `value` to the register width.
  fn from_u64(value: u64) -> Self;

  /// Zero-extend to `u64`.
  fn to_u64(self) -> u64;

  /// Reverse all bits of the register.
  #[must_use]
  fn reflect_bits(self) -> Self;

  /// Reverse all bytes of the register.
  #[must_use]
  fn reflect_bytes(self) -> Self;

  /// Drop the low byte: `self >> 8`, or zero for an 8-bit register.
  #[must_use]
  fn shift_out_byte(self) -> Self;

  /// The low byte of the register.
  fn low_byte(self) -> u8;
}

macro_rules! impl_register {
  ($ty:ty, $width:expr, $candidates:expr) => {
    impl sealed::Sealed for $ty {}

    impl Register for $ty {
      const WIDTH: Width = $width;
      const CANDIDATES: &'static [Candidate<Self>] = $candidates;

      #[inline(always)]
      fn from_u64(value: u64) -> Self {
        value as $ty
      }

      #[inline(always)]
      fn to_u64(self) -> u64 {
        self as u64
      }

      #[inline(always)]
      fn reflect_bits(self) -> Self {
        self.reverse_bits()
      }

      #[inline(always)]
      fn reflect_bytes(self) -> Self {
        self.swap_bytes()
      }

      #[inline(always)]
      fn shift_out_byte(self) -> Self {
        self.checked_shr(8).unwrap_or(0)
      }

      #[inline(always)]
      fn low_byte(self) -> u8 {
        self as u8
      }
    }
  };
}

impl_register!(u8, Width::W8, &[kernels::unrolled8_candidate(), kernels::bytewise_candidate()]);
impl_register!(u16, Width::W16, &[kernels::unrolled8_candidate(), kernels::bytewise_candidate()]);
impl_register!(u32, Width::W32, &[kernels::unrolled8_candidate(), kernels::bytewise_candidate()]);
impl_register!(
  u64,
  Width::W64,
  &[
    Candidate::new(
      kernels::SPLIT64,
      KernelChoice::Split64,
      kernels::split64::PREFERRED,
      kernels::split64::kernel
    ),
    kernels::unrolled8_candidate(),
    kernels::bytewise_candidate(),
  ]
);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reflect_bits_known_values() {
    assert_eq!(reflect_bits(0x01, Width::W8), 0x80);
    assert_eq!(reflect_bits(0xA7, Width::W8), 0xE5);
    assert_eq!(reflect_bits(0x8005, Width::W16), 0xA001);
    assert_eq!(reflect_bits(0x1021, Width::W16), 0x8408);
    assert_eq!(reflect_bits(0x04C1_1DB7, Width::W32), 0xEDB8_8320);
    assert_eq!(reflect_bits(0x42F0_E1EB_A9EA_3693, Width::W64), 0xC96C_5795_D787_0F42);
  }

  #[test]
  fn reflect_bits_discards_high_bits() {
    assert_eq!(reflect_bits(0x1_0001, Width::W16), 0x8000);
  }

  #[test]
  fn reflect_bytes_known_values() {
    assert_eq!(reflect_bytes(0xAB, Width::W8), 0xAB);
    assert_eq!(reflect_bytes(0x1234, Width::W16), 0x3412);
    assert_eq!(reflect_bytes(0x1234_5678, Width::W32), 0x7856_3412);
    assert_eq!(reflect_bytes(0x0102_0304_0506_0708, Width::W64), 0x0807_0605_0403_0201);
  }

  #[test]
  fn reflection_is_an_involution_on_edges() {
    for width in Width::ALL {
      for value in [0u64, 1, 0x80, width.mask(), width.mask() >> 1, 0x5A5A_5A5A_5A5A_5A5A & width.mask()] {
        assert_eq!(reflect_bits(reflect_bits(value, width), width), value);
        assert_eq!(reflect_bytes(reflect_bytes(value, width), width), value);
      }
    }
  }

  #[test]
  fn register_matches_free_functions() {
    let value = 0x0123_4567_89AB_CDEFu64;
    assert_eq!(u8::from_u64(value).reflect_bits().to_u64(), reflect_bits(value, Width::W8));
    assert_eq!(u16::from_u64(value).reflect_bits().to_u64(), reflect_bits(value, Width::W16));
    assert_eq!(u32::from_u64(value).reflect_bytes().to_u64(), reflect_bytes(value, Width::W32));
    assert_eq!(u64::from_u64(value).reflect_bytes().to_u64(), reflect_bytes(value, Width::W64));
  }

  #[test]
  fn shift_out_byte_clears_narrow_register() {
    assert_eq!(0xFFu8.shift_out_byte(), 0);
    assert_eq!(0xABCDu16.shift_out_byte(), 0x00AB);
    assert_eq!(0xDEAD_BEEFu32.shift_out_byte(), 0x00DE_ADBE);
    assert_eq!(u64::MAX.shift_out_byte(), u64::MAX >> 8);
  }

  #[test]
  fn every_width_ends_with_the_reference_kernel() {
    fn last<R: Register>() -> &'static str {
      R::CANDIDATES.last().map_or("", |c| c.name)
    }
    assert_eq!(last::<u8>(), kernels::BYTEWISE);
    assert_eq!(last::<u16>(), kernels::BYTEWISE);
    assert_eq!(last::<u32>(), kernels::BYTEWISE);
    assert_eq!(last::<u64>(), kernels::BYTEWISE);
  }
}

//! Table-driven update kernels.
//!
//! A kernel maps `(register, data, table)` to the updated register. Kernels
//! are pure: every implementation for a width must return identical results
//! for identical inputs, so swapping one for another never changes a checksum.
//!
//! The register passed in and out is in *internal orientation*: reflected for
//! `refin` variants, byte-swapped otherwise (see [`crate::table`]). In that
//! orientation every variant uses the same right-shifting step:
//!
//! ```text
//! crc = (crc >> 8) ^ table[(crc & 0xFF) ^ byte]      // width 8: crc = table[crc ^ byte]
//! ```
//!
//! # Available Kernels
//!
//! | Name | Widths | Notes |
//! |------|--------|-------|
//! | `reference/bytewise` | all | one lookup per loop iteration |
//! | `portable/unrolled8` | all | eight lookups per iteration |
//! | `portable/split64` | 64 | register as two `u32` halves; preferred on targets without native 64-bit integers |

use crate::{bits::Register, config, config::KernelChoice, table::Table};

/// Name of the one-lookup-per-byte kernel.
pub const BYTEWISE: &str = "reference/bytewise";
/// Name of the eight-bytes-per-iteration kernel.
pub const UNROLLED8: &str = "portable/unrolled8";
/// Name of the split 64-bit kernel.
pub const SPLIT64: &str = "portable/split64";

/// Kernel function signature.
pub type KernelFn<R> = fn(R, &[u8], &Table<R>) -> R;

/// A selected kernel.
#[derive(Clone, Copy, Debug)]
pub struct Kernel<R: 'static> {
  /// Kernel name, for introspection.
  pub name: &'static str,
  /// The update function.
  pub func: KernelFn<R>,
}

impl<R: Register> Kernel<R> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: KernelFn<R>) -> Self {
    Self { name, func }
  }

  /// Run the kernel.
  #[inline(always)]
  #[must_use]
  pub fn update(&self, crc: R, data: &[u8], table: &Table<R>) -> R {
    (self.func)(crc, data, table)
  }
}

/// A kernel available for a width, with its selection metadata.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<R: 'static> {
  /// Kernel name.
  pub name: &'static str,
  /// The explicit choice that selects this kernel.
  pub choice: KernelChoice,
  /// Eligible for `Auto` on this target.
  pub preferred: bool,
  /// The update function.
  pub func: KernelFn<R>,
}

impl<R: Register> Candidate<R> {
  #[must_use]
  pub const fn new(name: &'static str, choice: KernelChoice, preferred: bool, func: KernelFn<R>) -> Self {
    Self { name, choice, preferred, func }
  }

  #[inline]
  #[must_use]
  pub const fn kernel(&self) -> Kernel<R> {
    Kernel { name: self.name, func: self.func }
  }
}

pub(crate) const fn bytewise_candidate<R: Register>() -> Candidate<R> {
  Candidate::new(BYTEWISE, KernelChoice::Reference, false, bytewise::<R>)
}

pub(crate) const fn unrolled8_candidate<R: Register>() -> Candidate<R> {
  Candidate::new(UNROLLED8, KernelChoice::Unrolled, true, unrolled8::<R>)
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Every kernel available for `R`, in auto-selection order.
#[inline]
#[must_use]
pub fn candidates<R: Register>() -> &'static [Candidate<R>] {
  R::CANDIDATES
}

/// Resolve `choice` for `R`, with `auto_default` standing in for `Auto`.
///
/// An explicit choice the width does not support (`Split64` on a narrow
/// register) falls back to auto selection. Auto picks `auto_default` if the
/// width supports it, else the first preferred candidate.
#[must_use]
pub fn resolve<R: Register>(choice: KernelChoice, auto_default: KernelChoice) -> Kernel<R> {
  let find = |c: KernelChoice| match c {
    KernelChoice::Auto => None,
    c => R::CANDIDATES.iter().find(|cand| cand.choice == c),
  };
  find(choice)
    .or_else(|| find(auto_default))
    .or_else(|| R::CANDIDATES.iter().find(|cand| cand.preferred))
    .or_else(|| R::CANDIDATES.first())
    .map_or(Kernel::new(BYTEWISE, bytewise::<R>), Candidate::kernel)
}

/// Resolve `choice` for `R` using the process configuration for `Auto`.
#[inline]
#[must_use]
pub fn select<R: Register>(choice: KernelChoice) -> Kernel<R> {
  resolve(choice, config::get().effective)
}

// ─────────────────────────────────────────────────────────────────────────────
// Portable kernels
// ─────────────────────────────────────────────────────────────────────────────

#[inline(always)]
fn step<R: Register>(crc: R, byte: u8, table: &Table<R>) -> R {
  crc.shift_out_byte() ^ table.get(crc.low_byte() ^ byte)
}

/// One table lookup per byte.
pub fn bytewise<R: Register>(mut crc: R, data: &[u8], table: &Table<R>) -> R {
  for &byte in data {
    crc = step(crc, byte, table);
  }
  crc
}

/// Eight table lookups per loop iteration, bytewise tail.
pub fn unrolled8<R: Register>(mut crc: R, data: &[u8], table: &Table<R>) -> R {
  let chunks = data.chunks_exact(8);
  let tail = chunks.remainder();

  for chunk in chunks {
    if let &[b0, b1, b2, b3, b4, b5, b6, b7] = chunk {
      crc = step(crc, b0, table);
      crc = step(crc, b1, table);
      crc = step(crc, b2, table);
      crc = step(crc, b3, table);
      crc = step(crc, b4, table);
      crc = step(crc, b5, table);
      crc = step(crc, b6, table);
      crc = step(crc, b7, table);
    }
  }

  bytewise(crc, tail, table)
}

/// 64-bit register held as two 32-bit halves.
///
/// Each step folds the high half down by one byte and XORs in both halves of
/// the table entry. The observable result is identical to the 64-bit kernels.
pub mod split64 {
  use crate::table::{HalfEntries, Table};

  /// Auto-selected on targets without native 64-bit integers.
  pub const PREFERRED: bool = cfg!(not(target_pointer_width = "64"));

  /// A 64-bit CRC register as `(lo, hi)` halves.
  #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
  pub struct SplitRegister {
    /// Bits 0..32.
    pub lo: u32,
    /// Bits 32..64.
    pub hi: u32,
  }

  impl SplitRegister {
    #[inline(always)]
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
      Self { lo: value as u32, hi: (value >> 32) as u32 }
    }

    #[inline(always)]
    #[must_use]
    pub const fn to_u64(self) -> u64 {
      (self.lo as u64) | ((self.hi as u64) << 32)
    }
  }

  /// Feed `data` through the split register.
  #[must_use]
  pub fn update<T: HalfEntries + ?Sized>(reg: SplitRegister, data: &[u8], table: &T) -> SplitRegister {
    let SplitRegister { mut lo, mut hi } = reg;
    for &byte in data {
      let (t_lo, t_hi) = table.halves((lo as u8) ^ byte);
      lo = ((hi << 24) | (lo >> 8)) ^ t_lo;
      hi = (hi >> 8) ^ t_hi;
    }
    SplitRegister { lo, hi }
  }

  /// [`KernelFn<u64>`](super::KernelFn) adapter.
  pub fn kernel(crc: u64, data: &[u8], table: &Table<u64>) -> u64 {
    update(SplitRegister::from_u64(crc), data, table).to_u64()
  }
}

//! Lookup table construction.
//!
//! A table is derived from `(width, poly, refin)` alone; `init`, `refout` and
//! `xorout` only matter at reset and finalization. Two conventions exist:
//!
//! - **Reflected** (`refin`): right-shift division by the bit-reversed
//!   polynomial. Entry `i` is the CRC of byte `i` processed LSB-first.
//! - **Non-reflected**: left-shift division by the polynomial with the byte
//!   seeded in the top byte of the register, then stored byte-swapped
//!   ([`reflect_bytes`]). The byte-swap lets both conventions share the
//!   right-shifting update loop; finalization undoes it.
//!
//! Tables are immutable after construction and may be shared between engines
//! through `Arc`.

// SAFETY: Table lookups index `[_; 256]` with `usize::from(u8)` and split lookups
// index `[u32; 512]` with `2 * u8 + {0, 1}`; both are always in bounds.
#![allow(clippy::indexing_slicing)]

use alloc::sync::Arc;

use crate::{
  bits::{Register, reflect_bits, reflect_bytes},
  error::TableError,
  params::CrcParams,
  width::Width,
};

/// Number of entries in a lookup table.
pub const TABLE_LEN: usize = 256;

/// Number of `u32` half-entries in a split 64-bit table.
pub const SPLIT_TABLE_LEN: usize = 2 * TABLE_LEN;

// ─────────────────────────────────────────────────────────────────────────────
// Entry generation
// ─────────────────────────────────────────────────────────────────────────────

/// Compute table entry `index` for `(width, poly, refin)`.
///
/// `poly` is given in normal (non-reflected) form and masked to `width`.
#[must_use]
pub const fn entry(width: Width, poly: u64, refin: bool, index: u8) -> u64 {
  let mask = width.mask();
  if refin {
    let rpoly = reflect_bits(poly, width);
    let mut crc = index as u64;
    let mut i = 0;
    while i < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ rpoly } else { crc >> 1 };
      i += 1;
    }
    crc & mask
  } else {
    let top = 1u64 << (width.bits() - 1);
    let poly = poly & mask;
    let mut crc = (index as u64) << (width.bits() - 8);
    let mut i = 0;
    while i < 8 {
      crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
      i += 1;
    }
    reflect_bytes(crc & mask, width)
  }
}

/// Identity of a table: the parameters it was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableKey {
  /// Entry width.
  pub width: Width,
  /// Normal-form polynomial.
  pub poly: u64,
  /// Reflected (right-shift) construction.
  pub refin: bool,
}

impl TableKey {
  /// The key an engine for `params` requires.
  #[inline]
  #[must_use]
  pub const fn of(params: &CrcParams) -> Self {
    Self { width: params.width(), poly: params.poly(), refin: params.refin() }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Table<R>
// ─────────────────────────────────────────────────────────────────────────────

/// 256-entry lookup table for a register type.
#[derive(Clone, PartialEq, Eq)]
pub struct Table<R> {
  entries: [R; TABLE_LEN],
  key: TableKey,
}

impl<R: Register> Table<R> {
  /// Build the table for `poly` and `refin` at `R`'s width.
  ///
  /// `poly` is truncated to the register width.
  #[must_use]
  pub fn build(poly: u64, refin: bool) -> Self {
    let poly = poly & R::WIDTH.mask();
    let entries = core::array::from_fn(|i| R::from_u64(entry(R::WIDTH, poly, refin, i as u8)));
    Self { entries, key: TableKey { width: R::WIDTH, poly, refin } }
  }

  /// Build the table an engine for `params` needs.
  ///
  /// # Errors
  ///
  /// [`TableError::Width`] if `params` is not `R`'s width.
  pub fn for_params(params: &CrcParams) -> Result<Self, TableError> {
    check_width(R::WIDTH, params.width())?;
    Ok(Self::build(params.poly(), params.refin()))
  }

  /// All entries.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &[R; TABLE_LEN] {
    &self.entries
  }

  /// Entry for `index`.
  #[inline(always)]
  #[must_use]
  pub fn get(&self, index: u8) -> R {
    self.entries[usize::from(index)]
  }

  /// Parameters this table was built from.
  #[inline]
  #[must_use]
  pub fn key(&self) -> TableKey {
    self.key
  }

  /// True if an engine for `params` can use this table.
  #[inline]
  #[must_use]
  pub fn serves(&self, params: &CrcParams) -> bool {
    self.key == TableKey::of(params)
  }
}

impl<R: Register> core::fmt::Debug for Table<R> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Table").field("key", &self.key).finish_non_exhaustive()
  }
}

fn check_width(configured: Width, table: Width) -> Result<(), TableError> {
  if configured == table {
    Ok(())
  } else {
    Err(TableError::Width { expected: configured, actual: table })
  }
}

/// Fill a caller-provided buffer with the table for `params`.
///
/// # Errors
///
/// - [`TableError::Length`] if `buf` does not hold exactly 256 entries.
/// - [`TableError::Width`] if `R` is not the configured width.
pub fn fill<R: Register>(buf: &mut [R], params: &CrcParams) -> Result<(), TableError> {
  if buf.len() != TABLE_LEN {
    return Err(TableError::Length { expected: TABLE_LEN, actual: buf.len() });
  }
  check_width(params.width(), R::WIDTH)?;
  for (i, slot) in buf.iter_mut().enumerate() {
    *slot = R::from_u64(entry(params.width(), params.poly(), params.refin(), i as u8));
  }
  Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Split 64-bit layout
// ─────────────────────────────────────────────────────────────────────────────

/// Source of 64-bit table entries as `(low, high)` 32-bit halves.
pub trait HalfEntries {
  /// Halves of entry `index`.
  fn halves(&self, index: u8) -> (u32, u32);
}

impl HalfEntries for Table<u64> {
  #[inline(always)]
  fn halves(&self, index: u8) -> (u32, u32) {
    let e = self.get(index);
    (e as u32, (e >> 32) as u32)
  }
}

/// 64-bit table stored as 512 `u32` half-entries: low half of entry `i` at
/// `2*i`, high half at `2*i + 1`.
#[derive(Clone, PartialEq, Eq)]
pub struct SplitTable {
  halves: [u32; SPLIT_TABLE_LEN],
  key: TableKey,
}

impl SplitTable {
  /// Re-layout a 64-bit table.
  #[must_use]
  pub fn from_table(table: &Table<u64>) -> Self {
    let halves = core::array::from_fn(|i| {
      let e = table.get((i / 2) as u8);
      if i % 2 == 0 { e as u32 } else { (e >> 32) as u32 }
    });
    Self { halves, key: table.key() }
  }

  /// Build the split table for 64-bit `params`.
  ///
  /// # Errors
  ///
  /// [`TableError::Width`] if `params` is not 64-bit.
  pub fn for_params(params: &CrcParams) -> Result<Self, TableError> {
    Ok(Self::from_table(&Table::<u64>::for_params(params)?))
  }

  /// All half-entries.
  #[inline]
  #[must_use]
  pub fn as_halves(&self) -> &[u32; SPLIT_TABLE_LEN] {
    &self.halves
  }

  /// Parameters this table was built from.
  #[inline]
  #[must_use]
  pub fn key(&self) -> TableKey {
    self.key
  }
}

impl HalfEntries for SplitTable {
  #[inline(always)]
  fn halves(&self, index: u8) -> (u32, u32) {
    let i = 2 * usize::from(index);
    (self.halves[i], self.halves[i + 1])
  }
}

impl core::fmt::Debug for SplitTable {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("SplitTable").field("key", &self.key).finish_non_exhaustive()
  }
}

/// Fill a caller-provided buffer with the split 64-bit table for `params`.
///
/// # Errors
///
/// - [`TableError::Length`] if `buf` does not hold exactly 512 half-entries.
/// - [`TableError::Width`] if `params` is not 64-bit.
pub fn fill_split(buf: &mut [u32], params: &CrcParams) -> Result<(), TableError> {
  if buf.len() != SPLIT_TABLE_LEN {
    return Err(TableError::Length { expected: SPLIT_TABLE_LEN, actual: buf.len() });
  }
  check_width(params.width(), Width::W64)?;
  for (i, pair) in buf.chunks_exact_mut(2).enumerate() {
    let e = entry(Width::W64, params.poly(), params.refin(), i as u8);
    pair[0] = e as u32;
    pair[1] = (e >> 32) as u32;
  }
  Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime-width tables
// ─────────────────────────────────────────────────────────────────────────────

/// A shared table of any width, for [`CrcEngine`](crate::CrcEngine).
#[derive(Clone, Debug)]
pub enum AnyTable {
  /// 8-bit entries.
  W8(Arc<Table<u8>>),
  /// 16-bit entries.
  W16(Arc<Table<u16>>),
  /// 32-bit entries.
  W32(Arc<Table<u32>>),
  /// 64-bit entries.
  W64(Arc<Table<u64>>),
}

impl AnyTable {
  /// Build the table for `params` at its declared width.
  #[must_use]
  pub fn for_params(params: &CrcParams) -> Self {
    let (poly, refin) = (params.poly(), params.refin());
    match params.width() {
      Width::W8 => Self::W8(Arc::new(Table::build(poly, refin))),
      Width::W16 => Self::W16(Arc::new(Table::build(poly, refin))),
      Width::W32 => Self::W32(Arc::new(Table::build(poly, refin))),
      Width::W64 => Self::W64(Arc::new(Table::build(poly, refin))),
    }
  }

  /// Parameters this table was built from.
  #[must_use]
  pub fn key(&self) -> TableKey {
    match self {
      Self::W8(t) => t.key(),
      Self::W16(t) => t.key(),
      Self::W32(t) => t.key(),
      Self::W64(t) => t.key(),
    }
  }

  /// Entry width.
  #[inline]
  #[must_use]
  pub fn width(&self) -> Width {
    self.key().width
  }
}

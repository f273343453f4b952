//! Bitwise reference implementation.
//!
//! This is the "source of truth" for every table and kernel in the crate. It
//! performs the textbook MSB-first polynomial division one bit at a time:
//!
//! - **Obviously correct**: the loop mirrors the parameter model directly
//! - **Table-free**: shares no code with [`crate::table`] or [`crate::kernels`]
//! - **Const-evaluable**: check values can be verified at compile time
//!
//! It is intentionally slow (~8 operations per bit). Use it for test oracles,
//! fuzzing and generating expected values.

// SAFETY: `data[i]` is guarded by `i < data.len()`.
#![allow(clippy::indexing_slicing)]

use crate::{bits::reflect_bits, params::CrcParams};

/// CRC of `data` under `params`, computed bit by bit.
#[must_use]
pub const fn crc_bitwise(params: &CrcParams, data: &[u8]) -> u64 {
  let width = params.width();
  let shift = width.bits() - 8;
  let top = 1u64 << (width.bits() - 1);
  let mask = width.mask();
  let poly = params.poly();

  let mut crc = params.init();
  let mut i = 0;
  while i < data.len() {
    let byte = if params.refin() { data[i].reverse_bits() } else { data[i] };
    crc ^= (byte as u64) << shift;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
      crc &= mask;
      bit += 1;
    }
    i += 1;
  }

  if params.refout() {
    crc = reflect_bits(crc, width);
  }
  crc ^ params.xorout()
}

//! Non-cryptographic checksum traits.
//!
//! - **Streaming**: Incremental updates for data that arrives in pieces
//! - **Reusable**: Finalizing hands back a ready-to-use engine
//! - **Verifiable**: Every variant can be checked against its catalog value

use core::fmt::{Debug, LowerHex};

/// The canonical check input: ASCII `"123456789"`.
///
/// CRC catalogs describe each variant by the checksum of these nine bytes.
pub const CHECK_INPUT: &[u8; 9] = b"123456789";

/// Streaming checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use crcmodel::{Checksum, Crc16, catalog};
///
/// let mut crc = Crc16::new(catalog::crc16::USB)?;
/// crc.update(b"1234");
/// crc.update(b"56789");
/// assert_eq!(crc.finalize(), 0xB4C8);
/// ```
///
/// # Implementor Requirements
///
/// - `update(a); update(b)` must equal `update(a ++ b)`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the engine to its freshly constructed state
/// - `finish()` must return `finalize()` and leave the engine reset
pub trait Checksum {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + LowerHex;

  /// Update the engine with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the engine with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the engine with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything processed so far.
  ///
  /// This method does not change the running state.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the engine to its initial state.
  fn reset(&mut self);

  /// Finalize, then reset so the engine is ready for the next message.
  #[inline]
  #[must_use]
  fn finish(&mut self) -> Self::Output {
    let out = self.finalize();
    self.reset();
    out
  }
}

//! Error types shared across the workspace.
//!
//! Individual crates define their own configuration errors as needed.

use core::fmt;

/// A computed checksum disagreed with the declared check value.
///
/// Returned by self-checks that run the canonical [`CHECK_INPUT`](crate::CHECK_INPUT)
/// through an engine. A mismatch points at a bad parameter set, a broken
/// lookup table, or a kernel that does not honour the update contract.
///
/// # Examples
///
/// ```
/// use traits::CheckMismatch;
///
/// fn verify(expected: u64, actual: u64) -> Result<(), CheckMismatch> {
///   if expected == actual { Ok(()) } else { Err(CheckMismatch::new(expected, actual)) }
/// }
///
/// let err = verify(0x26, 0x27).unwrap_err();
/// assert_eq!(err.expected, 0x26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct CheckMismatch {
  /// The declared check value.
  pub expected: u64,
  /// What the engine actually produced.
  pub actual: u64,
}

impl CheckMismatch {
  /// Create a new mismatch report.
  #[inline]
  #[must_use]
  pub const fn new(expected: u64, actual: u64) -> Self {
    Self { expected, actual }
  }
}

impl fmt::Display for CheckMismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "check value mismatch: expected 0x{:x}, got 0x{:x}", self.expected, self.actual)
  }
}

impl core::error::Error for CheckMismatch {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    let err = CheckMismatch::new(0xb4c8, 0x1a);
    assert_eq!(err.to_string(), "check value mismatch: expected 0xb4c8, got 0x1a");
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", CheckMismatch::new(1, 2));
    assert!(dbg.contains("CheckMismatch"));
  }

  #[test]
  fn equality() {
    assert_eq!(CheckMismatch::new(1, 2), CheckMismatch::new(1, 2));
    assert_ne!(CheckMismatch::new(1, 2), CheckMismatch::new(2, 1));
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send::<CheckMismatch>();
    assert_sync::<CheckMismatch>();
    assert_error::<CheckMismatch>();
  }

  #[test]
  fn error_has_no_source() {
    use core::error::Error;

    assert!(CheckMismatch::new(0, 1).source().is_none());
  }
}

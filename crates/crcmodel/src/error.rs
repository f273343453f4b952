//! Error types for parameter validation and table adoption.
//!
//! Every error here is deterministic: it describes a bad configuration, never
//! a transient condition, so nothing is ever retried.

use core::fmt;

pub use traits::CheckMismatch;

use crate::width::Width;

/// A parameter set that cannot describe a supported CRC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConfigError {
  /// Width is not one of 8, 16, 32 or 64.
  UnsupportedWidth(u32),
  /// A parameter has bits set above `width`.
  ValueTooWide {
    /// Parameter name (`"poly"`, `"init"`, `"xorout"` or `"check"`).
    field: &'static str,
    /// The offending value.
    value: u64,
    /// The configured width.
    width: Width,
  },
  /// A typed engine was built from parameters of another width.
  WidthMismatch {
    /// Width of the engine's register type.
    expected: Width,
    /// Width declared by the parameters.
    actual: Width,
  },
  /// A required key is absent from a keyed configuration.
  MissingKey(&'static str),
  /// An ordered configuration had neither 6 nor 7 elements.
  InvalidArity(usize),
  /// A key was given a value of the wrong kind or range.
  InvalidValue(&'static str),
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::UnsupportedWidth(width) => write!(f, "unsupported CRC width {width} (expected 8, 16, 32 or 64)"),
      Self::ValueTooWide { field, value, width } => {
        write!(f, "{field} 0x{value:x} does not fit in {} bits", width.bits())
      }
      Self::WidthMismatch { expected, actual } => {
        write!(f, "parameters describe a {}-bit CRC, engine is {}-bit", actual.bits(), expected.bits())
      }
      Self::MissingKey(key) => write!(f, "missing required key `{key}`"),
      Self::InvalidArity(len) => write!(f, "expected 6 or 7 parameters, got {len}"),
      Self::InvalidValue(key) => write!(f, "invalid value for key `{key}`"),
    }
  }
}

impl core::error::Error for ConfigError {}

/// A lookup table that cannot serve the configured engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TableError {
  /// Caller-supplied buffer has the wrong number of entries.
  Length {
    /// Required entry count (256, or 512 for split 64-bit tables).
    expected: usize,
    /// Entries supplied.
    actual: usize,
  },
  /// Table element width disagrees with the configured width.
  Width {
    /// Configured width.
    expected: Width,
    /// Width of the supplied table.
    actual: Width,
  },
  /// Table was built for another polynomial or reflection convention.
  Params,
}

impl fmt::Display for TableError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::Length { expected, actual } => write!(f, "table has {actual} entries, expected {expected}"),
      Self::Width { expected, actual } => {
        write!(f, "table holds {}-bit entries, expected {}-bit", actual.bits(), expected.bits())
      }
      Self::Params => f.write_str("table was built for a different polynomial or reflection"),
    }
  }
}

impl core::error::Error for TableError {}

/// Construction failure for an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
  /// Invalid parameters.
  Config(ConfigError),
  /// Unusable lookup table.
  Table(TableError),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Config(err) => write!(f, "configuration error: {err}"),
      Self::Table(err) => write!(f, "table mismatch: {err}"),
    }
  }
}

impl core::error::Error for Error {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::Config(err) => Some(err),
      Self::Table(err) => Some(err),
    }
  }
}

impl From<ConfigError> for Error {
  #[inline]
  fn from(err: ConfigError) -> Self {
    Self::Config(err)
  }
}

impl From<TableError> for Error {
  #[inline]
  fn from(err: TableError) -> Self {
    Self::Table(err)
  }
}

/// Self-check failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SelfCheckError {
  /// The parameters carry no check value to compare against.
  MissingCheck,
  /// The engine disagreed with the declared check value.
  Mismatch(CheckMismatch),
}

impl fmt::Display for SelfCheckError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingCheck => f.write_str("self-check needs a check value"),
      Self::Mismatch(err) => fmt::Display::fmt(err, f),
    }
  }
}

impl core::error::Error for SelfCheckError {}

impl From<CheckMismatch> for SelfCheckError {
  #[inline]
  fn from(err: CheckMismatch) -> Self {
    Self::Mismatch(err)
  }
}

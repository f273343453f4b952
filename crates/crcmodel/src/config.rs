//! Kernel selection configuration.
//!
//! Engines take an explicit [`KernelChoice`] at construction. The only ambient
//! input is the default that [`KernelChoice::Auto`] resolves to, which can be
//! set once per process through the `CRCMODEL_KERNEL` environment variable
//! (read lazily, `std` only). An explicit choice always wins over the
//! environment.

use core::{fmt, str::FromStr};

/// Environment variable consulted by [`get`].
pub const ENV_KERNEL: &str = "CRCMODEL_KERNEL";

/// Requested update kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum KernelChoice {
  /// Use the preferred kernel for the register width and target.
  #[default]
  Auto,
  /// One table lookup per byte.
  Reference,
  /// Eight table lookups per loop iteration.
  Unrolled,
  /// 64-bit register held as two 32-bit halves (64-bit CRCs only).
  Split64,
}

impl KernelChoice {
  /// Every choice, `Auto` first.
  pub const ALL: [KernelChoice; 4] = [Self::Auto, Self::Reference, Self::Unrolled, Self::Split64];

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Unrolled => "unrolled",
      Self::Split64 => "split64",
    }
  }
}

impl fmt::Display for KernelChoice {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Unrecognized kernel name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseKernelChoiceError;

impl fmt::Display for ParseKernelChoiceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown kernel (expected auto, reference, unrolled or split64)")
  }
}

impl core::error::Error for ParseKernelChoiceError {}

impl FromStr for KernelChoice {
  type Err = ParseKernelChoiceError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    let value = value.trim();
    let is = |names: &[&str]| names.iter().any(|n| value.eq_ignore_ascii_case(n));

    if is(&["auto"]) {
      return Ok(Self::Auto);
    }
    if is(&["reference", "bytewise", "table"]) {
      return Ok(Self::Reference);
    }
    if is(&["unrolled", "unrolled8", "portable"]) {
      return Ok(Self::Unrolled);
    }
    if is(&["split64", "split", "halves"]) {
      return Ok(Self::Split64);
    }
    Err(ParseKernelChoiceError)
  }
}

/// Process-wide kernel configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct KernelConfig {
  /// Choice requested through the environment.
  pub requested: KernelChoice,
  /// Choice `Auto` resolves to.
  ///
  /// Identical to `requested` today: every kernel is portable, so nothing
  /// needs clamping to CPU capabilities. Per-width clamping (`Split64` on a
  /// narrow register) happens at selection time.
  pub effective: KernelChoice,
}

#[cfg(feature = "std")]
fn read_env() -> KernelConfig {
  let requested = std::env::var(ENV_KERNEL).ok().and_then(|v| v.parse().ok()).unwrap_or_default();
  KernelConfig { requested, effective: requested }
}

/// Current configuration, read from the environment on first use.
#[cfg(feature = "std")]
#[must_use]
pub fn get() -> KernelConfig {
  use std::sync::OnceLock;
  static CONFIG: OnceLock<KernelConfig> = OnceLock::new();
  *CONFIG.get_or_init(read_env)
}

/// Current configuration (always the defaults without `std`).
#[cfg(not(feature = "std"))]
#[must_use]
pub fn get() -> KernelConfig {
  KernelConfig::default()
}

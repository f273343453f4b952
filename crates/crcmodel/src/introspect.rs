//! Kernel selection introspection.
//!
//! The crate never logs; which kernel runs is observable through these APIs
//! (and [`Crc::kernel_name`](crate::Crc::kernel_name)) without touching the
//! hot path.
//!
//! # Examples
//!
//! ```
//! use crcmodel::{DispatchInfo, KernelChoice, kernel_for};
//!
//! let info = DispatchInfo::current();
//! println!("{info}");
//!
//! println!("CRC-64 auto: {}", kernel_for::<u64>(KernelChoice::Auto));
//! ```

use core::fmt;

use crate::{bits::Register, config, config::KernelChoice, kernels};

/// Kernel each register width selects for [`KernelChoice::Auto`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DispatchInfo {
  pointer_width: u32,
  config: config::KernelConfig,
  auto: [&'static str; 4],
}

impl DispatchInfo {
  /// Snapshot for this process.
  ///
  /// Reads the environment configuration on first use.
  #[must_use]
  pub fn current() -> Self {
    Self {
      pointer_width: usize::BITS,
      config: config::get(),
      auto: [
        kernel_for::<u8>(KernelChoice::Auto),
        kernel_for::<u16>(KernelChoice::Auto),
        kernel_for::<u32>(KernelChoice::Auto),
        kernel_for::<u64>(KernelChoice::Auto),
      ],
    }
  }

  /// Target pointer width in bits.
  #[inline]
  #[must_use]
  pub const fn pointer_width(&self) -> u32 {
    self.pointer_width
  }

  /// Process kernel configuration.
  #[inline]
  #[must_use]
  pub const fn config(&self) -> config::KernelConfig {
    self.config
  }

  /// Auto-selected kernel names for 8, 16, 32 and 64-bit registers.
  #[inline]
  #[must_use]
  pub const fn auto_kernels(&self) -> [&'static str; 4] {
    self.auto
  }
}

impl fmt::Display for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let [w8, w16, w32, w64] = self.auto;
    write!(
      f,
      "{}-bit target, default={}: crc8={w8} crc16={w16} crc32={w32} crc64={w64}",
      self.pointer_width, self.config.effective
    )
  }
}

impl fmt::Debug for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DispatchInfo")
      .field("pointer_width", &self.pointer_width)
      .field("config", &self.config)
      .field("auto", &self.auto)
      .finish()
  }
}

/// Name of the kernel `choice` resolves to for register type `R`.
#[inline]
#[must_use]
pub fn kernel_for<R: Register>(choice: KernelChoice) -> &'static str {
  kernels::select::<R>(choice).name
}

//! Table-driven CRC engine over the classic parameter model.
//!
//! One generic algorithm covers every CRC described by
//! `(width, poly, init, refin, refout, xorout)`: the named variants in
//! [`catalog`] and any custom parameter set.
//!
//! # Components
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`bits`] | Bit/byte reflection, the [`Register`] trait |
//! | [`params`] | [`CrcParams`], ordered and keyed configuration input |
//! | [`table`] | 256-entry lookup tables, split 64-bit layout |
//! | [`kernels`] | Interchangeable per-byte update loops |
//! | [`engine`] | [`Crc<R>`] and the runtime-width [`CrcEngine`] |
//! | [`reference`] | Bitwise oracle used by tests and fuzzing |
//!
//! # Supported Widths
//!
//! | Width | Register | Engine |
//! |-------|----------|--------|
//! | 8 | `u8` | [`Crc8`] |
//! | 16 | `u16` | [`Crc16`] |
//! | 32 | `u32` | [`Crc32`] |
//! | 64 | `u64` | [`Crc64`] |
//!
//! # Example
//!
//! ```rust
//! use crcmodel::{Crc32, CrcEngine, CrcParams, Width, catalog};
//!
//! // A named variant.
//! let mut crc = Crc32::new(catalog::crc32::CRC32)?;
//! crc.digest(b"1234");
//! crc.digest(b"56789");
//! assert_eq!(crc.checksum(), 0xCBF4_3926);
//!
//! // A custom parameter set, width chosen at runtime.
//! let params = CrcParams::new(Width::W16, 0x1DCF, 0xFFFF, false, false, 0xFFFF)?;
//! let mut engine = CrcEngine::new(params)?;
//! assert_eq!(engine.checksum_of(b"123456789"), 0xA819);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Kernel Selection
//!
//! Engines take an explicit [`KernelChoice`]; `Auto` resolves to the target's
//! preferred kernel, or to the `CRCMODEL_KERNEL` environment default (`std`
//! only). Selection is observable through [`DispatchInfo`] and
//! [`Crc::kernel_name`].
//!
//! # no_std Support
//!
//! This crate is `no_std` (it needs `alloc` for shared tables). Disable the
//! `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! crcmodel = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bits;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod introspect;
pub mod kernels;
pub mod params;
pub mod reference;
pub mod table;
pub mod width;

#[cfg(test)]
mod proptests;

pub use bits::Register;
pub use config::KernelChoice;
pub use engine::{Crc, Crc8, Crc16, Crc32, Crc64, CrcEngine};
pub use error::{CheckMismatch, ConfigError, Error, SelfCheckError, TableError};
pub use introspect::{DispatchInfo, kernel_for};
pub use kernels::Kernel;
pub use params::{CrcParams, ParamValue, RawParams};
pub use table::{AnyTable, SplitTable, Table, TableKey};
// Re-export traits for convenience
pub use traits::{CHECK_INPUT, Checksum};
pub use width::Width;

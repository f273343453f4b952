//! Core checksum traits for crcmodel.
//!
//! This crate provides the streaming contract that every CRC engine in the
//! workspace conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Streaming non-cryptographic checksums | `Crc<u16>`, `CrcEngine` |
//!
//! # Error Types
//!
//! - [`CheckMismatch`] - A checksum disagreed with its declared check value
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;

pub use checksum::{CHECK_INPUT, Checksum};
pub use error::CheckMismatch;

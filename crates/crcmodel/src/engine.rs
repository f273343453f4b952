//! Streaming CRC engines.
//!
//! [`Crc<R>`] is specialized to one register type at compile time;
//! [`CrcEngine`] picks the register type from the parameters at runtime.
//!
//! # Register orientation
//!
//! The running register is kept in the orientation the shared right-shift
//! update expects: bit-reflected for `refin` variants, byte-swapped
//! otherwise. Reset converts `init` into that orientation; finalization
//! converts back, reflects once more when `refin != refout`, then applies
//! `xorout`.

use alloc::sync::Arc;
use core::fmt;

use traits::{CHECK_INPUT, CheckMismatch, Checksum};

use crate::{
  bits::Register,
  config::KernelChoice,
  error::{ConfigError, Error, SelfCheckError, TableError},
  kernels::{self, Kernel},
  params::CrcParams,
  table::{AnyTable, Table},
  width::Width,
};

#[inline]
pub(crate) fn initial<R: Register>(params: &CrcParams) -> R {
  let init = R::from_u64(params.init());
  if params.refin() { init.reflect_bits() } else { init.reflect_bytes() }
}

#[inline]
pub(crate) fn finish<R: Register>(params: &CrcParams, crc: R) -> R {
  let mut out = if params.refin() { crc } else { crc.reflect_bytes() };
  if params.refin() != params.refout() {
    out = out.reflect_bits();
  }
  out ^ R::from_u64(params.xorout())
}

fn ensure_width<R: Register>(params: &CrcParams) -> Result<(), ConfigError> {
  if params.width() == R::WIDTH {
    Ok(())
  } else {
    Err(ConfigError::WidthMismatch { expected: R::WIDTH, actual: params.width() })
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Crc<R>
// ─────────────────────────────────────────────────────────────────────────────

/// A CRC engine with a `R`-typed register.
///
/// # Example
///
/// ```rust
/// use crcmodel::{Crc16, catalog};
///
/// let mut crc = Crc16::new(catalog::crc16::USB)?;
/// crc.digest(b"1234");
/// crc.digest(b"56789");
/// assert_eq!(crc.checksum(), 0xB4C8);
///
/// // checksum() leaves the engine reset.
/// assert_eq!(crc.checksum_of(b"123456789"), 0xB4C8);
/// # Ok::<(), crcmodel::Error>(())
/// ```
#[derive(Clone)]
pub struct Crc<R: Register> {
  params: CrcParams,
  table: Arc<Table<R>>,
  kernel: Kernel<R>,
  crc: R,
}

/// 8-bit engine.
pub type Crc8 = Crc<u8>;
/// 16-bit engine.
pub type Crc16 = Crc<u16>;
/// 32-bit engine.
pub type Crc32 = Crc<u32>;
/// 64-bit engine.
pub type Crc64 = Crc<u64>;

impl<R: Register> Crc<R> {
  /// Build an engine with an auto-selected kernel.
  ///
  /// # Errors
  ///
  /// [`ConfigError::WidthMismatch`] if `params` is not `R`'s width.
  pub fn new(params: CrcParams) -> Result<Self, Error> {
    Self::with_kernel(params, KernelChoice::Auto)
  }

  /// Build an engine with an explicit kernel choice.
  ///
  /// # Errors
  ///
  /// [`ConfigError::WidthMismatch`] if `params` is not `R`'s width.
  pub fn with_kernel(params: CrcParams, choice: KernelChoice) -> Result<Self, Error> {
    ensure_width::<R>(&params)?;
    let table = Arc::new(Table::build(params.poly(), params.refin()));
    Ok(Self::assemble(params, table, kernels::select(choice)))
  }

  /// Build an engine around a shared, pre-built table.
  ///
  /// # Errors
  ///
  /// - [`TableError::Width`] if `params` is not `R`'s width.
  /// - [`TableError::Params`] if the table was built for another polynomial
  ///   or reflection convention.
  pub fn with_table(params: CrcParams, table: Arc<Table<R>>, choice: KernelChoice) -> Result<Self, Error> {
    if params.width() != R::WIDTH {
      return Err(TableError::Width { expected: params.width(), actual: R::WIDTH }.into());
    }
    if !table.serves(&params) {
      return Err(TableError::Params.into());
    }
    Ok(Self::assemble(params, table, kernels::select(choice)))
  }

  fn assemble(params: CrcParams, table: Arc<Table<R>>, kernel: Kernel<R>) -> Self {
    Self { params, table, kernel, crc: initial(&params) }
  }

  /// Restore the register to `init`.
  #[inline]
  pub fn reset(&mut self) {
    self.crc = initial(&self.params);
  }

  /// Feed `data` into the register.
  #[inline]
  pub fn digest(&mut self, data: &[u8]) {
    self.crc = self.kernel.update(self.crc, data, &self.table);
  }

  /// Checksum of everything digested since the last reset, without resetting.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> R {
    finish(&self.params, self.crc)
  }

  /// Finalize, then reset.
  #[inline]
  #[must_use]
  pub fn checksum(&mut self) -> R {
    let out = self.finalize();
    self.reset();
    out
  }

  /// Digest `data`, finalize, then reset.
  #[inline]
  #[must_use]
  pub fn checksum_of(&mut self, data: &[u8]) -> R {
    self.digest(data);
    self.checksum()
  }

  /// Verify the engine against the declared check value.
  ///
  /// Runs on a fresh register; the running state is untouched.
  ///
  /// # Errors
  ///
  /// - [`SelfCheckError::MissingCheck`] if the parameters declare no check value.
  /// - [`SelfCheckError::Mismatch`] if the computed value differs.
  pub fn self_check(&self) -> Result<(), SelfCheckError> {
    let expected = self.params.check().ok_or(SelfCheckError::MissingCheck)?;
    let crc = self.kernel.update(initial(&self.params), CHECK_INPUT, &self.table);
    let actual = finish(&self.params, crc).to_u64();
    if actual == expected {
      Ok(())
    } else {
      Err(CheckMismatch::new(expected, actual).into())
    }
  }

  /// Parameters this engine was built with.
  #[inline]
  #[must_use]
  pub fn params(&self) -> &CrcParams {
    &self.params
  }

  /// The lookup table, shareable with other engines of the same key.
  #[inline]
  #[must_use]
  pub fn table(&self) -> &Arc<Table<R>> {
    &self.table
  }

  /// The selected kernel.
  #[inline]
  #[must_use]
  pub fn kernel(&self) -> Kernel<R> {
    self.kernel
  }

  /// Name of the selected kernel.
  #[inline]
  #[must_use]
  pub fn kernel_name(&self) -> &'static str {
    self.kernel.name
  }
}

impl<R: Register> fmt::Debug for Crc<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc")
      .field("params", &self.params)
      .field("kernel", &self.kernel.name)
      .field("crc", &self.crc)
      .finish()
  }
}

impl<R: Register> Checksum for Crc<R> {
  const OUTPUT_SIZE: usize = R::WIDTH.bytes();
  type Output = R;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.digest(data);
  }

  #[inline]
  fn finalize(&self) -> R {
    Crc::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc::reset(self);
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// CrcEngine
// ─────────────────────────────────────────────────────────────────────────────

/// A CRC engine whose width is chosen by its parameters at runtime.
///
/// Results are widened to `u64`.
#[derive(Clone, Debug)]
pub enum CrcEngine {
  /// 8-bit register.
  W8(Crc8),
  /// 16-bit register.
  W16(Crc16),
  /// 32-bit register.
  W32(Crc32),
  /// 64-bit register.
  W64(Crc64),
}

macro_rules! each {
  ($self:expr, $crc:ident => $body:expr) => {
    match $self {
      CrcEngine::W8($crc) => $body,
      CrcEngine::W16($crc) => $body,
      CrcEngine::W32($crc) => $body,
      CrcEngine::W64($crc) => $body,
    }
  };
}

impl CrcEngine {
  /// Build an engine with an auto-selected kernel.
  ///
  /// Parameters are validated on construction, so this cannot fail; the
  /// `Result` keeps the signature aligned with [`Crc::new`].
  ///
  /// # Errors
  ///
  /// None today.
  pub fn new(params: CrcParams) -> Result<Self, Error> {
    Self::with_kernel(params, KernelChoice::Auto)
  }

  /// Build an engine with an explicit kernel choice.
  ///
  /// # Errors
  ///
  /// None today; see [`CrcEngine::new`].
  pub fn with_kernel(params: CrcParams, choice: KernelChoice) -> Result<Self, Error> {
    Ok(match params.width() {
      Width::W8 => Self::W8(Crc::with_kernel(params, choice)?),
      Width::W16 => Self::W16(Crc::with_kernel(params, choice)?),
      Width::W32 => Self::W32(Crc::with_kernel(params, choice)?),
      Width::W64 => Self::W64(Crc::with_kernel(params, choice)?),
    })
  }

  /// Build an engine around a shared table.
  ///
  /// # Errors
  ///
  /// - [`TableError::Width`] if the table's width is not the configured width.
  /// - [`TableError::Params`] if the table was built for other parameters.
  pub fn with_table(params: CrcParams, table: AnyTable, choice: KernelChoice) -> Result<Self, Error> {
    match (params.width(), table) {
      (Width::W8, AnyTable::W8(t)) => Crc::with_table(params, t, choice).map(Self::W8),
      (Width::W16, AnyTable::W16(t)) => Crc::with_table(params, t, choice).map(Self::W16),
      (Width::W32, AnyTable::W32(t)) => Crc::with_table(params, t, choice).map(Self::W32),
      (Width::W64, AnyTable::W64(t)) => Crc::with_table(params, t, choice).map(Self::W64),
      (expected, t) => Err(TableError::Width { expected, actual: t.width() }.into()),
    }
  }

  /// Restore the register to `init`.
  pub fn reset(&mut self) {
    each!(self, crc => crc.reset())
  }

  /// Feed `data` into the register.
  pub fn digest(&mut self, data: &[u8]) {
    each!(self, crc => crc.digest(data))
  }

  /// Checksum so far, without resetting.
  #[must_use]
  pub fn finalize(&self) -> u64 {
    each!(self, crc => crc.finalize().to_u64())
  }

  /// Finalize, then reset.
  #[must_use]
  pub fn checksum(&mut self) -> u64 {
    each!(self, crc => crc.checksum().to_u64())
  }

  /// Digest `data`, finalize, then reset.
  #[must_use]
  pub fn checksum_of(&mut self, data: &[u8]) -> u64 {
    each!(self, crc => crc.checksum_of(data).to_u64())
  }

  /// See [`Crc::self_check`].
  ///
  /// # Errors
  ///
  /// As [`Crc::self_check`].
  pub fn self_check(&self) -> Result<(), SelfCheckError> {
    each!(self, crc => crc.self_check())
  }

  /// Parameters this engine was built with.
  #[must_use]
  pub fn params(&self) -> &CrcParams {
    each!(self, crc => crc.params())
  }

  /// Register width.
  #[must_use]
  pub fn width(&self) -> Width {
    self.params().width()
  }

  /// The lookup table, shareable with other engines of the same key.
  #[must_use]
  pub fn table(&self) -> AnyTable {
    match self {
      Self::W8(crc) => AnyTable::W8(Arc::clone(crc.table())),
      Self::W16(crc) => AnyTable::W16(Arc::clone(crc.table())),
      Self::W32(crc) => AnyTable::W32(Arc::clone(crc.table())),
      Self::W64(crc) => AnyTable::W64(Arc::clone(crc.table())),
    }
  }

  /// Name of the selected kernel.
  #[must_use]
  pub fn kernel_name(&self) -> &'static str {
    each!(self, crc => crc.kernel_name())
  }
}

impl From<Crc8> for CrcEngine {
  fn from(crc: Crc8) -> Self {
    Self::W8(crc)
  }
}

impl From<Crc16> for CrcEngine {
  fn from(crc: Crc16) -> Self {
    Self::W16(crc)
  }
}

impl From<Crc32> for CrcEngine {
  fn from(crc: Crc32) -> Self {
    Self::W32(crc)
  }
}

impl From<Crc64> for CrcEngine {
  fn from(crc: Crc64) -> Self {
    Self::W64(crc)
  }
}

impl Checksum for CrcEngine {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.digest(data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    CrcEngine::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    CrcEngine::reset(self);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog;

  #[test]
  fn known_vectors() {
    assert_eq!(Crc8::new(catalog::crc8::BLUETOOTH).unwrap().checksum_of(CHECK_INPUT), 0x26);
    assert_eq!(Crc16::new(catalog::crc16::USB).unwrap().checksum_of(CHECK_INPUT), 0xB4C8);
    assert_eq!(Crc32::new(catalog::crc32::AUTOSAR).unwrap().checksum_of(CHECK_INPUT), 0x1697_D06A);
    assert_eq!(Crc64::new(catalog::crc64::GO_ISO).unwrap().checksum_of(CHECK_INPUT), 0xB909_56C7_75A4_1001);
  }

  #[test]
  fn wrong_register_type_is_a_config_error() {
    let err = Crc16::new(catalog::crc32::CRC32).unwrap_err();
    assert_eq!(err, Error::Config(ConfigError::WidthMismatch { expected: Width::W16, actual: Width::W32 }));
  }

  #[test]
  fn finalize_does_not_reset() {
    let mut crc = Crc32::new(catalog::crc32::CRC32).unwrap();
    crc.digest(b"1234");
    let peek = crc.finalize();
    assert_eq!(crc.finalize(), peek);
    crc.digest(b"56789");
    assert_eq!(crc.checksum(), 0xCBF4_3926);
  }

  #[test]
  fn checksum_resets() {
    let mut crc = Crc16::new(catalog::crc16::PROFIBUS).unwrap();
    let empty = crc.checksum();
    assert_eq!(crc.checksum_of(CHECK_INPUT), 0xA819);
    assert_eq!(crc.checksum(), empty);
  }

  #[test]
  fn usb_reset_discards_pending_bytes() {
    let mut crc = Crc16::new(catalog::crc16::USB).unwrap();
    crc.digest(b"123");
    crc.reset();
    crc.digest(b"456789");
    assert_eq!(crc.checksum(), 0x001A);
  }

  #[test]
  fn self_check_reports_mismatch_and_missing_check() {
    let crc = Crc16::new(catalog::crc16::USB).unwrap();
    assert_eq!(crc.self_check(), Ok(()));

    let bad = catalog::crc16::USB.with_check(0x1234).unwrap();
    assert_eq!(
      Crc16::new(bad).unwrap().self_check(),
      Err(SelfCheckError::Mismatch(CheckMismatch::new(0x1234, 0xB4C8)))
    );

    let none = catalog::crc16::USB.without_check();
    assert_eq!(Crc16::new(none).unwrap().self_check(), Err(SelfCheckError::MissingCheck));
  }

  #[test]
  fn self_check_leaves_running_state() {
    let mut crc = Crc32::new(catalog::crc32::BZIP2).unwrap();
    crc.digest(b"1234");
    crc.self_check().unwrap();
    crc.digest(b"56789");
    assert_eq!(crc.checksum(), 0xFC89_1918);
  }

  #[test]
  fn shared_table() {
    let a = Crc32::new(catalog::crc32::CRC32).unwrap();
    // JAMCRC shares the CRC-32 polynomial and reflection.
    let mut b = Crc32::with_table(catalog::crc32::JAMCRC, Arc::clone(a.table()), KernelChoice::Auto).unwrap();
    assert!(Arc::ptr_eq(a.table(), b.table()));
    assert_eq!(b.checksum_of(CHECK_INPUT), 0x340B_C6D9);

    let err = Crc32::with_table(catalog::crc32::BZIP2, Arc::clone(a.table()), KernelChoice::Auto).unwrap_err();
    assert_eq!(err, Error::Table(TableError::Params));
  }

  #[test]
  fn engine_table_width_mismatch() {
    let table = AnyTable::for_params(&catalog::crc16::USB);
    let err = CrcEngine::with_table(catalog::crc32::CRC32, table, KernelChoice::Auto).unwrap_err();
    assert_eq!(err, Error::Table(TableError::Width { expected: Width::W32, actual: Width::W16 }));
  }

  #[test]
  fn engine_dispatches_on_width() {
    for (name, params) in catalog::ALL {
      let mut engine = CrcEngine::new(*params).unwrap();
      assert_eq!(engine.width(), params.width());
      assert_eq!(Some(engine.checksum_of(CHECK_INPUT)), params.check(), "{name}");
      engine.self_check().unwrap();
    }
  }

  #[test]
  fn explicit_kernel_is_reported() {
    let crc = Crc64::with_kernel(catalog::crc64::XZ, KernelChoice::Split64).unwrap();
    assert_eq!(crc.kernel_name(), kernels::SPLIT64);
    let crc = Crc16::with_kernel(catalog::crc16::ARC, KernelChoice::Reference).unwrap();
    assert_eq!(crc.kernel_name(), kernels::BYTEWISE);
  }

  #[test]
  fn checksum_trait_finish_resets() {
    let mut engine = CrcEngine::new(catalog::crc64::ECMA_182).unwrap();
    engine.update_vectored(&[b"1234".as_slice(), b"5678".as_slice(), b"9".as_slice()]);
    assert_eq!(engine.finish(), 0x6C40_DF5F_0B49_7347);
    assert_eq!(engine.finish(), 0);
  }
}

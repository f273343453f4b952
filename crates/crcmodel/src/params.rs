//! CRC algorithm parameters.
//!
//! Parameters follow the conventions of the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/): a variant is
//! fully described by `width`, `poly`, `init`, `refin`, `refout` and `xorout`,
//! plus an optional `check` value (the CRC of `"123456789"`).
//!
//! Three input shapes are accepted:
//!
//! - [`CrcParams::new`] and the catalog constants
//! - ordered 6- or 7-element sequences (tuples, or `&[ParamValue]`)
//! - keyed maps via [`RawParams`] (and, with the `serde` feature, any keyed
//!   serde format)

use crate::{bits::reflect_bits, error::ConfigError, width::Width};

/// CRC algorithm parameters.
///
/// Every value is guaranteed to fit in `width` bits; construct through
/// [`CrcParams::new`] or one of the `TryFrom` conversions.
///
/// # Reflection
///
/// "Reflected" means bit-reversed. `refin` reflects each input byte before it
/// enters the register, `refout` reflects the final register before `xorout`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Deserialize, serde::Serialize),
  serde(try_from = "RawParams", into = "RawParams")
)]
pub struct CrcParams {
  width: Width,
  poly: u64,
  init: u64,
  refin: bool,
  refout: bool,
  xorout: u64,
  check: Option<u64>,
}

const fn ensure_fits(field: &'static str, value: u64, width: Width) -> Result<(), ConfigError> {
  if width.fits(value) {
    Ok(())
  } else {
    Err(ConfigError::ValueTooWide { field, value, width })
  }
}

impl CrcParams {
  /// Validate and build a parameter set without a check value.
  ///
  /// # Errors
  ///
  /// [`ConfigError::ValueTooWide`] if `poly`, `init` or `xorout` has bits
  /// above `width`.
  pub const fn new(width: Width, poly: u64, init: u64, refin: bool, refout: bool, xorout: u64) -> Result<Self, ConfigError> {
    if let Err(e) = ensure_fits("poly", poly, width) {
      return Err(e);
    }
    if let Err(e) = ensure_fits("init", init, width) {
      return Err(e);
    }
    if let Err(e) = ensure_fits("xorout", xorout, width) {
      return Err(e);
    }
    Ok(Self { width, poly, init, refin, refout, xorout, check: None })
  }

  /// Attach the expected CRC of `"123456789"`.
  ///
  /// # Errors
  ///
  /// [`ConfigError::ValueTooWide`] if `check` has bits above `width`.
  pub const fn with_check(self, check: u64) -> Result<Self, ConfigError> {
    match ensure_fits("check", check, self.width) {
      Ok(()) => Ok(Self { check: Some(check), ..self }),
      Err(e) => Err(e),
    }
  }

  /// Drop the check value.
  #[inline]
  #[must_use]
  pub const fn without_check(self) -> Self {
    Self { check: None, ..self }
  }

  /// Register width.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> Width {
    self.width
  }

  /// Generator polynomial, without the implicit top bit.
  #[inline]
  #[must_use]
  pub const fn poly(&self) -> u64 {
    self.poly
  }

  /// Initial register value.
  #[inline]
  #[must_use]
  pub const fn init(&self) -> u64 {
    self.init
  }

  /// Reflect input bytes.
  #[inline]
  #[must_use]
  pub const fn refin(&self) -> bool {
    self.refin
  }

  /// Reflect the final register.
  #[inline]
  #[must_use]
  pub const fn refout(&self) -> bool {
    self.refout
  }

  /// Final XOR mask.
  #[inline]
  #[must_use]
  pub const fn xorout(&self) -> u64 {
    self.xorout
  }

  /// Expected CRC of `"123456789"`, if declared.
  #[inline]
  #[must_use]
  pub const fn check(&self) -> Option<u64> {
    self.check
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// For reflected CRCs, the table is built from the polynomial in this form.
  #[inline]
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    reflect_bits(self.poly, self.width)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ordered sequences
// ─────────────────────────────────────────────────────────────────────────────

impl TryFrom<(u32, u64, u64, bool, bool, u64)> for CrcParams {
  type Error = ConfigError;

  fn try_from((width, poly, init, refin, refout, xorout): (u32, u64, u64, bool, bool, u64)) -> Result<Self, Self::Error> {
    Self::new(Width::from_bits(width)?, poly, init, refin, refout, xorout)
  }
}

impl TryFrom<(u32, u64, u64, bool, bool, u64, u64)> for CrcParams {
  type Error = ConfigError;

  fn try_from(
    (width, poly, init, refin, refout, xorout, check): (u32, u64, u64, bool, bool, u64, u64),
  ) -> Result<Self, Self::Error> {
    Self::try_from((width, poly, init, refin, refout, xorout))?.with_check(check)
  }
}

/// A single dynamically-typed parameter value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamValue {
  /// Numeric value (`width`, `poly`, `init`, `xorout`, `check`).
  Int(u64),
  /// Flag value (`refin`, `refout`).
  Bool(bool),
}

impl From<u64> for ParamValue {
  #[inline]
  fn from(value: u64) -> Self {
    Self::Int(value)
  }
}

impl From<bool> for ParamValue {
  #[inline]
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

/// Keys in ordered-sequence position order.
pub const KEYS: [&str; 7] = ["width", "poly", "init", "refin", "refout", "xorout", "check"];

impl TryFrom<&[ParamValue]> for CrcParams {
  type Error = ConfigError;

  /// Build from `[width, poly, init, refin, refout, xorout]` with an optional
  /// trailing `check`.
  fn try_from(values: &[ParamValue]) -> Result<Self, Self::Error> {
    if !matches!(values.len(), 6 | 7) {
      return Err(ConfigError::InvalidArity(values.len()));
    }
    let mut raw = RawParams::default();
    for (key, value) in KEYS.iter().zip(values) {
      raw.set(key, *value)?;
    }
    Self::try_from(raw)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyed maps
// ─────────────────────────────────────────────────────────────────────────────

/// Unvalidated keyed parameters.
///
/// Collect keys with [`RawParams::set`] (or deserialize with the `serde`
/// feature), then convert with `CrcParams::try_from`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize), serde(default))]
pub struct RawParams {
  /// Register width in bits.
  pub width: Option<u32>,
  /// Generator polynomial.
  pub poly: Option<u64>,
  /// Initial register value.
  pub init: Option<u64>,
  /// Reflect input bytes.
  pub refin: Option<bool>,
  /// Reflect the final register.
  pub refout: Option<bool>,
  /// Final XOR mask.
  pub xorout: Option<u64>,
  /// Expected CRC of `"123456789"`.
  #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
  pub check: Option<u64>,
}

impl RawParams {
  /// Set `key` to `value`.
  ///
  /// Returns `Ok(false)` for unrecognized keys, which are ignored.
  ///
  /// # Errors
  ///
  /// [`ConfigError::InvalidValue`] if a flag key receives a number, a numeric
  /// key receives a flag, or `width` does not fit `u32`.
  pub fn set(&mut self, key: &str, value: ParamValue) -> Result<bool, ConfigError> {
    let Some(&key) = KEYS.iter().find(|k| **k == key) else {
      return Ok(false);
    };
    match (key, value) {
      ("width", ParamValue::Int(v)) => {
        self.width = Some(u32::try_from(v).map_err(|_| ConfigError::InvalidValue(key))?);
      }
      ("poly", ParamValue::Int(v)) => self.poly = Some(v),
      ("init", ParamValue::Int(v)) => self.init = Some(v),
      ("xorout", ParamValue::Int(v)) => self.xorout = Some(v),
      ("check", ParamValue::Int(v)) => self.check = Some(v),
      ("refin", ParamValue::Bool(v)) => self.refin = Some(v),
      ("refout", ParamValue::Bool(v)) => self.refout = Some(v),
      _ => return Err(ConfigError::InvalidValue(key)),
    }
    Ok(true)
  }
}

impl TryFrom<RawParams> for CrcParams {
  type Error = ConfigError;

  fn try_from(raw: RawParams) -> Result<Self, Self::Error> {
    let width = raw.width.ok_or(ConfigError::MissingKey("width"))?;
    let poly = raw.poly.ok_or(ConfigError::MissingKey("poly"))?;
    let init = raw.init.ok_or(ConfigError::MissingKey("init"))?;
    let refin = raw.refin.ok_or(ConfigError::MissingKey("refin"))?;
    let refout = raw.refout.ok_or(ConfigError::MissingKey("refout"))?;
    let xorout = raw.xorout.ok_or(ConfigError::MissingKey("xorout"))?;
    let params = Self::try_from((width, poly, init, refin, refout, xorout))?;
    match raw.check {
      Some(check) => params.with_check(check),
      None => Ok(params),
    }
  }
}

impl From<CrcParams> for RawParams {
  fn from(params: CrcParams) -> Self {
    Self {
      width: Some(params.width.bits()),
      poly: Some(params.poly),
      init: Some(params.init),
      refin: Some(params.refin),
      refout: Some(params.refout),
      xorout: Some(params.xorout),
      check: params.check,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_crc32c_polynomial_reflected() {
    let p = CrcParams::new(Width::W32, 0x1EDC_6F41, 0, true, true, 0).unwrap();
    assert_eq!(p.polynomial_reflected(), 0x82F6_3B78);
  }

  #[test]
  fn test_crc32_polynomial_reflected() {
    let p = CrcParams::new(Width::W32, 0x04C1_1DB7, 0, true, true, 0).unwrap();
    assert_eq!(p.polynomial_reflected(), 0xEDB8_8320);
  }

  #[test]
  fn rejects_values_wider_than_width() {
    assert_eq!(
      CrcParams::new(Width::W8, 0x107, 0, false, false, 0),
      Err(ConfigError::ValueTooWide { field: "poly", value: 0x107, width: Width::W8 })
    );
    assert_eq!(
      CrcParams::new(Width::W16, 0x1021, 0x1_0000, false, false, 0),
      Err(ConfigError::ValueTooWide { field: "init", value: 0x1_0000, width: Width::W16 })
    );
    assert_eq!(
      CrcParams::new(Width::W32, 0x04C1_1DB7, 0, true, true, 1 << 32),
      Err(ConfigError::ValueTooWide { field: "xorout", value: 1 << 32, width: Width::W32 })
    );
    let p = CrcParams::new(Width::W8, 0x07, 0, false, false, 0).unwrap();
    assert_eq!(p.with_check(0x100).unwrap_err(), ConfigError::ValueTooWide { field: "check", value: 0x100, width: Width::W8 });
  }

  #[test]
  fn accepts_full_width_64_values() {
    let p = CrcParams::new(Width::W64, u64::MAX, u64::MAX, true, true, u64::MAX).unwrap();
    assert_eq!(p.init(), u64::MAX);
  }

  #[test]
  fn tuple_conversion() {
    let p = CrcParams::try_from((16u32, 0x8005u64, 0xFFFFu64, true, true, 0xFFFFu64)).unwrap();
    assert_eq!(p.width(), Width::W16);
    assert_eq!(p.check(), None);

    let p = CrcParams::try_from((16u32, 0x8005u64, 0xFFFFu64, true, true, 0xFFFFu64, 0xB4C8u64)).unwrap();
    assert_eq!(p.check(), Some(0xB4C8));

    assert_eq!(
      CrcParams::try_from((24u32, 0x864CFBu64, 0u64, false, false, 0u64)),
      Err(ConfigError::UnsupportedWidth(24))
    );
  }

  #[test]
  fn slice_conversion_checks_arity() {
    let six = [
      ParamValue::Int(8),
      ParamValue::Int(0xA7),
      ParamValue::Int(0),
      ParamValue::Bool(true),
      ParamValue::Bool(true),
      ParamValue::Int(0),
    ];
    let p = CrcParams::try_from(&six[..]).unwrap();
    assert_eq!(p.poly(), 0xA7);
    assert_eq!(CrcParams::try_from(&six[..5]), Err(ConfigError::InvalidArity(5)));

    let mut seven = [ParamValue::Int(0); 7];
    seven[..6].copy_from_slice(&six);
    seven[6] = ParamValue::Int(0x26);
    assert_eq!(CrcParams::try_from(&seven[..]).unwrap().check(), Some(0x26));
  }

  #[test]
  fn keyed_missing_key_is_reported() {
    let mut raw = RawParams::default();
    raw.set("width", 16u64.into()).unwrap();
    raw.set("poly", 0x1021u64.into()).unwrap();
    raw.set("init", 0u64.into()).unwrap();
    raw.set("refin", false.into()).unwrap();
    raw.set("refout", false.into()).unwrap();
    assert_eq!(CrcParams::try_from(raw), Err(ConfigError::MissingKey("xorout")));

    raw.set("xorout", 0u64.into()).unwrap();
    assert!(CrcParams::try_from(raw).is_ok());
  }

  #[test]
  fn keyed_set_ignores_unknown_and_rejects_wrong_kind() {
    let mut raw = RawParams::default();
    assert_eq!(raw.set("name", 1u64.into()), Ok(false));
    assert_eq!(raw.set("refin", 1u64.into()), Err(ConfigError::InvalidValue("refin")));
    assert_eq!(raw.set("poly", true.into()), Err(ConfigError::InvalidValue("poly")));
    assert_eq!(raw.set("width", (u64::from(u32::MAX) + 1).into()), Err(ConfigError::InvalidValue("width")));
    assert_eq!(raw, RawParams::default());
  }

  #[test]
  fn raw_round_trip_keeps_check() {
    let p = CrcParams::new(Width::W16, 0x1021, 0xFFFF, false, false, 0).unwrap().with_check(0x29B1).unwrap();
    let raw = RawParams::from(p);
    assert_eq!(raw.check, Some(0x29B1));
    assert_eq!(CrcParams::try_from(raw), Ok(p));
  }
}

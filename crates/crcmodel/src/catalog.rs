//! Named CRC variants.
//!
//! Parameters and check values follow the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/). Every entry
//! is validated during constant evaluation, so a malformed entry fails the
//! build instead of surfacing at runtime.

use crate::{params::CrcParams, width::Width};

const fn entry(width: Width, poly: u64, init: u64, refin: bool, refout: bool, xorout: u64, check: u64) -> CrcParams {
  match CrcParams::new(width, poly, init, refin, refout, xorout) {
    Ok(params) => match params.with_check(check) {
      Ok(params) => params,
      Err(_) => panic!("catalog check value wider than its width"),
    },
    Err(_) => panic!("catalog parameters wider than their width"),
  }
}

/// 8-bit variants.
pub mod crc8 {
  use super::entry;
  use crate::{params::CrcParams, width::Width::W8};

  /// CRC-7/MMC left-aligned in an 8-bit register.
  pub const CRC7_MMC_SHIFTED: CrcParams = entry(W8, 0x12, 0x00, false, false, 0x00, 0xEA);
  /// CRC-8/SMBUS (also known as plain CRC-8).
  pub const SMBUS: CrcParams = entry(W8, 0x07, 0x00, false, false, 0x00, 0xF4);
  /// CRC-8/GSM-A.
  pub const GSM_A: CrcParams = entry(W8, 0x1D, 0x00, false, false, 0x00, 0x37);
  /// CRC-8/AUTOSAR.
  pub const AUTOSAR: CrcParams = entry(W8, 0x2F, 0xFF, false, false, 0xFF, 0xDF);
  /// CRC-8/BLUETOOTH.
  pub const BLUETOOTH: CrcParams = entry(W8, 0xA7, 0x00, true, true, 0x00, 0x26);
  /// CRC-8/MAXIM-DOW (1-Wire).
  pub const MAXIM_DOW: CrcParams = entry(W8, 0x31, 0x00, true, true, 0x00, 0xA1);
  /// CRC-8/CDMA2000.
  pub const CDMA2000: CrcParams = entry(W8, 0x9B, 0xFF, false, false, 0x00, 0xDA);
  /// CRC-8/DARC.
  pub const DARC: CrcParams = entry(W8, 0x39, 0x00, true, true, 0x00, 0x15);
  /// CRC-8/DVB-S2.
  pub const DVB_S2: CrcParams = entry(W8, 0xD5, 0x00, false, false, 0x00, 0xBC);
  /// CRC-8/TECH-3250 (EBU).
  pub const TECH_3250: CrcParams = entry(W8, 0x1D, 0xFF, true, true, 0x00, 0x97);
  /// CRC-8/I-CODE.
  pub const I_CODE: CrcParams = entry(W8, 0x1D, 0xFD, false, false, 0x00, 0x7E);
  /// CRC-8/I-432-1 (ITU).
  pub const I_432_1: CrcParams = entry(W8, 0x07, 0x00, false, false, 0x55, 0xA1);
  /// CRC-8/ROHC.
  pub const ROHC: CrcParams = entry(W8, 0x07, 0xFF, true, true, 0x00, 0xD0);
  /// CRC-8/WCDMA.
  pub const WCDMA: CrcParams = entry(W8, 0x9B, 0x00, true, true, 0x00, 0x25);
}

/// 16-bit variants.
pub mod crc16 {
  use super::entry;
  use crate::{params::CrcParams, width::Width::W16};

  /// CRC-16/XMODEM.
  pub const XMODEM: CrcParams = entry(W16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3);
  /// CRC-16/USB.
  pub const USB: CrcParams = entry(W16, 0x8005, 0xFFFF, true, true, 0xFFFF, 0xB4C8);
  /// CRC-16/GSM.
  pub const GSM: CrcParams = entry(W16, 0x1021, 0x0000, false, false, 0xFFFF, 0xCE3C);
  /// CRC-16/PROFIBUS.
  pub const PROFIBUS: CrcParams = entry(W16, 0x1DCF, 0xFFFF, false, false, 0xFFFF, 0xA819);
  /// CRC-16/MODBUS.
  pub const MODBUS: CrcParams = entry(W16, 0x8005, 0xFFFF, true, true, 0x0000, 0x4B37);
  /// CRC-16/ARC.
  pub const ARC: CrcParams = entry(W16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D);
  /// CRC-16/UMTS (BUYPASS).
  pub const UMTS: CrcParams = entry(W16, 0x8005, 0x0000, false, false, 0x0000, 0xFEE8);
  /// CRC-16/DDS-110.
  pub const DDS_110: CrcParams = entry(W16, 0x8005, 0x800D, false, false, 0x0000, 0x9ECF);
  /// CRC-16/MAXIM-DOW.
  pub const MAXIM_DOW: CrcParams = entry(W16, 0x8005, 0x0000, true, true, 0xFFFF, 0x44C2);
  /// CRC-16/SPI-FUJITSU (AUG-CCITT).
  pub const SPI_FUJITSU: CrcParams = entry(W16, 0x1021, 0x1D0F, false, false, 0x0000, 0xE5CC);
  /// CRC-16/IBM-3740 (CCITT-FALSE).
  pub const IBM_3740: CrcParams = entry(W16, 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1);
  /// CRC-16/GENIBUS.
  pub const GENIBUS: CrcParams = entry(W16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E);
  /// CRC-16/KERMIT.
  pub const KERMIT: CrcParams = entry(W16, 0x1021, 0x0000, true, true, 0x0000, 0x2189);
  /// CRC-16/MCRF4XX.
  pub const MCRF4XX: CrcParams = entry(W16, 0x1021, 0xFFFF, true, true, 0x0000, 0x6F91);
  /// CRC-16/RIELLO.
  pub const RIELLO: CrcParams = entry(W16, 0x1021, 0xB2AA, true, true, 0x0000, 0x63D0);
  /// CRC-16/TMS37157.
  pub const TMS37157: CrcParams = entry(W16, 0x1021, 0x89EC, true, true, 0x0000, 0x26B1);
  /// CRC-16/IBM-SDLC (X-25).
  pub const X25: CrcParams = entry(W16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E);
  /// CRC-16/ISO-IEC-14443-3-A.
  pub const ISO_IEC_14443_3_A: CrcParams = entry(W16, 0x1021, 0xC6C6, true, true, 0x0000, 0xBF05);
  /// CRC-16/CDMA2000.
  pub const CDMA2000: CrcParams = entry(W16, 0xC867, 0xFFFF, false, false, 0x0000, 0x4C06);
  /// CRC-16/DECT-R.
  pub const DECT_R: CrcParams = entry(W16, 0x0589, 0x0000, false, false, 0x0001, 0x007E);
  /// CRC-16/DECT-X.
  pub const DECT_X: CrcParams = entry(W16, 0x0589, 0x0000, false, false, 0x0000, 0x007F);
  /// CRC-16/DNP.
  pub const DNP: CrcParams = entry(W16, 0x3D65, 0x0000, true, true, 0xFFFF, 0xEA82);
  /// CRC-16/EN-13757.
  pub const EN_13757: CrcParams = entry(W16, 0x3D65, 0x0000, false, false, 0xFFFF, 0xC2B7);
  /// CRC-16/T10-DIF.
  pub const T10_DIF: CrcParams = entry(W16, 0x8BB7, 0x0000, false, false, 0x0000, 0xD0DB);
  /// CRC-16/TELEDISK.
  pub const TELEDISK: CrcParams = entry(W16, 0xA097, 0x0000, false, false, 0x0000, 0x0FB3);
}

/// 32-bit variants.
pub mod crc32 {
  use super::entry;
  use crate::{params::CrcParams, width::Width::W32};

  /// CRC-32/ISO-HDLC: Ethernet, gzip, PNG, zip.
  pub const CRC32: CrcParams = entry(W32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xCBF4_3926);
  /// CRC-32/AUTOSAR.
  pub const AUTOSAR: CrcParams = entry(W32, 0xF4AC_FB13, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0x1697_D06A);
  /// CRC-32/BZIP2.
  pub const BZIP2: CrcParams = entry(W32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF, 0xFC89_1918);
  /// CRC-32/CKSUM (POSIX).
  pub const POSIX: CrcParams = entry(W32, 0x04C1_1DB7, 0x0000_0000, false, false, 0xFFFF_FFFF, 0x765E_7680);
  /// CRC-32 as used by SATA.
  pub const SATA: CrcParams = entry(W32, 0x04C1_1DB7, 0x5232_5032, false, false, 0x0000_0000, 0xCF72_AFE8);
  /// CRC-32/JAMCRC.
  pub const JAMCRC: CrcParams = entry(W32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0x0000_0000, 0x340B_C6D9);
  /// CRC-32/MPEG-2.
  pub const MPEG_2: CrcParams = entry(W32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0x0000_0000, 0x0376_E6E7);
  /// CRC-32/XFER.
  pub const XFER: CrcParams = entry(W32, 0x0000_00AF, 0x0000_0000, false, false, 0x0000_0000, 0xBD0B_E338);
  /// CRC-32/ISCSI (CRC-32C, Castagnoli).
  pub const ISCSI: CrcParams = entry(W32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xE306_9283);
  /// CRC-32D.
  pub const CRC32D: CrcParams = entry(W32, 0xA833_982B, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0x8731_5576);
  /// CRC-32/AIXM (CRC-32Q).
  pub const AIXM: CrcParams = entry(W32, 0x8141_41AB, 0x0000_0000, false, false, 0x0000_0000, 0x3010_BF7F);
}

/// 64-bit variants.
pub mod crc64 {
  use super::entry;
  use crate::{params::CrcParams, width::Width::W64};

  /// CRC-64/ECMA-182.
  pub const ECMA_182: CrcParams = entry(W64, 0x42F0_E1EB_A9EA_3693, 0, false, false, 0, 0x6C40_DF5F_0B49_7347);
  /// CRC-64/GO-ISO.
  pub const GO_ISO: CrcParams = entry(W64, 0x0000_0000_0000_001B, u64::MAX, true, true, u64::MAX, 0xB909_56C7_75A4_1001);
  /// CRC-64/NVME.
  pub const NVME: CrcParams = entry(W64, 0xAD93_D235_94C9_3659, u64::MAX, true, true, u64::MAX, 0xAE8B_1486_0A79_9888);
  /// CRC-64/WE.
  pub const WE: CrcParams = entry(W64, 0x42F0_E1EB_A9EA_3693, u64::MAX, false, false, u64::MAX, 0x62EC_59E3_F1A4_F00A);
  /// CRC-64/XZ.
  pub const XZ: CrcParams = entry(W64, 0x42F0_E1EB_A9EA_3693, u64::MAX, true, true, u64::MAX, 0x995D_C9BB_DF19_39FA);
}

/// Every named variant, narrowest width first.
pub const ALL: &[(&str, CrcParams)] = &[
  ("CRC-8/CRC7-MMC-SHIFTED", crc8::CRC7_MMC_SHIFTED),
  ("CRC-8/SMBUS", crc8::SMBUS),
  ("CRC-8/GSM-A", crc8::GSM_A),
  ("CRC-8/AUTOSAR", crc8::AUTOSAR),
  ("CRC-8/BLUETOOTH", crc8::BLUETOOTH),
  ("CRC-8/MAXIM-DOW", crc8::MAXIM_DOW),
  ("CRC-8/CDMA2000", crc8::CDMA2000),
  ("CRC-8/DARC", crc8::DARC),
  ("CRC-8/DVB-S2", crc8::DVB_S2),
  ("CRC-8/TECH-3250", crc8::TECH_3250),
  ("CRC-8/I-CODE", crc8::I_CODE),
  ("CRC-8/I-432-1", crc8::I_432_1),
  ("CRC-8/ROHC", crc8::ROHC),
  ("CRC-8/WCDMA", crc8::WCDMA),
  ("CRC-16/XMODEM", crc16::XMODEM),
  ("CRC-16/USB", crc16::USB),
  ("CRC-16/GSM", crc16::GSM),
  ("CRC-16/PROFIBUS", crc16::PROFIBUS),
  ("CRC-16/MODBUS", crc16::MODBUS),
  ("CRC-16/ARC", crc16::ARC),
  ("CRC-16/UMTS", crc16::UMTS),
  ("CRC-16/DDS-110", crc16::DDS_110),
  ("CRC-16/MAXIM-DOW", crc16::MAXIM_DOW),
  ("CRC-16/SPI-FUJITSU", crc16::SPI_FUJITSU),
  ("CRC-16/IBM-3740", crc16::IBM_3740),
  ("CRC-16/GENIBUS", crc16::GENIBUS),
  ("CRC-16/KERMIT", crc16::KERMIT),
  ("CRC-16/MCRF4XX", crc16::MCRF4XX),
  ("CRC-16/RIELLO", crc16::RIELLO),
  ("CRC-16/TMS37157", crc16::TMS37157),
  ("CRC-16/IBM-SDLC", crc16::X25),
  ("CRC-16/ISO-IEC-14443-3-A", crc16::ISO_IEC_14443_3_A),
  ("CRC-16/CDMA2000", crc16::CDMA2000),
  ("CRC-16/DECT-R", crc16::DECT_R),
  ("CRC-16/DECT-X", crc16::DECT_X),
  ("CRC-16/DNP", crc16::DNP),
  ("CRC-16/EN-13757", crc16::EN_13757),
  ("CRC-16/T10-DIF", crc16::T10_DIF),
  ("CRC-16/TELEDISK", crc16::TELEDISK),
  ("CRC-32/ISO-HDLC", crc32::CRC32),
  ("CRC-32/AUTOSAR", crc32::AUTOSAR),
  ("CRC-32/BZIP2", crc32::BZIP2),
  ("CRC-32/CKSUM", crc32::POSIX),
  ("CRC-32/SATA", crc32::SATA),
  ("CRC-32/JAMCRC", crc32::JAMCRC),
  ("CRC-32/MPEG-2", crc32::MPEG_2),
  ("CRC-32/XFER", crc32::XFER),
  ("CRC-32/ISCSI", crc32::ISCSI),
  ("CRC-32D", crc32::CRC32D),
  ("CRC-32/AIXM", crc32::AIXM),
  ("CRC-64/ECMA-182", crc64::ECMA_182),
  ("CRC-64/GO-ISO", crc64::GO_ISO),
  ("CRC-64/NVME", crc64::NVME),
  ("CRC-64/WE", crc64::WE),
  ("CRC-64/XZ", crc64::XZ),
];

/// Alternative names accepted by [`find`].
pub const ALIASES: &[(&str, &str)] = &[
  ("CRC-8", "CRC-8/SMBUS"),
  ("CRC-8/CCITT", "CRC-8/SMBUS"),
  ("CRC-8/EBU", "CRC-8/TECH-3250"),
  ("CRC-8/ITU", "CRC-8/I-432-1"),
  ("CRC-16/CCITT", "CRC-16/XMODEM"),
  ("CRC-16/BUYPASS", "CRC-16/UMTS"),
  ("CRC-16/AUG-CCITT", "CRC-16/SPI-FUJITSU"),
  ("CRC-16/CCITT-FALSE", "CRC-16/IBM-3740"),
  ("CRC-16/X-25", "CRC-16/IBM-SDLC"),
  ("CRC-32", "CRC-32/ISO-HDLC"),
  ("CRC-32/POSIX", "CRC-32/CKSUM"),
  ("CRC-32C", "CRC-32/ISCSI"),
  ("CRC-32Q", "CRC-32/AIXM"),
  ("CRC-64", "CRC-64/ECMA-182"),
];

/// Look up a variant by catalog name or alias, ignoring ASCII case.
#[must_use]
pub fn find(name: &str) -> Option<CrcParams> {
  let name = ALIASES.iter().find(|(alias, _)| alias.eq_ignore_ascii_case(name)).map_or(name, |(_, target)| *target);
  ALL.iter().find(|(candidate, _)| candidate.eq_ignore_ascii_case(name)).map(|(_, params)| *params)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_are_unique() {
    for (i, (a, _)) in ALL.iter().enumerate() {
      for (b, _) in &ALL[i + 1..] {
        assert!(!a.eq_ignore_ascii_case(b), "duplicate catalog name {a}");
      }
    }
  }

  #[test]
  fn every_entry_declares_a_check_value() {
    for (name, params) in ALL {
      assert!(params.check().is_some(), "{name} has no check value");
    }
  }

  #[test]
  fn aliases_resolve() {
    for (alias, target) in ALIASES {
      assert!(ALL.iter().any(|(name, _)| name == target), "{alias} points at unknown {target}");
      assert_eq!(find(alias), find(target));
    }
  }

  #[test]
  fn find_ignores_case() {
    assert_eq!(find("crc-16/usb"), Some(crc16::USB));
    assert_eq!(find("Crc-32c"), Some(crc32::ISCSI));
    assert_eq!(find("CRC-16/NOPE"), None);
  }

  #[test]
  fn widths_are_grouped() {
    let widths: alloc::vec::Vec<_> = ALL.iter().map(|(_, p)| p.width()).collect();
    assert!(widths.windows(2).all(|w| w[0] <= w[1]));
  }
}

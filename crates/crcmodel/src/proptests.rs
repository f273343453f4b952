#![cfg(all(test, not(miri)))]

extern crate std;

use alloc::vec::Vec;

use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use crate::{
  CrcEngine, Crc32, Crc64, CrcParams, KernelChoice, Width,
  bits::{reflect_bits, reflect_bytes},
  catalog, kernel_test,
  reference::crc_bitwise,
};

fn any_width() -> impl Strategy<Value = Width> {
  prop::sample::select(Width::ALL.to_vec())
}

prop_compose! {
  fn params_of(width: Width)(poly in any::<u64>(), init in any::<u64>(), refin in any::<bool>(),
                             refout in any::<bool>(), xorout in any::<u64>()) -> CrcParams {
    let m = width.mask();
    // Odd polynomials only: every real generator has the x^0 term.
    let poly = (poly & m) | 1;
    CrcParams::new(width, poly, init & m, refin, refout, xorout & m).unwrap()
  }
}

fn any_params() -> impl Strategy<Value = CrcParams> {
  any_width().prop_flat_map(params_of)
}

fn data() -> impl Strategy<Value = Vec<u8>> {
  proptest::collection::vec(any::<u8>(), 0..=1024)
}

proptest! {
  #[test]
  fn reflect_bits_is_an_involution(width in any_width(), value in any::<u64>()) {
    let v = value & width.mask();
    prop_assert_eq!(reflect_bits(reflect_bits(v, width), width), v);
  }

  #[test]
  fn reflect_bytes_is_an_involution(width in any_width(), value in any::<u64>()) {
    let v = value & width.mask();
    prop_assert_eq!(reflect_bytes(reflect_bytes(v, width), width), v);
  }

  #[test]
  fn engine_matches_bitwise_oracle(params in any_params(), data in data()) {
    let mut engine = CrcEngine::new(params).unwrap();
    prop_assert_eq!(engine.checksum_of(&data), crc_bitwise(&params, &data));
  }

  #[test]
  fn every_kernel_agrees(params in any_params(), data in data()) {
    let checksum = kernel_test::verify_kernels(&params, &data);
    prop_assert_eq!(checksum, Ok(crc_bitwise(&params, &data)));
  }

  #[test]
  fn chunking_equivalence(params in any_params(), data in data(), split in any::<prop::sample::Index>()) {
    let at = split.index(data.len() + 1);
    let (a, b) = data.split_at(at);
    let mut engine = CrcEngine::new(params).unwrap();
    let whole = engine.checksum_of(&data);
    engine.digest(a);
    engine.digest(b);
    prop_assert_eq!(engine.checksum(), whole);
  }

  #[test]
  fn reset_discards_pending_input(params in any_params(), junk in data(), data in data()) {
    let mut engine = CrcEngine::new(params).unwrap();
    let expected = engine.checksum_of(&data);
    engine.digest(&junk);
    engine.reset();
    engine.digest(&data);
    prop_assert_eq!(engine.checksum(), expected);
  }

  #[test]
  fn split64_matches_native(params in params_of(Width::W64), data in data()) {
    let mut native = Crc64::with_kernel(params, KernelChoice::Unrolled).unwrap();
    let mut split = Crc64::with_kernel(params, KernelChoice::Split64).unwrap();
    prop_assert_eq!(native.checksum_of(&data), split.checksum_of(&data));
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against crc-fast-rust
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc16_arc_matches_crc_fast_rust(data in data()) {
    let ours = CrcEngine::new(catalog::crc16::ARC).unwrap().checksum_of(&data) as u16;
    prop_assert_eq!(ours, crc_fast::checksum(CrcAlgorithm::Crc16Arc, &data) as u16);
  }

  #[test]
  fn crc16_ibm_sdlc_matches_crc_fast_rust(data in data()) {
    let ours = CrcEngine::new(catalog::crc16::X25).unwrap().checksum_of(&data) as u16;
    prop_assert_eq!(ours, crc_fast::checksum(CrcAlgorithm::Crc16IbmSdlc, &data) as u16);
  }

  #[test]
  fn crc32_matches_crc_fast_rust(data in data()) {
    let ours = Crc32::new(catalog::crc32::CRC32).unwrap().checksum_of(&data);
    prop_assert_eq!(ours, crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32);
  }

  #[test]
  fn crc32c_matches_crc_fast_rust(data in data()) {
    let ours = Crc32::new(catalog::crc32::ISCSI).unwrap().checksum_of(&data);
    prop_assert_eq!(ours, crc_fast::checksum(CrcAlgorithm::Crc32Iscsi, &data) as u32);
  }

  #[test]
  fn crc32_bzip2_matches_crc_fast_rust(data in data()) {
    let ours = Crc32::new(catalog::crc32::BZIP2).unwrap().checksum_of(&data);
    prop_assert_eq!(ours, crc_fast::checksum(CrcAlgorithm::Crc32Bzip2, &data) as u32);
  }

  #[test]
  fn crc32_autosar_matches_crc_fast_rust(data in data()) {
    let ours = Crc32::new(catalog::crc32::AUTOSAR).unwrap().checksum_of(&data);
    prop_assert_eq!(ours, crc_fast::checksum(CrcAlgorithm::Crc32Autosar, &data) as u32);
  }

  #[test]
  fn crc64_xz_matches_crc_fast_rust(data in data()) {
    let ours = Crc64::new(catalog::crc64::XZ).unwrap().checksum_of(&data);
    prop_assert_eq!(ours, crc_fast::checksum(CrcAlgorithm::Crc64Xz, &data));
  }

  #[test]
  fn crc64_nvme_matches_crc_fast_rust(data in data()) {
    let ours = Crc64::new(catalog::crc64::NVME).unwrap().checksum_of(&data);
    prop_assert_eq!(ours, crc_fast::checksum(CrcAlgorithm::Crc64Nvme, &data));
  }

  #[test]
  fn crc64_go_iso_matches_crc_fast_rust(data in data()) {
    let ours = Crc64::new(catalog::crc64::GO_ISO).unwrap().checksum_of(&data);
    prop_assert_eq!(ours, crc_fast::checksum(CrcAlgorithm::Crc64GoIso, &data));
  }

  #[test]
  fn crc64_we_matches_crc_fast_rust(data in data()) {
    let ours = Crc64::with_kernel(catalog::crc64::WE, KernelChoice::Split64).unwrap().checksum_of(&data);
    prop_assert_eq!(ours, crc_fast::checksum(CrcAlgorithm::Crc64We, &data));
  }
}

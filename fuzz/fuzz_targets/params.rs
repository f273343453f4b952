//! Fuzz target for arbitrary parameter sets.
//!
//! Tests that:
//! - Construction never panics, and rejects exactly the out-of-range values
//! - Accepted parameter sets agree with the bitwise oracle on every kernel

#![no_main]

use arbitrary::Arbitrary;
use crcmodel::{CrcEngine, CrcParams, kernel_test, reference::crc_bitwise};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u32,
  poly: u64,
  init: u64,
  refin: bool,
  refout: bool,
  xorout: u64,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let width = [8, 16, 32, 64, input.width][(input.width % 5) as usize];
  let tuple = (width, input.poly, input.init, input.refin, input.refout, input.xorout);
  let Ok(params) = CrcParams::try_from(tuple) else {
    return;
  };

  let expected = crc_bitwise(&params, &input.data);
  let mut engine = CrcEngine::new(params).unwrap();
  assert_eq!(engine.checksum_of(&input.data), expected);
  assert_eq!(kernel_test::verify_kernels(&params, &input.data), Ok(expected));
});

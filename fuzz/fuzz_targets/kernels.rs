//! Fuzz target for cross-kernel equivalence.
//!
//! Every kernel for a catalog variant must agree with the bitwise oracle.

#![no_main]

use arbitrary::Arbitrary;
use crcmodel::{catalog, kernel_test};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  variant: u8,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let (name, params) = catalog::ALL[usize::from(input.variant) % catalog::ALL.len()];
  if let Err(e) = kernel_test::verify_kernels(&params, &input.data) {
    panic!("{name}: {e}");
  }
});

//! Fuzz target for the streaming engine API.
//!
//! Tests that arbitrary sequences of digest calls, with resets in between,
//! produce the one-shot result for every catalog variant.

#![no_main]

use arbitrary::Arbitrary;
use crcmodel::{CrcEngine, catalog};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  variant: u8,
  junk: Vec<u8>,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let (name, params) = catalog::ALL[usize::from(input.variant) % catalog::ALL.len()];
  let mut engine = CrcEngine::new(params).unwrap();
  let expected = engine.checksum_of(&input.data);

  engine.digest(&input.junk);
  engine.reset();

  let mut rest = input.data.as_slice();
  let mut sizes = input.chunk_sizes.iter().cycle();
  while !rest.is_empty() {
    let size = usize::from(sizes.next().copied().unwrap_or(1)).max(1).min(rest.len());
    let (chunk, tail) = rest.split_at(size);
    engine.digest(chunk);
    rest = tail;
  }

  assert_eq!(engine.finalize(), expected, "{name} streaming mismatch (peek)");
  assert_eq!(engine.checksum(), expected, "{name} streaming mismatch");
  assert_eq!(engine.checksum(), engine.checksum_of(&[]), "{name} checksum did not reset");
});

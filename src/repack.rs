//! Lossless regrouping between nibbles and quintets.
//!
//! Five nibbles and four quintets both hold exactly 20 bits, so each side is
//! zero-padded on the left to a whole number of 20-bit words and re-sliced
//! most significant bits first.

use crate::{util::left_pad, Nibble, Quintet};

pub const NIBBLES_PER_WORD: usize = 5;
pub const QUINTETS_PER_WORD: usize = 4;

fn pack(digits: &[u8], bits: u32) -> u32 {
  digits
    .iter()
    .fold(0, |word, d| (word << bits) | u32::from(*d))
}

fn unpack(word: u32, bits: u32, count: u32) -> impl Iterator<Item = u8> {
  let mask = (1 << bits) - 1;
  (0..count)
    .rev()
    .map(move |i| ((word >> (i * bits)) & mask) as u8)
}

pub fn nibbles_to_quintets(nibbles: &[Nibble]) -> Vec<Quintet> {
  left_pad(nibbles, NIBBLES_PER_WORD)
    .chunks(NIBBLES_PER_WORD)
    .flat_map(|chunk| unpack(pack(chunk, 4), 5, QUINTETS_PER_WORD as u32))
    .collect()
}

pub fn quintets_to_nibbles(quintets: &[Quintet]) -> Vec<Nibble> {
  left_pad(quintets, QUINTETS_PER_WORD)
    .chunks(QUINTETS_PER_WORD)
    .flat_map(|chunk| unpack(pack(chunk, 5), 4, NIBBLES_PER_WORD as u32))
    .collect()
}

//! Table-driven CRC-5 over quintets, most significant digit first.

use crate::Quintet;

pub const CRC5_TABLE: [Quintet; 32] = [
  0, 5, 10, 15, 20, 17, 30, 27, 13, 8, 7, 2, 25, 28, 19, 22, 26, 31, 16, 21, 14, 11, 4, 1, 23, 18,
  29, 24, 3, 6, 9, 12,
];

/// Every input must be below 32.
pub fn crc5(quintets: &[Quintet]) -> Quintet {
  quintets
    .iter()
    .fold(0, |crc, q| CRC5_TABLE[(crc ^ q) as usize])
}

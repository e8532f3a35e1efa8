use crate::Quintet;
use std::result;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum Error {
  // digit decoding
  #[error("character `{ch}' at offset {offset} is not in the {alphabet} alphabet")]
  AlphabetMismatch {
    ch: char,
    offset: usize,
    alphabet: &'static str,
  },

  // formatting
  #[error("group {group} has {len} digits, expected {expected}")]
  GroupLengthMismatch {
    group: usize,
    len: usize,
    expected: usize,
  },
  #[error("checksum mismatch in group {group}:\n  wanted: {expected}\n  got:    {actual}")]
  ChecksumMismatch {
    group: usize,
    expected: Quintet,
    actual: Quintet,
  },

  // settings
  #[error("invalid value `{value}' for {var}")]
  InvalidSetting { var: &'static str, value: String },
}

pub type Result<T> = result::Result<T, Error>;

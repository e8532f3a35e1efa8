use crate::error::*;
use lazy_static::lazy_static;
use std::fmt;

/// A fixed digit alphabet: a character's position is its value.
pub struct Alphabet {
  name: &'static str,
  chars: &'static [u8],
  reverse: [u8; 256],
}

lazy_static! {
  pub static ref HEX: Alphabet = Alphabet::new("hex", b"0123456789abcdef");
  pub static ref BASE32_UPPER: Alphabet =
    Alphabet::new("uppercase base32", b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ");
  pub static ref BASE32_LOWER: Alphabet =
    Alphabet::new("lowercase base32", b"abcdefghijkmnpqrstuvwxyz23456789");
}

impl Alphabet {
  fn new(name: &'static str, chars: &'static [u8]) -> Self {
    let mut reverse = [0xffu8; 256];
    for (n, c) in chars.iter().enumerate() {
      reverse[*c as usize] = n as u8;
    }
    Self {
      name,
      chars,
      reverse,
    }
  }

  /// Number of digits, i.e. the base.
  pub fn len(&self) -> usize {
    self.chars.len()
  }

  /// Panics if `value` is not below [`Alphabet::len`].
  pub fn char_at(&self, value: u8) -> char {
    self.chars[value as usize] as char
  }

  pub fn value_of(&self, c: char) -> Option<u8> {
    if c > 0xffu8 as char {
      return None;
    }
    match self.reverse[c as usize] {
      0xff => None,
      v => Some(v),
    }
  }

  pub fn contains(&self, c: char) -> bool {
    self.value_of(c).is_some()
  }

  /// Every value must be below [`Alphabet::len`].
  pub fn encode(&self, values: &[u8]) -> String {
    values.iter().map(|v| self.char_at(*v)).collect()
  }

  /// Fails on the first character that isn't part of this alphabet.
  pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
    text
      .chars()
      .enumerate()
      .map(|(offset, ch)| {
        self.value_of(ch).ok_or(Error::AlphabetMismatch {
          ch,
          offset,
          alphabet: self.name,
        })
      })
      .collect()
  }
}

impl fmt::Debug for Alphabet {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Alphabet({:?})", self.name)
  }
}

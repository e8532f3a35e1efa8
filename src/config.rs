use crate::{
  alphabet::{Alphabet, BASE32_LOWER, BASE32_UPPER},
  error::*,
};
use derive_more::Display;
use std::str::FromStr;

/// Which of the two base-32 alphabets to display.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Variant {
  #[display(fmt = "uppercase")]
  Uppercase,
  #[display(fmt = "lowercase")]
  Lowercase,
}

impl Variant {
  pub fn alphabet(self) -> &'static Alphabet {
    match self {
      Self::Uppercase => &BASE32_UPPER,
      Self::Lowercase => &BASE32_LOWER,
    }
  }

  /// Folds letters to this variant's case, for callers accepting either case.
  pub fn normalize_case(self, text: &str) -> String {
    match self {
      Self::Uppercase => text.to_uppercase(),
      Self::Lowercase => text.to_lowercase(),
    }
  }
}

impl FromStr for Variant {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "uppercase" | "upper" => Ok(Self::Uppercase),
      "lowercase" | "lower" => Ok(Self::Lowercase),
      _ => Err(Error::InvalidSetting {
        var: "alphabet",
        value: s.into(),
      }),
    }
  }
}

/// Formatting options for one conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
  pub variant: Variant,
  pub checksum: bool,
  pub grouping: bool,
}

impl Config {
  pub fn new(variant: Variant, checksum: bool, grouping: bool) -> Self {
    Self {
      variant,
      checksum,
      grouping,
    }
  }

  pub fn alphabet(&self) -> &'static Alphabet {
    self.variant.alphabet()
  }

  /// Every valid configuration.
  pub fn combinations() -> impl Iterator<Item = Self> {
    static VARIANTS: [Variant; 2] = [Variant::Uppercase, Variant::Lowercase];
    static FLAGS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];
    VARIANTS.iter().flat_map(|variant| {
      FLAGS
        .iter()
        .map(move |(checksum, grouping)| Self::new(*variant, *checksum, *grouping))
    })
  }
}

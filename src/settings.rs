use crate::{
  config::{Config, Variant},
  error::*,
};

#[derive(serde::Deserialize)]
struct Builtins {
  alphabet: &'static str,
  checksum: bool,
  grouping: bool,
}

impl Builtins {
  fn get() -> Self {
    serde_json::from_str(include_str!(concat!(env!("OUT_DIR"), "/config.json")))
      .expect("build script wrote malformed builtins")
  }
}

#[derive(Debug)]
pub struct Settings {
  variant: Variant,
  checksum: bool,
  grouping: bool,
}

impl Settings {
  /// Builtin defaults, overridden by the process environment.
  pub fn get() -> Result<Self> {
    Self::with_lookup(|var| std::env::var(var).ok())
  }

  /// Like [`Settings::get`], reading overrides from `lookup` instead of the environment.
  pub fn with_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
    let bs = Builtins::get();
    Ok(Self {
      variant: match lookup("HEX32_ALPHABET") {
        Some(x) => x.parse().map_err(|_| Error::InvalidSetting {
          var: "HEX32_ALPHABET",
          value: x,
        })?,
        None => bs.alphabet.parse()?,
      },
      checksum: flag(&lookup, "HEX32_CHECKSUM", bs.checksum)?,
      grouping: flag(&lookup, "HEX32_GROUPING", bs.grouping)?,
    })
  }

  /// May be overridden using `HEX32_ALPHABET`.
  pub fn variant(&self) -> Variant {
    self.variant
  }

  /// May be overridden using `HEX32_CHECKSUM`.
  pub fn checksum(&self) -> bool {
    self.checksum
  }

  /// May be overridden using `HEX32_GROUPING`.
  pub fn grouping(&self) -> bool {
    self.grouping
  }

  pub fn config(&self) -> Config {
    Config::new(self.variant, self.checksum, self.grouping)
  }
}

fn flag<F: Fn(&str) -> Option<String>>(
  lookup: &F,
  var: &'static str,
  fallback: bool,
) -> Result<bool> {
  match lookup(var) {
    Some(x) => parse_flag(&x).ok_or(Error::InvalidSetting { var, value: x }),
    None => Ok(fallback),
  }
}

pub fn parse_flag(s: &str) -> Option<bool> {
  match s.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" => Some(false),
    _ => None,
  }
}

pub mod alphabet;
pub mod config;
pub mod crc5;
pub mod error;
pub mod format;
pub mod repack;
pub mod settings;
mod util;

use alphabet::HEX;
pub use config::{Config, Variant};
use error::*;
use log::{debug, trace};
pub use settings::Settings;

/// One hexadecimal digit's value, below 16.
pub type Nibble = u8;
/// One base-32 digit's value, below 32.
pub type Quintet = u8;

const ZERO: &[Nibble] = &[0];

/// Outcome of reading a base-32 value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
  pub valid: bool,
  pub hex: String,
}

impl Decoded {
  fn valid(hex: String) -> Self {
    Self { valid: true, hex }
  }

  fn invalid() -> Self {
    Self {
      valid: false,
      hex: String::new(),
    }
  }
}

/// Converts hex text (either case) to base-32. Empty or malformed input gives
/// empty output.
pub fn hex_to_base32(hex: &str, config: &Config) -> String {
  let nibbles = match HEX.decode(&hex.to_lowercase()) {
    Ok(nibbles) => nibbles,
    Err(e) => {
      debug!("ignoring hex input `{}': {}", hex, e);
      return String::new();
    }
  };
  if nibbles.is_empty() {
    return String::new();
  }
  let quintets = repack::nibbles_to_quintets(&nibbles);
  trace!("repacked {:?} into {:?}", nibbles, quintets);
  format::encode(&quintets, config)
}

/// Converts base-32 text to hex. Every kind of failure reads as invalid with
/// empty output; see [`parse_base32`] for the reason.
pub fn base32_to_hex(text: &str, config: &Config) -> Decoded {
  match parse_base32(text, config) {
    Ok(hex) => Decoded::valid(hex),
    Err(e) => {
      debug!("rejecting base32 input `{}': {}", text, e);
      Decoded::invalid()
    }
  }
}

/// Like [`base32_to_hex`], but keeps the error. Empty text is an empty value.
pub fn parse_base32(text: &str, config: &Config) -> Result<String> {
  if text.is_empty() {
    return Ok(String::new());
  }
  let quintets = format::decode(text, config)?;
  let nibbles = repack::quintets_to_nibbles(&quintets);
  trace!("repacked {:?} into {:?}", quintets, nibbles);
  Ok(hex_digits(util::trim_leading_zeros(&nibbles)))
}

/// Reads each group of `text` independently. A good group yields its five hex
/// digits, keeping leading zeros; ungrouped text yields one trimmed entry.
/// Empty text has no groups.
pub fn group_report(text: &str, config: &Config) -> Vec<Result<String>> {
  if text.is_empty() {
    return vec![];
  }
  format::decode_groups(text, config)
    .into_iter()
    .map(|group| {
      let nibbles = repack::quintets_to_nibbles(&group?);
      Ok(if config.grouping {
        HEX.encode(&nibbles)
      } else {
        hex_digits(util::trim_leading_zeros(&nibbles))
      })
    })
    .collect()
}

fn hex_digits(nibbles: &[Nibble]) -> String {
  HEX.encode(if nibbles.is_empty() { ZERO } else { nibbles })
}

#[cfg(test)]
mod tests {
  use super::*;
  use assert_matches::*;
  use proptest::{prelude::*, sample::Index};

  fn normalized(hex: &str) -> String {
    let hex = hex.to_lowercase();
    let trimmed = hex.trim_start_matches('0');
    if trimmed.is_empty() {
      "0".into()
    } else {
      trimmed.into()
    }
  }

  fn upper(checksum: bool, grouping: bool) -> Config {
    Config::new(Variant::Uppercase, checksum, grouping)
  }

  #[test]
  fn test_deadbeef() {
    let config = upper(false, false);
    let s = hex_to_base32("deadbeef", &config);
    assert_eq!(s, "5HCVHRH");
    assert_eq!(base32_to_hex(&s, &config), Decoded::valid("deadbeef".into()));

    assert_eq!(hex_to_base32("DeadBeef", &upper(true, true)), "25HC9-VHRH4");
    assert_eq!(
      base32_to_hex("25HC9-VHRH4", &upper(true, true)),
      Decoded::valid("deadbeef".into())
    );
    assert_eq!(
      hex_to_base32("deadbeef", &Config::new(Variant::Lowercase, false, false)),
      "drk5rzr"
    );
  }

  #[test]
  fn test_empty() {
    for config in Config::combinations() {
      assert_eq!(hex_to_base32("", &config), "");
      assert_eq!(base32_to_hex("", &config), Decoded::valid(String::new()));
      assert_eq!(parse_base32("", &config), Ok(String::new()));
      assert!(group_report("", &config).is_empty());
    }
  }

  #[test]
  fn test_zero() {
    let config = upper(true, false);
    assert_eq!(hex_to_base32("0", &config), "2");
    assert_eq!(base32_to_hex("2", &config), Decoded::valid("0".into()));
    assert_eq!(hex_to_base32("000", &upper(false, false)), "2");
    assert_eq!(base32_to_hex("2222", &upper(false, false)), Decoded::valid("0".into()));
    assert_eq!(hex_to_base32("0", &upper(true, true)), "22222");
    assert_eq!(base32_to_hex("22222", &upper(true, true)), Decoded::valid("0".into()));
    assert_eq!(
      base32_to_hex("22222-22222", &upper(true, true)),
      Decoded::valid("0".into())
    );
  }

  #[test]
  fn test_bad_hex_is_silent() {
    for config in Config::combinations() {
      assert_eq!(hex_to_base32("xyz", &config), "");
      assert_eq!(hex_to_base32("12 34", &config), "");
    }
  }

  #[test]
  fn test_bad_group_invalidates_all() {
    let config = upper(true, true);
    let good = hex_to_base32("123456789abcdef", &config);
    assert_eq!(good.matches(format::SEPARATOR).count(), 2);
    let mut bad = good.clone().into_bytes();
    bad[10] = if bad[10] == b'Z' { b'Y' } else { b'Z' };
    let bad = String::from_utf8(bad).unwrap();
    assert!(base32_to_hex(&good, &config).valid);
    assert_eq!(base32_to_hex(&bad, &config), Decoded::invalid());
    assert_matches!(
      parse_base32(&bad, &config),
      Err(Error::ChecksumMismatch { group: 1, .. })
    );
  }

  #[test]
  fn test_group_report() {
    let config = upper(true, true);
    let report = group_report("25HC9-VHRH5-22222", &config);
    assert_eq!(report.len(), 3);
    assert_eq!(report[0], Ok("00dea".into()));
    assert_matches!(report[1], Err(Error::ChecksumMismatch { group: 1, .. }));
    assert_eq!(report[2], Ok("00000".into()));

    let report = group_report("5HCVHRH", &upper(false, false));
    assert_eq!(report, vec![Ok("deadbeef".into())]);

    for config in Config::combinations() {
      assert!(group_report("", &config).is_empty());
    }
  }

  #[test]
  fn test_case_is_exact() {
    assert!(!base32_to_hex("5hcvhrh", &upper(false, false)).valid);
    let config = Config::new(Variant::Lowercase, false, false);
    assert!(!base32_to_hex("DRK5RZR", &config).valid);
    let folded = config.variant.normalize_case("DRK5RZR");
    assert_eq!(base32_to_hex(&folded, &config).hex, "deadbeef");
  }

  fn configs() -> impl Strategy<Value = Config> {
    (0..8usize).prop_map(|i| Config::combinations().nth(i).unwrap())
  }

  proptest! {
    #[test]
    fn roundtrip(
      bytes in any::<Vec<u8>>(),
      upper_case in any::<bool>(),
      config in configs()
    ) {
      prop_assume!(!bytes.is_empty());
      let hex = hex::encode(&bytes);
      let hex = if upper_case { hex.to_uppercase() } else { hex };
      let encoded = hex_to_base32(&hex, &config);
      prop_assert_eq!(base32_to_hex(&encoded, &config), Decoded::valid(normalized(&hex)));
    }

    #[test]
    fn roundtrip_odd_lengths(hex in "[0-9a-fA-F]{1,41}", config in configs()) {
      let encoded = hex_to_base32(&hex, &config);
      prop_assert_eq!(base32_to_hex(&encoded, &config), Decoded::valid(normalized(&hex)));
    }

    #[test]
    fn grouping_structure(hex in "[0-9a-f]{1,41}", config in configs()) {
      prop_assume!(config.grouping);
      let encoded = hex_to_base32(&hex, &config);
      let groups = encoded.split(format::SEPARATOR).collect::<Vec<_>>();
      prop_assert_eq!(groups.len(), (hex.len() + 4) / 5);
      for group in groups {
        prop_assert_eq!(group.len(), 4 + config.checksum as usize);
      }
    }

    #[test]
    fn detects_substitution(
      hex in "[0-9a-f]{1,41}",
      config in configs(),
      at in any::<Index>(),
      delta in 1u8..32
    ) {
      let config = Config { checksum: true, ..config };
      let alphabet = config.alphabet();
      let mut chars = hex_to_base32(&hex, &config).chars().collect::<Vec<_>>();
      let digits = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| **c != format::SEPARATOR)
        .map(|(i, _)| i)
        .collect::<Vec<_>>();
      let i = digits[at.index(digits.len())];
      let value = alphabet.value_of(chars[i]).unwrap();
      chars[i] = alphabet.char_at((value + delta) % 32);
      let altered = chars.into_iter().collect::<String>();
      prop_assert_eq!(base32_to_hex(&altered, &config), Decoded::invalid());
    }

    #[test]
    fn rejects_foreign_characters(
      hex in "[0-9a-f]{1,41}",
      config in configs(),
      at in any::<Index>(),
      foreign in "[01IOlo!#_ ]"
    ) {
      let mut encoded = hex_to_base32(&hex, &config);
      let at = at.index(encoded.len() + 1);
      encoded.insert_str(at, &foreign);
      prop_assert!(!base32_to_hex(&encoded, &config).valid);
    }
  }
}

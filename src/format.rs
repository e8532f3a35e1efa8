//! Checksum insertion, grouping and leading-zero trimming on top of the
//! repacked quintets, and the inverse parse.

use crate::{config::Config, crc5::crc5, error::*, repack::QUINTETS_PER_WORD, util, Quintet};
use itertools::Itertools;
use log::trace;

pub const SEPARATOR: char = '-';

/// `quintets` must come straight out of the repacker: in grouped mode its
/// length is a multiple of four.
pub fn encode(quintets: &[Quintet], config: &Config) -> String {
  let alphabet = config.alphabet();
  if config.grouping {
    debug_assert_eq!(quintets.len() % QUINTETS_PER_WORD, 0);
    quintets
      .chunks(QUINTETS_PER_WORD)
      .map(|group| {
        let mut digits = group.to_vec();
        if config.checksum {
          digits.push(crc5(group));
        }
        alphabet.encode(&digits)
      })
      .join(&SEPARATOR.to_string())
  } else {
    let mut digits = quintets.to_vec();
    if config.checksum {
      digits.push(crc5(quintets));
    }
    alphabet.encode(util::trim_leading_zeros(&digits))
  }
}

/// Parses a displayed value back into its data quintets.
///
/// In grouped mode a single bad group fails the whole value.
pub fn decode(text: &str, config: &Config) -> Result<Vec<Quintet>> {
  let quintets = if config.grouping {
    text
      .split(SEPARATOR)
      .enumerate()
      .map(|(index, group)| decode_group(index, group, config))
      .collect::<Result<Vec<_>>>()?
      .concat()
  } else {
    let digits = config.alphabet().decode(text)?;
    if config.checksum {
      verify(0, digits)?
    } else {
      digits
    }
  };
  trace!("decoded `{}' to {:?}", text, quintets);
  Ok(quintets)
}

/// Decodes every group on its own, so that good groups survive bad ones.
/// Ungrouped text counts as a single group.
pub fn decode_groups(text: &str, config: &Config) -> Vec<Result<Vec<Quintet>>> {
  if config.grouping {
    text
      .split(SEPARATOR)
      .enumerate()
      .map(|(index, group)| decode_group(index, group, config))
      .collect()
  } else {
    vec![decode(text, config)]
  }
}

fn decode_group(index: usize, group: &str, config: &Config) -> Result<Vec<Quintet>> {
  let digits = config.alphabet().decode(group)?;
  let expected = QUINTETS_PER_WORD + config.checksum as usize;
  if digits.len() != expected {
    return Err(Error::GroupLengthMismatch {
      group: index,
      len: digits.len(),
      expected,
    });
  }
  if config.checksum {
    verify(index, digits)
  } else {
    Ok(digits)
  }
}

/// Splits off the trailing check digit and checks it against the rest.
fn verify(group: usize, mut digits: Vec<Quintet>) -> Result<Vec<Quintet>> {
  let actual = digits.pop().ok_or(Error::GroupLengthMismatch {
    group,
    len: 0,
    expected: 1,
  })?;
  let expected = crc5(&digits);
  if expected != actual {
    return Err(Error::ChecksumMismatch {
      group,
      expected,
      actual,
    });
  }
  Ok(digits)
}

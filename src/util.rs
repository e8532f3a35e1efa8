use std::iter;

/// Prepends zero digits until the length is a multiple of `width`.
pub fn left_pad(digits: &[u8], width: usize) -> Vec<u8> {
  let pad = (width - digits.len() % width) % width;
  iter::repeat(0)
    .take(pad)
    .chain(digits.iter().copied())
    .collect()
}

/// Drops leading zero digits, keeping at least one digit of a non-empty input.
pub fn trim_leading_zeros(digits: &[u8]) -> &[u8] {
  let start = digits
    .iter()
    .position(|d| *d != 0)
    .unwrap_or_else(|| digits.len().saturating_sub(1));
  &digits[start..]
}

#[test]
fn test_left_pad() {
  assert_eq!(left_pad(&[], 5), Vec::<u8>::new());
  assert_eq!(left_pad(&[7], 4), vec![0, 0, 0, 7]);
  assert_eq!(left_pad(&[1, 2, 3, 4], 4), vec![1, 2, 3, 4]);
  assert_eq!(left_pad(&[1, 2, 3, 4, 5, 6], 5), vec![0, 0, 0, 0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_trim() {
  assert_eq!(trim_leading_zeros(&[]), &[] as &[u8]);
  assert_eq!(trim_leading_zeros(&[0]), &[0]);
  assert_eq!(trim_leading_zeros(&[0, 0, 0]), &[0]);
  assert_eq!(trim_leading_zeros(&[0, 0, 3, 0]), &[3, 0]);
  assert_eq!(trim_leading_zeros(&[9, 0]), &[9, 0]);
}

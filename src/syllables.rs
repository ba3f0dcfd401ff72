use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
  // Any run of bytes closed by a boundary. Text after the last boundary never matches.
  static ref SYLLABLE_RE: Regex = Regex::new(r"(?-u)[^-?+]*[-?+]").unwrap();
}

/// Splits one dictionary line into its syllables.
///
/// The boundary byte is not part of the syllable, and whatever follows the
/// final boundary (including the line terminator) is dropped. Adjacent
/// boundaries give an empty syllable.
pub fn syllables<'l>(line: &'l [u8]) -> impl Iterator<Item = &'l [u8]> + 'l {
  SYLLABLE_RE.find_iter(line).map(|m| {
    let with_boundary = m.as_bytes();
    &with_boundary[.. with_boundary.len() - 1]
  })
}

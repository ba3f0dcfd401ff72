use std::io::{self, Write};

use itertools::Itertools;

use crate::options::FREQUENCY_THRESHOLD;
use crate::tally::SyllableTally;

#[derive(Clone, Debug, PartialEq)]
pub struct RankedSyllable {
  pub syllable: Vec<u8>,
  pub count: u64,
  pub frequency: f64
}

/// Freezes the tally into syllables ordered by descending count.
///
/// Equal counts are ordered by the syllable bytes, so the ranking is the
/// same on every run. An empty tally ranks to nothing.
pub fn rank(tally: SyllableTally) -> Vec<RankedSyllable> {
  let (counts, total) = tally.into_counts();
  if total == 0 {
    return vec![];
  }

  counts.into_iter()
    .sorted_by(|(sa, ca), (sb, cb)| cb.cmp(ca).then_with(|| sa.cmp(sb)))
    .map(|(syllable, count)| RankedSyllable {
      syllable,
      count,
      frequency: count as f64 / total as f64
    })
    .collect()
}

/// The leading run of entries at or above the threshold. The first entry
/// below it ends the run even if something later would pass.
pub fn above_threshold(ranked: &[RankedSyllable]) -> &[RankedSyllable] {
  let end = ranked.iter()
    .position(|r| r.frequency < FREQUENCY_THRESHOLD)
    .unwrap_or(ranked.len());
  &ranked[.. end]
}

/// Writes one `<syllable> <frequency>` line per entry above the threshold,
/// returning how many were written.
pub fn emit<W: Write>(ranked: &[RankedSyllable], out: &mut W) -> io::Result<usize> {
  let kept = above_threshold(ranked);
  for r in kept {
    out.write_all(&r.syllable)?;
    writeln!(out, " {:.6}", r.frequency)?;
  }
  Ok(kept.len())
}

#[cfg(test)]
mod tests {
  use super::*;
  use float_ord::FloatOrd;
  use more_asserts::assert_ge;

  fn entry(syllable: &str, frequency: f64) -> RankedSyllable {
    RankedSyllable { syllable: syllable.as_bytes().to_vec(), count: 0, frequency }
  }

  fn tally_of(syllables: &[&str]) -> SyllableTally {
    let mut tally = SyllableTally::new();
    for s in syllables {
      tally.record(s.as_bytes());
    }
    tally
  }

  #[test]
  fn test_normalization() {
    let ranked = rank(tally_of(&["a", "b", "a", "b"]));
    assert_eq!(ranked.len(), 2);
    for r in &ranked {
      assert_eq!(r.count, 2);
      assert_eq!(r.frequency, 0.5);
    }
  }

  #[test]
  fn test_descending_with_tie_break() {
    let ranked = rank(tally_of(&["na", "ka", "ta", "ka", "ta", "ka", "ma"]));
    let order: Vec<&[u8]> = ranked.iter().map(|r| r.syllable.as_slice()).collect();
    assert_eq!(order, vec![&b"ka"[..], &b"ta"[..], &b"ma"[..], &b"na"[..]]);

    for pair in ranked.windows(2) {
      assert_ge!(FloatOrd(pair[0].frequency), FloatOrd(pair[1].frequency));
    }
  }

  #[test]
  fn test_empty_tally() {
    assert!(rank(SyllableTally::new()).is_empty());
  }

  #[test]
  fn test_cutoff_is_prefix() {
    let ranked = vec![
      entry("a", 0.9), entry("b", 0.01), entry("c", 0.002), entry("d", 0.0003), entry("e", 0.7)
    ];
    let kept: Vec<f64> = above_threshold(&ranked).iter().map(|r| r.frequency).collect();
    assert_eq!(kept, vec![0.9, 0.01, 0.002]);
  }

  #[test]
  fn test_threshold_inclusive() {
    let ranked = vec![entry("a", 0.0005), entry("b", 0.0004999)];
    assert_eq!(above_threshold(&ranked).len(), 1);
  }

  #[test]
  fn test_emit_format() {
    let ranked = vec![entry("ka", 0.5), entry("ta", 0.25), entry("x", 0.0001)];
    let mut out: Vec<u8> = vec![];
    let written = emit(&ranked, &mut out).unwrap();
    assert_eq!(written, 2);
    assert_eq!(String::from_utf8(out).unwrap(), "ka 0.500000\nta 0.250000\n");
  }

  #[test]
  fn test_emit_nothing() {
    let mut out: Vec<u8> = vec![];
    assert_eq!(emit(&[], &mut out).unwrap(), 0);
    assert!(out.is_empty());
  }
}

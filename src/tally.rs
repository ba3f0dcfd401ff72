use std::collections::HashMap;

/// Occurrence counts per syllable, plus the number of syllables seen overall.
#[derive(Clone, Debug, Default)]
pub struct SyllableTally {
  counts: HashMap<Vec<u8>, u64>,
  total: u64
}

impl SyllableTally {
  pub fn new() -> SyllableTally {
    SyllableTally::default()
  }

  pub fn record(&mut self, syllable: &[u8]) {
    match self.counts.get_mut(syllable) {
      Some(count) => *count += 1,
      None => { self.counts.insert(syllable.to_vec(), 1); }
    }
    self.total += 1;
  }

  pub fn count(&self, syllable: &[u8]) -> u64 {
    *self.counts.get(syllable).unwrap_or(&0)
  }

  pub fn total(&self) -> u64 {
    self.total
  }

  pub fn distinct(&self) -> usize {
    self.counts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.total == 0
  }

  pub fn into_counts(self) -> (HashMap<Vec<u8>, u64>, u64) {
    (self.counts, self.total)
  }
}

impl<'s> Extend<&'s [u8]> for SyllableTally {
  fn extend<I: IntoIterator<Item = &'s [u8]>>(&mut self, syllables: I) {
    for s in syllables {
      self.record(s);
    }
  }
}

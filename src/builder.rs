use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use log::{debug, info};

use crate::error::{SyllableError, SyllableResult};
use crate::options::{BuildOptions, MAX_SYLLABLE_LEN};
use crate::ranking::{emit, rank, RankedSyllable};
use crate::syllables::syllables;
use crate::tally::SyllableTally;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildSummary {
  pub lines: usize,
  pub distinct: usize,
  pub total: u64,
  pub written: usize
}

pub struct SyllableFrequencyBuilder {
  options: BuildOptions
}

impl SyllableFrequencyBuilder {
  pub fn new(options: BuildOptions) -> SyllableFrequencyBuilder {
    SyllableFrequencyBuilder { options }
  }

  /// Counts the input, then writes the ranked table. The output file is
  /// not touched unless the whole input was read successfully.
  pub fn run(&self) -> SyllableResult<BuildSummary> {
    let (tally, lines) = self.read_input()?;
    let distinct = tally.distinct();
    let total = tally.total();
    info!("Read {} lines: {} syllables, {} distinct", lines, total, distinct);

    let ranked = rank(tally);
    let written = self.write_output(&ranked)?;
    info!("Wrote {} of {} syllables to {}", written, distinct, self.options.output_path.display());

    Ok(BuildSummary { lines, distinct, total, written })
  }

  pub fn read_input(&self) -> SyllableResult<(SyllableTally, usize)> {
    let path = &self.options.input_path;
    let file = File::open(path).map_err(|source| SyllableError::InputOpen { path: path.clone(), source })?;
    self.tally_lines(BufReader::new(file))
  }

  /// Tallies every line of `reader`, returning the tally and the number of lines read.
  pub fn tally_lines<R: BufRead>(&self, mut reader: R) -> SyllableResult<(SyllableTally, usize)> {
    let mut tally = SyllableTally::new();
    let mut line = Vec::new();
    let mut line_no = 0;

    loop {
      line.clear();
      let n = reader.read_until(b'\n', &mut line)
        .map_err(|source| SyllableError::InputRead { path: self.options.input_path.clone(), source })?;
      if n == 0 {
        break;
      }
      line_no += 1;

      for syllable in syllables(&line) {
        if syllable.len() > MAX_SYLLABLE_LEN {
          return Err(SyllableError::TokenOverlong {
            line: line_no,
            syllable: String::from_utf8_lossy(syllable).into_owned(),
            max: MAX_SYLLABLE_LEN
          });
        }
        tally.record(syllable);
      }
    }

    Ok((tally, line_no))
  }

  pub fn write_output(&self, ranked: &[RankedSyllable]) -> SyllableResult<usize> {
    let path = &self.options.output_path;
    let to_err = |source| SyllableError::OutputWrite { path: path.clone(), source };

    let mut out = BufWriter::new(File::create(path).map_err(to_err)?);
    let written = emit(ranked, &mut out).map_err(to_err)?;
    out.flush().map_err(to_err)?;

    if let Some(last) = ranked.get(written) {
      debug!("Cut off at {:?} ({:.6})", String::from_utf8_lossy(&last.syllable), last.frequency);
    }
    Ok(written)
  }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyllableError {
  #[error("Could not open {}: {source}", path.display())]
  InputOpen { path: PathBuf, source: io::Error },

  #[error("Could not read {}: {source}", path.display())]
  InputRead { path: PathBuf, source: io::Error },

  #[error("Syllable {syllable:?} on line {line} is longer than {max} bytes")]
  TokenOverlong { line: usize, syllable: String, max: usize },

  #[error("Could not write {}: {source}", path.display())]
  OutputWrite { path: PathBuf, source: io::Error },
}

pub type SyllableResult<T> = Result<T, SyllableError>;

use std::path::PathBuf;

pub const INPUT_FILE: &str = "silbitus.dic";
pub const OUTPUT_FILE: &str = "syls.txt";

/// Entries with a normalized frequency below this end the output.
pub const FREQUENCY_THRESHOLD: f64 = 0.0005;

/// Longest syllable accepted, in bytes.
pub const MAX_SYLLABLE_LEN: usize = 9;

#[derive(Clone, Debug, PartialEq)]
pub struct BuildOptions {
  pub input_path: PathBuf,
  pub output_path: PathBuf
}

impl BuildOptions {
  pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> BuildOptions {
    BuildOptions {
      input_path: input_path.into(),
      output_path: output_path.into()
    }
  }
}

impl Default for BuildOptions {
  fn default() -> Self {
    BuildOptions::new(INPUT_FILE, OUTPUT_FILE)
  }
}

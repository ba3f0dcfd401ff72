
use std::io::Write;
use std::process;

use env_logger::{Builder, Env};

use syllable_frequencies::options::OUTPUT_FILE;
use syllable_frequencies::{BuildOptions, SyllableFrequencyBuilder};

fn main() {
  Builder::from_env(Env::default().default_filter_or("warn"))
    .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
    .init();

  println!("Will write syllable counts to {}", OUTPUT_FILE);

  let builder = SyllableFrequencyBuilder::new(BuildOptions::default());
  if let Err(e) = builder.run() {
    eprintln!("Error: {}", e);
    process::exit(1);
  }

  println!("Done writing syllable counts.");
}

pub mod error;
pub mod options;
pub mod syllables;
pub mod tally;
pub mod ranking;
pub mod builder;

pub use builder::{BuildSummary, SyllableFrequencyBuilder};
pub use error::{SyllableError, SyllableResult};
pub use options::BuildOptions;

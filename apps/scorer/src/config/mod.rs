pub mod scorer;

pub use scorer::{LogFormat, OutputMode, ScorerConfig};

pub mod cascade;
pub mod engine;
pub mod extractors;
pub mod normalizer;
pub mod registry;

pub use cascade::CascadeMatcher;
pub use engine::{parse, FilenameParser};
pub use extractors::{Extraction, Extractors};
pub use normalizer::Normalizer;
pub use registry::{Pattern, PatternRegistry};

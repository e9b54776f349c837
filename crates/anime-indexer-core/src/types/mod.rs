pub mod convention;
pub mod record;

pub use convention::Convention;
pub use record::EpisodeRecord;

pub mod record;
pub mod date_range;
pub mod relevance;

pub use record::NewsRecord;
pub use date_range::DateRange;
pub use relevance::RelevanceFilter;

pub mod traits;
pub mod http;
pub mod relay;
pub mod direct;
pub mod parser;

pub use traits::FeedSource;
pub use relay::{RelaySource, DEFAULT_RELAY_URL};
pub use direct::DirectSource;
pub use parser::parse_records;

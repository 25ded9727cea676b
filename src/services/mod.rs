pub mod fetch_service;
pub mod news_service;

pub use fetch_service::FetchService;
pub use news_service::{filter_and_sort, LoadState, NewsService, LOAD_ERROR_MESSAGE, MAX_RECORDS};

mod connection;
mod kv_repository;

pub use connection::SqliteStorage;
pub use kv_repository::SqliteKeyValueStore;

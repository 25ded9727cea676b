use crate::errors::NewsdeskResult;

/// String slot store. No transactional guarantees beyond a single `set`.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> NewsdeskResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> NewsdeskResult<()>;
}

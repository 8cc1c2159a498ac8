//! # Key-value backend abstraction
//!
//! Everything inkpad persists goes through [`KeyValueStore`]: a small async
//! interface over string keys and string (JSON) values. The same store logic
//! works against an in-memory map (tests, native fallback) or the browser's
//! `localStorage` ([`crate::LocalStorageStore`], web builds).
//!
//! The backing store is shared by all components and potentially by several
//! browser tabs. There is no locking or transaction discipline on top of it:
//! every write is a full read-modify-write of one value, so concurrent
//! writers race and the last write wins at whole-value granularity.

use crate::error::StoreError;

/// Async interface over the backing key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;

    /// Delete the value stored under `key`. Removing an absent key is not an
    /// error.
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

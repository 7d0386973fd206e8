//! The shared signal slot that tells a running render loop when to stop.
//!
//! Each spinner invocation owns one slot in a [`SignalStore`], addressed by a freshly generated
//! [`SignalKey`]. The slot holds a single `bool`: `true` while the work is still running, `false`
//! once it has finished, and it is removed entirely when the invocation is torn down. The render
//! loop polls the slot and keeps drawing only while it reads `true`; an absent slot reads the
//! same as a stopped one.

use std::{
    collections::HashMap,
    error::Error,
    fmt,
    sync::Mutex,
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{distributions::Alphanumeric, Rng};

/// Length of the random suffix of a generated [`SignalKey`].
const KEY_ENTROPY: usize = 30;

/// A key-value store shared between the render loop and the work wrapper.
///
/// The default implementation is [`MemoryStore`], which is visible across the threads of one
/// process. Implement this trait over a store with wider visibility (a file, a shared memory
/// segment, a network service) if the two tasks of an invocation ever run in contexts that do
/// not share memory.
pub trait SignalStore: Send + Sync {
    /// Stores `running` at `key`, replacing any previous value.
    fn put(&self, key: &str, running: bool) -> Result<(), StoreError>;

    /// Reads the state stored at `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored at `key`, or when the slot has already
    /// been removed.
    fn get(&self, key: &str) -> Result<Option<bool>, StoreError>;

    /// Removes the slot at `key`. Removing an absent slot is not an error.
    fn forget(&self, key: &str) -> Result<(), StoreError>;
}

/// The default [`SignalStore`]: a mutex-protected map shared between threads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, bool>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SignalStore for MemoryStore {
    fn put(&self, key: &str, running: bool) -> Result<(), StoreError> {
        self.slots.lock().unwrap().insert(key.to_string(), running);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<bool>, StoreError> {
        Ok(self.slots.lock().unwrap().get(key).copied())
    }

    fn forget(&self, key: &str) -> Result<(), StoreError> {
        self.slots.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Identifies one invocation's slot in the signal store.
///
/// A key is generated fresh for every invocation and threaded by reference through the
/// coordinator, the render loop and the work wrapper. It is never cached across invocations, so
/// concurrent spinners on the same component stay independent of each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignalKey(String);

impl SignalKey {
    /// Generates a key that is unique among concurrently live invocations.
    ///
    /// The key combines the current Unix-epoch second with a 30-character random alphanumeric
    /// suffix, so a collision requires two invocations to draw the same suffix within the same
    /// second.
    pub fn generate() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(KEY_ENTROPY)
            .map(char::from)
            .collect();
        Self(format!("spinner_{secs}_{suffix}"))
    }

    /// Returns the key as a string slice, suitable for [`SignalStore`] calls.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An error reported by a [`SignalStore`] implementation.
#[derive(Debug, Clone)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Creates an error describing what the store could not do.
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "signal store error: {}", self.message)
    }
}

impl Error for StoreError {}

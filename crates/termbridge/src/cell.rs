use std::cell::OnceCell;

use crate::error::TermError;
use crate::Result;

/// Holds the process-wide bridge reference.
///
/// The reference is resolved at most once and never refreshed. The host
/// runtime is single-threaded, so the slot lives in a thread-local rather
/// than behind a lock.
#[derive(Debug)]
pub struct BridgeCell<B> {
    inner: OnceCell<B>,
}

impl<B> Default for BridgeCell<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> BridgeCell<B> {
    pub const fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    pub fn get_or_init(&self, lookup: impl FnOnce() -> B) -> &B {
        self.inner.get_or_init(lookup)
    }

    /// Installs `bridge` ahead of the first lookup.
    pub fn set(&self, bridge: B) -> Result<()> {
        self.inner
            .set(bridge)
            .map_err(|_| TermError::AlreadyInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.get().is_some()
    }
}

//! Screen State Module
//!
//! Mutable state owned by the presentation layer: the address being viewed,
//! the loading flag, and the last completed snapshot. The query layer never
//! touches this; callers feed lookup results in and the snapshot is replaced
//! wholesale, never merged.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::utils::types::WalletSnapshot;

#[derive(Debug, Default)]
pub struct ViewState {
    address: RwLock<String>,
    loading: AtomicBool,
    snapshot: RwLock<Option<WalletSnapshot>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_address(&self, address: &str) {
        *self.address.write() = address.to_string();
    }

    pub fn address(&self) -> String {
        self.address.read().clone()
    }

    /// Mark a lookup as in flight. Returns false if one is already
    /// outstanding; the caller is expected to skip the new search.
    pub fn begin_lookup(&self) -> bool {
        !self.loading.swap(true, Ordering::SeqCst)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Store a completed lookup, replacing any previous snapshot.
    pub fn complete(&self, snapshot: WalletSnapshot) {
        *self.snapshot.write() = Some(snapshot);
        self.loading.store(false, Ordering::SeqCst);
    }

    /// Clear the loading flag after a failed lookup. The previous snapshot
    /// stays on screen; partial results from the failed lookup never land.
    pub fn fail(&self) {
        self.loading.store(false, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Option<WalletSnapshot> {
        self.snapshot.read().clone()
    }
}

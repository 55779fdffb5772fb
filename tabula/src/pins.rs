//! Pinned rows.

use crate::key::RowKey;

/// Ordered set of pinned rows. Pin order is render order.
#[derive(Debug, Clone, Default)]
pub struct Pins {
    keys: Vec<RowKey>,
}

impl Pins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pinned(&self, key: &RowKey) -> bool {
        self.keys.contains(key)
    }

    /// Pin a row at the end of the pinned block. Returns true if it changed.
    pub fn pin(&mut self, key: RowKey) -> bool {
        if self.is_pinned(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Unpin a row. Returns true if it changed.
    pub fn unpin(&mut self, key: &RowKey) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    /// Flip the pin state. Returns the new state.
    pub fn toggle(&mut self, key: &RowKey) -> bool {
        if self.unpin(key) {
            false
        } else {
            self.keys.push(key.clone());
            true
        }
    }

    /// Pinned keys in pin order.
    pub fn keys(&self) -> &[RowKey] {
        &self.keys
    }

    /// Drop pins whose key no longer exists.
    pub fn retain(&mut self, mut exists: impl FnMut(&RowKey) -> bool) {
        self.keys.retain(|key| exists(key));
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::insets::SafeAreaInset;

/// Top safe-area inset height in vp
pub const AVOID_TOP_HEIGHT: &str = "avoidTopHeight";
/// Bottom safe-area inset height in vp
pub const AVOID_BOTTOM_HEIGHT: &str = "avoidBottomHeight";
/// Legacy single-key variant, mirrors the top inset
pub const NAV_HEIGHT: &str = "navHeight";

/// Process-wide key/value UI state.
///
/// Single writer (the lifecycle controller), arbitrary readers,
/// last-writer-wins. Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct SharedUiState {
    inner: Rc<RefCell<HashMap<String, f32>>>,
}

impl SharedUiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: &str, value: f32) {
        self.inner.borrow_mut().insert(key.to_owned(), value);
    }

    pub fn get(&self, key: &str) -> Option<f32> {
        self.inner.borrow().get(key).copied()
    }

    /// Publish both inset heights in a single write.
    ///
    /// Readers can never observe a top value from one notification paired
    /// with a bottom value from another. The legacy navHeight key is kept
    /// in step with the top inset for older consumers.
    pub fn publish_insets(&self, inset: SafeAreaInset) {
        let mut map = self.inner.borrow_mut();
        map.insert(AVOID_TOP_HEIGHT.to_owned(), inset.top);
        map.insert(AVOID_BOTTOM_HEIGHT.to_owned(), inset.bottom);
        map.insert(NAV_HEIGHT.to_owned(), inset.top);
    }

    /// Read the published inset pair, if any publish has happened yet
    pub fn insets(&self) -> Option<SafeAreaInset> {
        let map = self.inner.borrow();
        let top = map.get(AVOID_TOP_HEIGHT)?;
        let bottom = map.get(AVOID_BOTTOM_HEIGHT)?;
        Some(SafeAreaInset {
            top: *top,
            bottom: *bottom,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_has_no_insets() {
        let state = SharedUiState::new();
        assert!(state.insets().is_none());
        assert!(state.get(AVOID_TOP_HEIGHT).is_none());
    }

    #[test]
    fn publish_writes_pair_and_legacy_key() {
        let state = SharedUiState::new();
        state.publish_insets(SafeAreaInset {
            top: 40.0,
            bottom: 20.0,
        });

        assert_eq!(state.get(AVOID_TOP_HEIGHT), Some(40.0));
        assert_eq!(state.get(AVOID_BOTTOM_HEIGHT), Some(20.0));
        assert_eq!(state.get(NAV_HEIGHT), Some(40.0));
    }

    #[test]
    fn last_writer_wins() {
        let state = SharedUiState::new();
        state.publish_insets(SafeAreaInset {
            top: 40.0,
            bottom: 20.0,
        });
        state.publish_insets(SafeAreaInset {
            top: 12.0,
            bottom: 6.0,
        });

        let inset = state.insets().unwrap();
        assert_eq!(inset.top, 12.0);
        assert_eq!(inset.bottom, 6.0);
        assert_eq!(state.get(NAV_HEIGHT), Some(12.0));
    }

    #[test]
    fn clones_share_one_store() {
        let writer = SharedUiState::new();
        let reader = writer.clone();

        writer.set("customKey", 7.5);
        assert_eq!(reader.get("customKey"), Some(7.5));
    }
}

//! Parse state for block classification.
//!
//! The [`ParseState`] struct holds the two flags the block parser
//! carries between lines. There is no block stack: the open block is
//! always the last element of the block sequence, and these flags say
//! how the next line may interact with it.

use serde::{Deserialize, Serialize};

/// Per-line state of the block parser.
///
/// # Example
///
/// ```
/// use marker_core::ParseState;
///
/// let mut state = ParseState::new();
/// state.lock();
/// assert!(state.is_locked());
/// state.unlock();
/// assert!(!state.in_block);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseState {
    /// The last block accepts continuation lines of its own kind.
    pub in_block: bool,
    /// Verbatim lock: a fenced code block is open and swallowing lines
    /// raw. While set, only the fence toggle is consulted.
    pub locked: bool,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the last block open for continuation.
    pub fn open_block(&mut self) {
        self.in_block = true;
    }

    /// Close whatever block was open.
    pub fn close_block(&mut self) {
        self.in_block = false;
    }

    /// Enter verbatim mode for a freshly opened code block.
    pub fn lock(&mut self) {
        self.in_block = true;
        self.locked = true;
    }

    /// Leave verbatim mode and close the code block.
    pub fn unlock(&mut self) {
        self.in_block = false;
        self.locked = false;
    }

    /// Whether a code block is currently swallowing lines.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_unlocked() {
        let state = ParseState::new();
        assert!(!state.in_block);
        assert!(!state.is_locked());
    }

    #[test]
    fn lock_opens_and_locks() {
        let mut state = ParseState::new();
        state.lock();
        assert!(state.in_block);
        assert!(state.is_locked());
    }

    #[test]
    fn unlock_closes_and_unlocks() {
        let mut state = ParseState::new();
        state.lock();
        state.unlock();
        assert!(!state.in_block);
        assert!(!state.is_locked());
    }

    #[test]
    fn open_close_toggle_continuation_only() {
        let mut state = ParseState::new();
        state.open_block();
        assert!(state.in_block);
        assert!(!state.is_locked());
        state.close_block();
        assert!(!state.in_block);
    }
}

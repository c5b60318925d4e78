//! Prev/next navigation cursor for the detail view.
//!
//! The cursor indexes into the FULL list rather than the filtered view:
//! from any entry point the user can page through the whole dictionary,
//! independent of the active search or filter.

use crate::model::word::Word;
use log::debug;

/// Index bookkeeping for sequential browsing.
///
/// The list can shrink between `open` and a later `next`/`previous` (a
/// delete from the list view), so every access clamps the index into range
/// instead of trusting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationCursor {
    index: Option<usize>,
}

impl NavigationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the cursor at the record with `id`.
    ///
    /// Returns `false` and leaves the cursor unset when the id is not in
    /// the list; callers should treat that as "nothing to show".
    pub fn open(&mut self, words: &[Word], id: &str) -> bool {
        match words.iter().position(|word| word.id == id) {
            Some(position) => {
                self.index = Some(position);
                true
            }
            None => {
                debug!("event=cursor_open module=cursor status=noop id={id}");
                self.index = None;
                false
            }
        }
    }

    /// Clears the cursor when the detail view closes.
    pub fn close(&mut self) {
        self.index = None;
    }

    /// Advances by one, wrapping past the last element to index 0.
    ///
    /// No-op when nothing is open or the list is empty.
    pub fn next(&mut self, len: usize) {
        self.index = self.clamped(len).map(|current| {
            if current + 1 >= len {
                0
            } else {
                current + 1
            }
        });
    }

    /// Retreats by one, wrapping before index 0 to the last element.
    ///
    /// No-op when nothing is open or the list is empty.
    pub fn previous(&mut self, len: usize) {
        self.index = self.clamped(len).map(|current| {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        });
    }

    /// The currently open record, clamped into range.
    pub fn current<'a>(&self, words: &'a [Word]) -> Option<&'a Word> {
        self.clamped(words.len()).and_then(|index| words.get(index))
    }

    fn clamped(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        self.index.map(|index| index.min(len - 1))
    }
}

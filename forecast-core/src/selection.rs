use tracing::debug;

use crate::model::FORECAST_DAYS;

const LAST_INDEX: usize = FORECAST_DAYS - 1;

/// Index of the selected day in the forecast window; 0 is today.
///
/// "Previous" walks back in time (index grows) and "next" walks towards
/// today (index shrinks). Moves past either end are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionController {
    index: usize,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_select_previous(&self) -> bool {
        self.index < LAST_INDEX
    }

    pub fn can_select_next(&self) -> bool {
        self.index > 0
    }

    /// Move to the next older day. Returns whether the index changed.
    pub fn select_previous(&mut self) -> bool {
        if !self.can_select_previous() {
            return false;
        }
        self.set(self.index + 1);
        true
    }

    /// Move to the next more recent day. Returns whether the index changed.
    pub fn select_next(&mut self) -> bool {
        if !self.can_select_next() {
            return false;
        }
        self.set(self.index - 1);
        true
    }

    /// Jump straight to `index`; out-of-range values are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index > LAST_INDEX {
            debug!(index, "ignoring out-of-range day selection");
            return false;
        }
        if index == self.index {
            return false;
        }
        self.set(index);
        true
    }

    fn set(&mut self, index: usize) {
        debug!(from = self.index, to = index, "selected day changed");
        self.index = index;
    }
}

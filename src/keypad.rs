//! Multitap keyboard - grid layout and text-entry state machine.
//!
//! The Search screen shows a 3×4 key grid.  Rows 0-2 carry character
//! clusters in the style of a phone keypad; row 3 is Backspace, mode
//! toggle, and Submit in every mode.  Repeated taps on the same cluster
//! cell within `MULTITAP_WINDOW_MS` cycle through its candidates,
//! replacing the previously appended character.

use heapless::String;

use crate::config::{
    KEY_COL_BANDS, KEY_ROW_BANDS, MULTITAP_WINDOW_MS, SEARCH_TEXT_CAPACITY,
};

/// Grid cell index of the Backspace key.
pub const CELL_BACKSPACE: usize = 9;
/// Grid cell index of the mode-toggle key.
pub const CELL_MODE: usize = 10;
/// Grid cell index of the Submit key.
pub const CELL_SUBMIT: usize = 11;

/// Lowercase clusters, cells 0-8 (cell 8 is space).
pub const LOWER_CLUSTERS: [&str; 9] = [
    "abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz", " ",
];

/// Uppercase clusters, cells 0-8.
pub const UPPER_CLUSTERS: [&str; 9] = [
    "ABC", "DEF", "GHI", "JKL", "MNO", "PQRS", "TUV", "WXYZ", " ",
];

/// Numeric clusters, single candidate each.  Cells 9-11 (`0`, `.`, `@`)
/// are shadowed by the special keys sitting on row 3.
pub const NUMERIC_CLUSTERS: [&str; 12] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", ".", "@",
];

/// Keyboard entry mode, toggled cyclically by the mode key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardMode {
    #[default]
    Lower,
    Upper,
    Numeric,
}

impl KeyboardMode {
    pub fn next(self) -> Self {
        match self {
            KeyboardMode::Lower => KeyboardMode::Upper,
            KeyboardMode::Upper => KeyboardMode::Numeric,
            KeyboardMode::Numeric => KeyboardMode::Lower,
        }
    }

    /// Label shown on the mode key.
    pub fn label(self) -> &'static str {
        match self {
            KeyboardMode::Lower => "abc",
            KeyboardMode::Upper => "ABC",
            KeyboardMode::Numeric => "123",
        }
    }
}

/// Candidate clusters for a mode, indexed by grid cell.
pub fn clusters(mode: KeyboardMode) -> &'static [&'static str] {
    match mode {
        KeyboardMode::Lower => &LOWER_CLUSTERS,
        KeyboardMode::Upper => &UPPER_CLUSTERS,
        KeyboardMode::Numeric => &NUMERIC_CLUSTERS,
    }
}

/// What a grid cell resolves to under a given mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Ordered candidate characters for multitap cycling.
    Cluster(&'static str),
    Backspace,
    Mode,
    Submit,
}

/// Resolve a cell index to its key.  The special cells win in every mode.
pub fn key_at(mode: KeyboardMode, cell: usize) -> Option<Key> {
    match cell {
        CELL_BACKSPACE => Some(Key::Backspace),
        CELL_MODE => Some(Key::Mode),
        CELL_SUBMIT => Some(Key::Submit),
        _ => clusters(mode).get(cell).copied().map(Key::Cluster),
    }
}

/// Map panel coordinates to a grid cell.  Taps in the gutters between
/// bands resolve to nothing.
pub fn hit_test(x: i32, y: i32) -> Option<usize> {
    let row = KEY_ROW_BANDS
        .iter()
        .position(|&(lo, hi)| (lo..=hi).contains(&y))?;
    let col = KEY_COL_BANDS
        .iter()
        .position(|&(lo, hi)| (lo..=hi).contains(&x))?;
    Some(row * KEY_COL_BANDS.len() + col)
}

/// Multitap text-entry state machine for the search field.
#[derive(Default)]
pub struct MultitapEditor {
    text: String<SEARCH_TEXT_CAPACITY>,
    mode: KeyboardMode,
    /// Cluster cell of the in-progress multitap cycle, if any.
    active_cell: Option<usize>,
    cycle: usize,
    last_press_ms: u64,
}

impl MultitapEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated search text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> KeyboardMode {
        self.mode
    }

    /// Last `max` characters of the text, for the on-screen field.
    pub fn tail(&self, max: usize) -> &str {
        let len = self.text.len();
        &self.text[len.saturating_sub(max)..]
    }

    /// Handle a tap at panel coordinates.
    ///
    /// Returns whether the visible state changed (and a redraw is due).
    /// Taps outside the grid are ignored.
    pub fn handle_tap(&mut self, x: i32, y: i32, now_ms: u64) -> bool {
        let cell = match hit_test(x, y) {
            Some(c) => c,
            None => return false,
        };
        let key = match key_at(self.mode, cell) {
            Some(k) => k,
            None => return false,
        };

        match key {
            Key::Backspace => {
                self.text.pop();
                self.reset_cycle();
                true
            }
            Key::Mode => {
                self.mode = self.mode.next();
                self.reset_cycle();
                true
            }
            Key::Submit => {
                // The search action itself belongs to the companion feed.
                self.reset_cycle();
                true
            }
            Key::Cluster(candidates) => self.press_cluster(cell, candidates, now_ms),
        }
    }

    fn press_cluster(&mut self, cell: usize, candidates: &'static str, now_ms: u64) -> bool {
        let within_window = now_ms.wrapping_sub(self.last_press_ms) < MULTITAP_WINDOW_MS;

        if self.active_cell == Some(cell) && within_window {
            // Same key again - replace the last character with the next
            // candidate in the cycle.
            self.cycle = (self.cycle + 1) % candidates.len();
            self.text.pop();
        } else {
            self.active_cell = Some(cell);
            self.cycle = 0;
        }

        // Clusters are ASCII, so indexing by byte is indexing by char.
        let ch = candidates.as_bytes()[self.cycle] as char;
        if self.text.push(ch).is_err() {
            // Buffer full - drop the tap, don't start a cycle that the
            // next press would try to rewind.
            self.reset_cycle();
            return false;
        }

        self.last_press_ms = now_ms;
        true
    }

    fn reset_cycle(&mut self) {
        self.active_cell = None;
        self.cycle = 0;
    }
}

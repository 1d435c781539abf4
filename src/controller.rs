//! Per-tick input routing.
//!
//! One sample per tick flows through here.  On the Search screen the
//! keypad sees it first (against the screen that was active when the
//! tap landed), then the gesture tracker - both unconditionally, so a
//! single contact can register as a key press *and* move the gesture
//! anchor, and a qualifying swipe over the keyboard still navigates
//! away mid-entry.  Whether that is a feature ("swipe to leave search")
//! or a quirk is deliberately left as-is; see DESIGN.md.

use crate::input::swipe::SwipeTracker;
use crate::input::TouchPoint;
use crate::keypad::MultitapEditor;
use crate::menu::{MenuCursor, Screen};

/// Owns all input-facing state: gesture tracker, menu position, editor.
#[derive(Default)]
pub struct UiController {
    swipe: SwipeTracker,
    menu: MenuCursor,
    editor: MultitapEditor,
}

impl UiController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> &MenuCursor {
        &self.menu
    }

    pub fn editor(&self) -> &MultitapEditor {
        &self.editor
    }

    /// Route the tick's sample.  Returns whether a redraw is needed.
    pub fn tick(&mut self, sample: Option<TouchPoint>, now_ms: u64) -> bool {
        let mut redraw = false;

        if self.menu.screen() == Screen::Search {
            if let Some(point) = sample {
                redraw |= self.editor.handle_tap(point.x, point.y, now_ms);
            }
        }

        if let Some(event) = self.swipe.update(sample, self.menu.sub_slots(), now_ms) {
            self.menu.apply(event);
            redraw = true;
        }

        redraw
    }
}

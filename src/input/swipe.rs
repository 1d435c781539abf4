//! Swipe detection over the raw touch sample stream.
//!
//! Per-tick contract: feed the latest sample (or `None` for no contact)
//! into [`SwipeTracker::update`] and apply the returned [`NavEvent`], if
//! any.  Motion below both thresholds is a continuing drag; losing
//! contact always starts a fresh gesture.
//!
//! After a swipe fires, classification is suppressed for
//! `SWIPE_COOLDOWN_MS` via a monotonic timestamp gate so one continuous
//! motion cannot trigger twice.  The gate only mutes this tracker; the
//! rest of the tick loop keeps running during the window.

use crate::config::{SWIPE_COOLDOWN_MS, SWIPE_MAIN_THRESHOLD, SWIPE_SUB_THRESHOLD};

use super::{NavEvent, TouchPoint};

/// Tracks the anchor point of an in-progress gesture.
#[derive(Default)]
pub struct SwipeTracker {
    /// Where the current contact started (or last re-anchored).
    anchor: Option<TouchPoint>,
    /// Classification is muted until this instant (ms).
    cooldown_until_ms: u64,
}

impl SwipeTracker {
    pub const fn new() -> Self {
        Self {
            anchor: None,
            cooldown_until_ms: 0,
        }
    }

    /// Classify the latest sample.
    ///
    /// `sub_slots` is the submenu count of the current main screen; a
    /// horizontal swipe on a single-submenu screen clears the anchor and
    /// arms the cooldown but emits nothing.
    pub fn update(
        &mut self,
        sample: Option<TouchPoint>,
        sub_slots: u8,
        now_ms: u64,
    ) -> Option<NavEvent> {
        if now_ms < self.cooldown_until_ms {
            return None;
        }

        let point = match sample {
            Some(p) => p,
            None => {
                // Finger lifted - never compare against a stale anchor.
                self.anchor = None;
                return None;
            }
        };

        let anchor = match self.anchor {
            Some(a) => a,
            None => {
                self.anchor = Some(point);
                return None;
            }
        };

        let dx = point.x - anchor.x;
        let dy = point.y - anchor.y;

        // Vertical swipe - main menu. Requires strictly dominating the
        // horizontal axis, so the two branches are mutually exclusive
        // and equal deltas fire neither.
        if dy.abs() > SWIPE_MAIN_THRESHOLD && dy.abs() > dx.abs() {
            self.fire(now_ms);
            return Some(if dy > 0 {
                NavEvent::MainNext
            } else {
                NavEvent::MainPrev
            });
        }

        // Horizontal swipe - submenu.
        if dx.abs() > SWIPE_SUB_THRESHOLD && dx.abs() > dy.abs() {
            self.fire(now_ms);
            if sub_slots > 1 {
                return Some(if dx < 0 {
                    NavEvent::SubNext
                } else {
                    NavEvent::SubPrev
                });
            }
            return None;
        }

        // Sub-threshold motion: continuing drag, re-anchor.
        self.anchor = Some(point);
        None
    }

    fn fire(&mut self, now_ms: u64) {
        self.anchor = None;
        self.cooldown_until_ms = now_ms + SWIPE_COOLDOWN_MS;
    }
}

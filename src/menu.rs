//! Two-level menu position: main screen plus optional submenu.

use crate::input::NavEvent;

/// Number of main screens.
pub const MAIN_SCREENS: u8 = 5;

/// Submenu count per main screen (Time, Weather, Crypto, Search, Settings).
pub const SUB_SLOTS: [u8; MAIN_SCREENS as usize] = [1, 2, 1, 1, 1];

/// The view selected by a menu position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Clock face - date and time.
    Time,
    /// Current weather with icon.
    WeatherNow,
    /// Weather details - temperature, wind, humidity.
    WeatherDetails,
    /// Crypto spot prices.
    Crypto,
    /// Search field with the multitap keyboard.
    Search,
    /// Settings (placeholder).
    Settings,
}

/// Current position in the menu hierarchy.
///
/// Invariant: `sub < SUB_SLOTS[main]`.  Main navigation wraps over all
/// five screens and resets the submenu; submenu navigation wraps within
/// the current screen and is a no-op where only one submenu exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuCursor {
    main: u8,
    sub: u8,
}

impl MenuCursor {
    pub const fn new() -> Self {
        Self { main: 0, sub: 0 }
    }

    pub fn main(&self) -> u8 {
        self.main
    }

    pub fn sub(&self) -> u8 {
        self.sub
    }

    /// Submenu count of the current main screen.
    pub fn sub_slots(&self) -> u8 {
        SUB_SLOTS[self.main as usize]
    }

    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::MainNext => self.step_main(1),
            NavEvent::MainPrev => self.step_main(-1),
            NavEvent::SubNext => self.step_sub(1),
            NavEvent::SubPrev => self.step_sub(-1),
        }
    }

    fn step_main(&mut self, dir: i8) {
        self.main = (self.main as i8 + dir).rem_euclid(MAIN_SCREENS as i8) as u8;
        self.sub = 0;
    }

    fn step_sub(&mut self, dir: i8) {
        let slots = self.sub_slots();
        if slots <= 1 {
            return;
        }
        self.sub = (self.sub as i8 + dir).rem_euclid(slots as i8) as u8;
    }

    /// Resolve the position to the screen it selects.
    pub fn screen(&self) -> Screen {
        match (self.main, self.sub) {
            (0, _) => Screen::Time,
            (1, 0) => Screen::WeatherNow,
            (1, _) => Screen::WeatherDetails,
            (2, _) => Screen::Crypto,
            (3, _) => Screen::Search,
            _ => Screen::Settings,
        }
    }
}

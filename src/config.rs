//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and layout
//! constants live here so they can be tuned in one place.

// Display

/// Panel resolution (GC9A01 round LCD).
pub const DISPLAY_WIDTH: u16 = 240;
pub const DISPLAY_HEIGHT: u16 = 240;

/// SPI clock for the display (Hz).
pub const DISPLAY_SPI_HZ: u32 = 40_000_000;

// Touch / gestures

/// I²C bus frequency for the CST816S touch controller (kHz).
pub const TOUCH_I2C_KHZ: u32 = 400;

/// Minimum vertical delta (px) for a main-menu swipe.
pub const SWIPE_MAIN_THRESHOLD: i32 = 50;

/// Minimum horizontal delta (px) for a submenu swipe.
pub const SWIPE_SUB_THRESHOLD: i32 = 40;

/// Suppress gesture classification for this long after a swipe fires (ms).
pub const SWIPE_COOLDOWN_MS: u64 = 300;

// Text entry

/// Repeated taps on the same key within this window cycle its candidates (ms).
pub const MULTITAP_WINDOW_MS: u64 = 1000;

/// Capacity of the search text buffer (chars; input beyond this is dropped).
pub const SEARCH_TEXT_CAPACITY: usize = 64;

/// How many trailing characters of the search text fit on screen.
pub const SEARCH_VISIBLE_CHARS: usize = 10;

/// Keyboard grid row bands (y ranges, inclusive), top to bottom.
pub const KEY_ROW_BANDS: [(i32, i32); 4] = [(50, 80), (90, 120), (130, 160), (170, 200)];

/// Keyboard grid column bands (x ranges, inclusive), left to right.
pub const KEY_COL_BANDS: [(i32, i32); 3] = [(20, 80), (90, 150), (160, 220)];

// Tick loop

/// Main loop tick period (ms).
pub const TICK_MS: u64 = 100;

/// Redraw the Time screen every this many ticks (once a second).
pub const CLOCK_REDRAW_TICKS: u32 = 10;

/// Request a weather refresh every this many ticks (10 minutes).
pub const WEATHER_REFRESH_TICKS: u32 = 6000;

/// Request a crypto refresh every this many ticks (5 minutes).
pub const CRYPTO_REFRESH_TICKS: u32 = 3000;

// Data feed

/// Forecast coordinates handed to the weather provider (Mallow, Cork).
pub const WEATHER_LAT: f32 = 52.1333;
pub const WEATHER_LON: f32 = -8.6333;

// GPIO pin assignments (ESP32-C3 round-LCD board defaults)
//
// These are logical names; actual `esp_hal::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your board revision.
//
//   TFT SCK   → GPIO6
//   TFT MOSI  → GPIO7
//   TFT DC    → GPIO2
//   TFT RST   → GPIO3
//   TFT CS    → GPIO10
//   TFT BL    → GPIO1
//   Touch SDA → GPIO4
//   Touch SCL → GPIO5
//   Touch RST → GPIO13
//   Touch INT → GPIO12

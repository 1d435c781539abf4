//! Test-only library interface for tapdial.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.
//! The facade module paths below mirror the binary's module tree, so the
//! shared sources resolve `crate::config`, `crate::input`, ... in both.

#![cfg_attr(not(test), no_std)]

// Internal module paths for the actual implementations
#[path = "config.rs"]
mod config_impl;
#[path = "input/mod.rs"]
mod input_impl;
#[path = "menu.rs"]
mod menu_impl;
#[path = "keypad.rs"]
mod keypad_impl;
#[path = "controller.rs"]
mod controller_impl;
#[path = "data.rs"]
mod data_impl;
#[path = "clock.rs"]
mod clock_impl;
#[path = "feed_logic.rs"]
mod feed_logic_impl;

pub mod config {
    pub use crate::config_impl::*;
}

pub mod input {
    pub use crate::input_impl::*;
}

pub mod menu {
    pub use crate::menu_impl::*;
}

pub mod keypad {
    pub use crate::keypad_impl::*;
}

pub mod controller {
    pub use crate::controller_impl::*;
}

pub mod data {
    pub use crate::data_impl::*;
}

pub mod clock {
    pub use crate::clock_impl::*;
}

pub mod feed_logic {
    pub use crate::feed_logic_impl::*;
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

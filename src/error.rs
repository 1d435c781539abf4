//! Unified error type for tapdial.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Note the deliberate asymmetry at the touch boundary: "no finger on
//! the panel" is `Ok(None)` from the driver, never an error.  Only a
//! failed bus transaction surfaces here, and the tick loop logs it and
//! carries on as if there were no contact.

use defmt::Format;

/// Top-level error type used across the application.
#[derive(Debug, Format)]
pub enum Error {
    // Touch
    /// The CST816S transaction failed.
    Touch(TouchFault),

    // UI / Display
    /// SPI transaction to the display failed, or init did.
    Display,
}

/// Subset of touch faults we propagate (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, Format)]
pub enum TouchFault {
    /// I²C read/write failed.
    Bus,
    /// The controller returned a frame we could not parse.
    Malformed,
}

// Convenience conversions

impl From<TouchFault> for Error {
    fn from(e: TouchFault) -> Self {
        Error::Touch(e)
    }
}

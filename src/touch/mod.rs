//! Touch hardware - CST816S capacitive controller on the I²C bus.
//!
//! The driver is polled once per tick.  Per the input contract, "no
//! finger down" is `Ok(None)`; only a failed or nonsensical bus
//! transaction is an `Err`, which the tick loop logs and treats as no
//! contact.

pub mod cst816s;

pub use cst816s::Cst816s;

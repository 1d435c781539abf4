//! CST816S touch controller driver.
//!
//! Minimal polled driver: one register-window read per tick.  The
//! controller also has gesture/interrupt machinery, but classification
//! happens in `input::swipe` so only raw coordinates are read here.

use embassy_time::{Duration, Timer};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::i2c::I2c;

use crate::error::{Error, TouchFault};
use crate::input::TouchPoint;

/// 7-bit I²C address of the CST816S.
const ADDR: u8 = 0x15;

/// First register of the touch data frame.
const REG_DATA: u8 = 0x00;

/// Frame layout: gesture, reserved, point count, XH, XL, YH, YL.
const FRAME_LEN: usize = 7;

/// The controller reports at most this many contacts; anything larger
/// is a corrupt frame.
const MAX_POINTS: u8 = 5;

pub struct Cst816s<I2C, RST> {
    i2c: I2C,
    rst: RST,
}

impl<I2C, RST> Cst816s<I2C, RST>
where
    I2C: I2c,
    RST: OutputPin,
{
    pub fn new(i2c: I2C, rst: RST) -> Self {
        Self { i2c, rst }
    }

    /// Strobe the reset line and give the controller time to boot.
    pub async fn init(&mut self) {
        let _ = self.rst.set_low();
        Timer::after(Duration::from_millis(10)).await;
        let _ = self.rst.set_high();
        Timer::after(Duration::from_millis(50)).await;
    }

    /// Read the current contact, if any.
    pub async fn read(&mut self) -> Result<Option<TouchPoint>, Error> {
        let mut frame = [0u8; FRAME_LEN];
        self.i2c
            .write_read(ADDR, &[REG_DATA], &mut frame)
            .await
            .map_err(|_| TouchFault::Bus)?;

        let points = frame[2] & 0x0F;
        if points == 0 {
            return Ok(None);
        }
        if points > MAX_POINTS {
            return Err(TouchFault::Malformed.into());
        }

        // 12-bit coordinates, high nibble + low byte.
        let x = (((frame[3] & 0x0F) as i32) << 8) | frame[4] as i32;
        let y = (((frame[5] & 0x0F) as i32) << 8) | frame[6] as i32;
        Ok(Some(TouchPoint { x, y }))
    }
}

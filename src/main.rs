//! tapdial - embedded entry point.
//!
//! Single cooperative tick loop (100 ms): poll the touch controller,
//! route the sample through the input controller, drain the data-feed
//! channels, and redraw when anything visible changed.  All UI state
//! lives on this task; nothing here blocks longer than one tick.

#![no_std]
#![no_main]

mod clock;
mod config;
mod controller;
mod data;
mod error;
mod feed;
mod feed_logic;
mod input;
mod keypad;
mod menu;
mod touch;
mod ui;

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Ticker, Timer};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::spi::Mode;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;

use crate::clock::DateTime;
use crate::controller::UiController;
use crate::data::{CryptoQuotes, FeedStatus, WeatherReport};
use crate::feed::{FeedEvent, FeedRequest, FEED_EVENTS, FEED_REQUESTS};
use crate::menu::Screen;
use crate::touch::Cst816s;

#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    info!("tapdial starting");

    // Display: GC9A01 over SPI2.
    let spi = match Spi::new(
        peripherals.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_hz(config::DISPLAY_SPI_HZ))
            .with_mode(Mode::_0),
    ) {
        Ok(spi) => spi.with_sck(peripherals.GPIO6).with_mosi(peripherals.GPIO7),
        Err(_) => halt("SPI init failed").await,
    };

    let dc = Output::new(peripherals.GPIO2, Level::Low, OutputConfig::default());
    let lcd_rst = Output::new(peripherals.GPIO3, Level::High, OutputConfig::default());
    let cs = Output::new(peripherals.GPIO10, Level::High, OutputConfig::default());
    let mut backlight = Output::new(peripherals.GPIO1, Level::Low, OutputConfig::default());

    let spi_device = match ExclusiveDevice::new(spi, cs, Delay::new()) {
        Ok(device) => device,
        Err(_) => halt("SPI device setup failed").await,
    };

    let mut delay = Delay::new();
    let mut display = match ui::display::init(spi_device, dc, lcd_rst, &mut delay) {
        Ok(display) => display,
        Err(_) => halt("display init failed").await,
    };
    let _ = display.clear(Rgb565::BLACK);
    backlight.set_high();

    // Touch: CST816S on I2C0.
    let i2c = match I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(config::TOUCH_I2C_KHZ)),
    ) {
        Ok(i2c) => i2c
            .with_sda(peripherals.GPIO4)
            .with_scl(peripherals.GPIO5)
            .into_async(),
        Err(_) => halt("I2C init failed").await,
    };
    let touch_rst = Output::new(peripherals.GPIO13, Level::High, OutputConfig::default());
    let mut touch = Cst816s::new(i2c, touch_rst);
    touch.init().await;

    // Kick the provider once; afterwards the tick cadence drives it.
    let _ = FEED_REQUESTS.try_send(FeedRequest::RefreshWeather);
    let _ = FEED_REQUESTS.try_send(FeedRequest::RefreshCrypto);

    let mut controller = UiController::new();
    let mut weather: FeedStatus<WeatherReport> = FeedStatus::Pending;
    let mut crypto: FeedStatus<CryptoQuotes> = FeedStatus::Pending;

    // Wall clock = synced unix base + uptime since the sync.
    let mut clock_base: u64 = 0;
    let mut synced_at = Instant::now();

    let mut tick: u32 = 0;
    let mut last_drawn: Option<(u8, u8)> = None;
    let mut ticker = Ticker::every(Duration::from_millis(config::TICK_MS));

    info!("entering tick loop");

    loop {
        let sample = match touch.read().await {
            Ok(sample) => sample,
            Err(e) => {
                // A flaky bus is not fatal; treat it as no contact.
                warn!("touch read failed: {}", e);
                None
            }
        };

        let mut redraw = controller.tick(sample, Instant::now().as_millis());

        while let Ok(event) = FEED_EVENTS.try_receive() {
            match event {
                FeedEvent::Weather(report) => weather = FeedStatus::Ready(report),
                FeedEvent::WeatherFailed => weather = FeedStatus::Failed,
                FeedEvent::Crypto(quotes) => crypto = FeedStatus::Ready(quotes),
                FeedEvent::CryptoFailed => crypto = FeedStatus::Failed,
                FeedEvent::ClockSync(secs) => {
                    info!("clock synced: {}", secs);
                    clock_base = secs;
                    synced_at = Instant::now();
                }
            }
        }

        if feed_logic::refresh_due(tick, config::WEATHER_REFRESH_TICKS) {
            let _ = FEED_REQUESTS.try_send(FeedRequest::RefreshWeather);
        }
        if feed_logic::refresh_due(tick, config::CRYPTO_REFRESH_TICKS) {
            let _ = FEED_REQUESTS.try_send(FeedRequest::RefreshCrypto);
        }

        // Redraw policy: any menu move clears the panel; the Time screen
        // also refreshes once a second.
        let position = (controller.menu().main(), controller.menu().sub());
        if last_drawn != Some(position) {
            redraw = true;
        }
        if controller.menu().screen() == Screen::Time && tick % config::CLOCK_REDRAW_TICKS == 0 {
            redraw = true;
        }

        if redraw {
            let now = DateTime::from_unix(clock_base + synced_at.elapsed().as_secs());
            let _ = display.clear(Rgb565::BLACK);
            ui::screens::render(&mut display, &controller, &weather, &crypto, &now);
            last_drawn = Some(position);
        }

        tick = tick.wrapping_add(1);
        ticker.next().await;
    }
}

/// Log and park - bring-up failed, nothing sensible left to do.
async fn halt(msg: &str) -> ! {
    error!("{}", msg);
    loop {
        Timer::after(Duration::from_secs(1)).await;
    }
}

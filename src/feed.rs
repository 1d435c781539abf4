//! Data-feed boundary - weather, crypto, and clock sync.
//!
//! The UI owns no network code.  A companion provider (Wi-Fi/HTTP/NTP,
//! out of tree) listens on [`FEED_REQUESTS`] and publishes snapshots on
//! [`FEED_EVENTS`]; the tick loop fires requests on the configured
//! cadence and drains events between input polls.  If no provider is
//! running the screens simply keep their "Loading..." placeholders.

use defmt::Format;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::data::{CryptoQuotes, WeatherReport};

/// Commands the UI sends to the data provider.
#[derive(Clone, Copy, Format)]
pub enum FeedRequest {
    /// Fetch current weather for the configured coordinates.
    RefreshWeather,
    /// Fetch spot prices.
    RefreshCrypto,
}

/// Snapshots the provider publishes for the UI.
#[derive(Clone, Copy, Format)]
pub enum FeedEvent {
    Weather(WeatherReport),
    /// Weather fetch failed; show the error placeholders.
    WeatherFailed,
    Crypto(CryptoQuotes),
    /// Crypto fetch failed.
    CryptoFailed,
    /// Wall clock sync (seconds since the unix epoch).
    ClockSync(u64),
}

/// UI → provider.
pub static FEED_REQUESTS: Channel<CriticalSectionRawMutex, FeedRequest, 4> = Channel::new();

/// Provider → UI.
pub static FEED_EVENTS: Channel<CriticalSectionRawMutex, FeedEvent, 4> = Channel::new();

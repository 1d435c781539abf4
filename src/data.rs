//! Data model for the feed-driven screens (weather, crypto).
//!
//! The network side lives out of tree; this module only defines the
//! snapshot types the renderer consumes, the WMO weather-code mapping,
//! and the display formatting helpers.  No `alloc` - all strings are
//! fixed-capacity.

use core::fmt::Write;

use heapless::String;

/// Lifecycle of a feed-provided snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedStatus<T> {
    /// Nothing received yet - screens show "Loading...".
    #[default]
    Pending,
    Ready(T),
    /// The last fetch failed - screens show "N/A" / "Err".
    Failed,
}

/// Current-conditions snapshot from the weather provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherReport {
    pub temp_c: i16,
    pub wind_kmh: i16,
    pub humidity_pct: u8,
    /// WMO weather interpretation code.
    pub code: u16,
}

/// Spot prices in EUR.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CryptoQuotes {
    pub btc_eur: f64,
    pub eth_eur: f64,
    pub ltc_eur: f64,
}

/// Human-readable description for a WMO weather code.
pub fn describe_wmo(code: u16) -> &'static str {
    match code {
        0 => "Clear",
        1 => "Mostly Clear",
        2 => "Partly Cloudy",
        3 => "Cloudy",
        45 | 48 => "Foggy",
        51 | 61 => "Light Rain",
        53 | 63 => "Rain",
        55 | 65 => "Heavy Rain",
        71 => "Light Snow",
        73 => "Snow",
        75 => "Heavy Snow",
        80 | 81 => "Showers",
        82 => "Heavy Showers",
        95 => "Thunderstorm",
        _ => "Unknown",
    }
}

/// Icon class drawn on the Weather-Now screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeatherIcon {
    Sun,
    SunBehindCloud,
    Cloud,
    Rain,
    Snow,
    Storm,
}

/// Icon for a WMO code; codes without artwork draw nothing.
pub fn icon_for(code: u16) -> Option<WeatherIcon> {
    match code {
        0 | 1 => Some(WeatherIcon::Sun),
        2 => Some(WeatherIcon::SunBehindCloud),
        3 | 45 | 48 => Some(WeatherIcon::Cloud),
        51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => Some(WeatherIcon::Rain),
        71 | 73 | 75 => Some(WeatherIcon::Snow),
        95 | 96 | 99 => Some(WeatherIcon::Storm),
        _ => None,
    }
}

/// `"12C"` / `"-3C"`.
pub fn format_temp(temp_c: i16) -> String<8> {
    let mut s = String::new();
    let _ = write!(s, "{}C", temp_c);
    s
}

/// `"14km/h"`.
pub fn format_wind(wind_kmh: i16) -> String<12> {
    let mut s = String::new();
    let _ = write!(s, "{}km/h", wind_kmh);
    s
}

/// `"78%"`.
pub fn format_humidity(humidity_pct: u8) -> String<8> {
    let mut s = String::new();
    let _ = write!(s, "{}%", humidity_pct);
    s
}

/// `"€64123.50"` - euro sign plus cents.
pub fn format_price_eur(price: f64) -> String<16> {
    let mut s = String::new();
    let _ = write!(s, "€{:.2}", price);
    s
}

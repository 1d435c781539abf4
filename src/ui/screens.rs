//! Screen rendering - one function per view, geometry tuned for the
//! 240×240 round panel (content stays inside the circle).

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::clock::DateTime;
use crate::config::{KEY_COL_BANDS, KEY_ROW_BANDS, SEARCH_VISIBLE_CHARS};
use crate::controller::UiController;
use crate::data::{
    describe_wmo, format_humidity, format_price_eur, format_temp, format_wind, icon_for,
    CryptoQuotes, FeedStatus, WeatherIcon, WeatherReport,
};
use crate::keypad::{clusters, KeyboardMode, CELL_BACKSPACE, CELL_MODE, CELL_SUBMIT};
use crate::menu::Screen;
use crate::ui::display::{text_style, BLUE, DARK_BLUE, GREY};

const CENTER_X: i32 = 120;

/// Key button footprint inside its band.
const KEY_W: u32 = 60;
const KEY_H: u32 = 30;

/// Draw the screen selected by the current menu position.
pub fn render<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    controller: &UiController,
    weather: &FeedStatus<WeatherReport>,
    crypto: &FeedStatus<CryptoQuotes>,
    now: &DateTime,
) {
    match controller.menu().screen() {
        Screen::Time => draw_time(display, now),
        Screen::WeatherNow => draw_weather_now(display, weather),
        Screen::WeatherDetails => draw_weather_details(display, weather),
        Screen::Crypto => draw_crypto(display, crypto),
        Screen::Search => draw_search(
            display,
            controller.editor().tail(SEARCH_VISIBLE_CHARS),
            controller.editor().mode(),
        ),
        Screen::Settings => draw_settings(display),
    }
}

/// Render the Time screen.
pub fn draw_time<D: DrawTarget<Color = Rgb565>>(display: &mut D, now: &DateTime) {
    center(display, "TIME", 50, GREY);
    center(display, now.format_date().as_str(), 95, GREY);
    center(display, now.format_time().as_str(), 135, Rgb565::WHITE);

    center(display, "v", 200, BLUE);
}

/// Render the current-conditions weather screen.
pub fn draw_weather_now<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    weather: &FeedStatus<WeatherReport>,
) {
    center(display, "WEATHER", 30, GREY);

    match weather {
        FeedStatus::Ready(report) => {
            if let Some(icon) = icon_for(report.code) {
                draw_weather_icon(display, icon, Point::new(120, 90));
            }
            center(display, describe_wmo(report.code), 130, BLUE);
            center(display, format_temp(report.temp_c).as_str(), 165, Rgb565::YELLOW);
        }
        FeedStatus::Pending => center(display, "Loading...", 130, BLUE),
        FeedStatus::Failed => {
            center(display, "Error", 130, BLUE);
            center(display, "N/A", 165, Rgb565::YELLOW);
        }
    }

    center(display, "^", 10, BLUE);
    center(display, "v", 210, BLUE);
    at(display, "->", 200, 120, Rgb565::GREEN);
}

/// Render the weather details submenu.
pub fn draw_weather_details<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    weather: &FeedStatus<WeatherReport>,
) {
    center(display, "DETAILS", 30, GREY);

    at(display, "Temp", 30, 75, GREY);
    at(display, "Wind", 30, 110, GREY);
    at(display, "Humidity", 30, 145, GREY);

    match weather {
        FeedStatus::Ready(report) => {
            at(display, format_temp(report.temp_c).as_str(), 150, 75, Rgb565::YELLOW);
            at(display, format_wind(report.wind_kmh).as_str(), 150, 110, Rgb565::GREEN);
            at(display, format_humidity(report.humidity_pct).as_str(), 150, 145, BLUE);
        }
        _ => {
            at(display, "N/A", 150, 75, Rgb565::YELLOW);
            at(display, "N/A", 150, 110, Rgb565::GREEN);
            at(display, "N/A", 150, 145, BLUE);
        }
    }

    center(display, "^", 10, BLUE);
    center(display, "v", 210, BLUE);
    at(display, "<-", 10, 120, Rgb565::GREEN);
}

/// Render the crypto spot-price screen.
pub fn draw_crypto<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    crypto: &FeedStatus<CryptoQuotes>,
) {
    center(display, "CRYPTO", 30, Rgb565::WHITE);

    at(display, "BTC", 20, 75, Rgb565::YELLOW);
    at(display, "ETH", 20, 120, BLUE);
    at(display, "LTC", 20, 165, GREY);

    match crypto {
        FeedStatus::Ready(quotes) => {
            at(display, format_price_eur(quotes.btc_eur).as_str(), 100, 75, Rgb565::YELLOW);
            at(display, format_price_eur(quotes.eth_eur).as_str(), 100, 120, BLUE);
            at(display, format_price_eur(quotes.ltc_eur).as_str(), 100, 165, GREY);
        }
        FeedStatus::Pending => {
            at(display, "Loading", 100, 75, Rgb565::YELLOW);
            at(display, "Loading", 100, 120, BLUE);
            at(display, "Loading", 100, 165, GREY);
        }
        FeedStatus::Failed => {
            at(display, "Err", 100, 75, Rgb565::YELLOW);
            at(display, "Err", 100, 120, BLUE);
            at(display, "Err", 100, 165, GREY);
        }
    }

    center(display, "^", 10, BLUE);
    center(display, "v", 210, BLUE);
}

/// Render the search screen: text field plus the multitap key grid.
pub fn draw_search<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    text: &str,
    mode: KeyboardMode,
) {
    center(display, "SEARCH", 10, Rgb565::WHITE);
    at(display, text, 20, 30, Rgb565::YELLOW);
    line(display, 20, 45, 220, 45, GREY);

    let cluster_labels = clusters(mode);

    for row in 0..KEY_ROW_BANDS.len() {
        for col in 0..KEY_COL_BANDS.len() {
            let idx = row * KEY_COL_BANDS.len() + col;
            let x = KEY_COL_BANDS[col].0;
            let y = KEY_ROW_BANDS[row].0;

            match idx {
                CELL_BACKSPACE => key_button(display, x, y, "DEL", Rgb565::RED),
                CELL_MODE => key_button(display, x, y, mode.label(), BLUE),
                CELL_SUBMIT => key_button(display, x, y, "GO", Rgb565::GREEN),
                _ => {
                    if let Some(&label) = cluster_labels.get(idx) {
                        outline(display, x, y, KEY_W, KEY_H, GREY);
                        let shown = &label[..label.len().min(4)];
                        at(display, shown, x + 5, y + 5, Rgb565::WHITE);
                    }
                }
            }
        }
    }

    center(display, "^", 5, BLUE);
    center(display, "v", 220, BLUE);
}

/// Render the (empty) settings screen.
pub fn draw_settings<D: DrawTarget<Color = Rgb565>>(display: &mut D) {
    center(display, "SETTINGS", 80, Rgb565::WHITE);
    center(display, "(empty)", 120, GREY);
    center(display, "^", 10, BLUE);
}

/// Weather icon built from primitives, centered on `c`.
fn draw_weather_icon<D: DrawTarget<Color = Rgb565>>(display: &mut D, icon: WeatherIcon, c: Point) {
    let (x, y) = (c.x, c.y);
    match icon {
        WeatherIcon::Sun => {
            fill(display, x - 8, y - 8, 16, 16, Rgb565::YELLOW);
            // Rays, cardinal then diagonal.
            line(display, x, y - 18, x, y - 12, Rgb565::YELLOW);
            line(display, x, y + 12, x, y + 18, Rgb565::YELLOW);
            line(display, x - 18, y, x - 12, y, Rgb565::YELLOW);
            line(display, x + 12, y, x + 18, y, Rgb565::YELLOW);
            line(display, x - 13, y - 13, x - 9, y - 9, Rgb565::YELLOW);
            line(display, x + 9, y - 9, x + 13, y - 13, Rgb565::YELLOW);
            line(display, x - 13, y + 9, x - 9, y + 13, Rgb565::YELLOW);
            line(display, x + 9, y + 9, x + 13, y + 13, Rgb565::YELLOW);
        }
        WeatherIcon::SunBehindCloud => {
            fill(display, x - 18, y - 10, 10, 10, Rgb565::YELLOW);
            fill(display, x - 5, y, 20, 10, GREY);
            fill(display, x, y - 5, 15, 10, GREY);
        }
        WeatherIcon::Cloud => {
            fill(display, x - 15, y, 20, 10, GREY);
            fill(display, x - 5, y - 5, 15, 10, GREY);
            fill(display, x + 5, y, 15, 10, GREY);
        }
        WeatherIcon::Rain => {
            fill(display, x - 15, y - 10, 20, 10, GREY);
            fill(display, x - 5, y - 15, 15, 10, GREY);
            line(display, x - 10, y + 3, x - 10, y + 10, BLUE);
            line(display, x - 3, y + 5, x - 3, y + 12, BLUE);
            line(display, x + 4, y + 3, x + 4, y + 10, BLUE);
            line(display, x + 11, y + 5, x + 11, y + 12, BLUE);
        }
        WeatherIcon::Snow => {
            fill(display, x - 15, y - 10, 20, 10, GREY);
            fill(display, x - 5, y - 15, 15, 10, GREY);
            for sx in [-10, -2, 6] {
                flake(display, x + sx, y + 6);
            }
        }
        WeatherIcon::Storm => {
            fill(display, x - 15, y - 10, 20, 10, DARK_BLUE);
            fill(display, x - 5, y - 15, 15, 10, DARK_BLUE);
            // Bolt.
            line(display, x, y, x - 3, y + 6, Rgb565::YELLOW);
            line(display, x - 3, y + 6, x + 2, y + 6, Rgb565::YELLOW);
            line(display, x + 2, y + 6, x - 1, y + 12, Rgb565::YELLOW);
        }
    }
}

/// One snowflake: a five-pixel plus sign.
fn flake<D: DrawTarget<Color = Rgb565>>(display: &mut D, x: i32, y: i32) {
    let _ = display.draw_iter([
        Pixel(Point::new(x, y), Rgb565::WHITE),
        Pixel(Point::new(x - 1, y), Rgb565::WHITE),
        Pixel(Point::new(x + 1, y), Rgb565::WHITE),
        Pixel(Point::new(x, y - 1), Rgb565::WHITE),
        Pixel(Point::new(x, y + 1), Rgb565::WHITE),
    ]);
}

fn key_button<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    x: i32,
    y: i32,
    label: &str,
    color: Rgb565,
) {
    outline(display, x, y, KEY_W, KEY_H, color);
    at(display, label, x + 10, y + 5, color);
}

// Drawing helpers - all errors are swallowed; a failed SPI write just
// leaves stale pixels until the next redraw.

fn center<D: DrawTarget<Color = Rgb565>>(display: &mut D, text: &str, y: i32, color: Rgb565) {
    let style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    let _ = Text::with_text_style(text, Point::new(CENTER_X, y), text_style(color), style)
        .draw(display);
}

fn at<D: DrawTarget<Color = Rgb565>>(display: &mut D, text: &str, x: i32, y: i32, color: Rgb565) {
    let style = TextStyleBuilder::new().baseline(Baseline::Top).build();
    let _ =
        Text::with_text_style(text, Point::new(x, y), text_style(color), style).draw(display);
}

fn fill<D: DrawTarget<Color = Rgb565>>(display: &mut D, x: i32, y: i32, w: u32, h: u32, color: Rgb565) {
    let _ = Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display);
}

fn outline<D: DrawTarget<Color = Rgb565>>(display: &mut D, x: i32, y: i32, w: u32, h: u32, color: Rgb565) {
    let _ = Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display);
}

fn line<D: DrawTarget<Color = Rgb565>>(display: &mut D, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb565) {
    let _ = Line::new(Point::new(x0, y0), Point::new(x1, y1))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display);
}

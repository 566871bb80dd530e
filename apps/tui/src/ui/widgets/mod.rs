pub mod fields;
pub mod popup;
pub mod radar;
pub mod stats;

use ratatui::style::Color;
use statradar_core::SeriesColor;

/// Terminal colour for a chart colour.
pub const fn series_color(color: SeriesColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

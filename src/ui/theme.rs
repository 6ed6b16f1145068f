//! Colors and styles shared by the dashboard tabs.

use crate::domain::model::Sentiment;
use palette::{LinSrgb, Srgb};
use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Cyan;
pub const MAP_LAND: Color = Color::DarkGray;
pub const MAP_POINT: Color = Color::LightCyan;

pub fn sentiment_color(sentiment: Sentiment) -> Color {
    use Sentiment::*;

    match sentiment {
        Positive => Color::Green,
        Neutral => Color::Yellow,
        Negative => Color::Red,
    }
}

pub fn sentiment_color_by_label(label: &str) -> Color {
    match label {
        "positive" => Color::Green,
        "negative" => Color::Red,
        _ => Color::Yellow,
    }
}

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Continuous count -> color ramp, standing in for the continuous scale the
/// original charts colored their bars with. Interpolated in linear light,
/// then gamma-encoded for the terminal.
pub fn count_ramp(value: u64, max: u64) -> Color {
    let t = if max == 0 {
        0.0
    } else {
        (value as f32 / max as f32).clamp(0.0, 1.0)
    };
    let low = LinSrgb::new(0.05f32, 0.25, 0.55);
    let high = LinSrgb::new(0.85f32, 0.30, 0.15);
    let mixed = LinSrgb::new(
        lerp(low.red, high.red, t),
        lerp(low.green, high.green, t),
        lerp(low.blue, high.blue, t),
    );
    let (r, g, b) = Srgb::from_linear(mixed).into_format::<u8>().into_components();
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints_are_distinct_and_defined_for_zero_max() {
        let cold = count_ramp(0, 100);
        let hot = count_ramp(100, 100);
        assert_ne!(cold, hot);
        assert_eq!(count_ramp(5, 0), cold);
    }
}

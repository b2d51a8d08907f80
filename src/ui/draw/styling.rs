//! Styling utilities and color schemes
//!
//! This module contains color helpers and style constants used throughout the UI.

use ratatui::style::Color;

/// Get the color for a tsunami risk level
pub fn risk_color(risk: &str) -> Color {
    match risk {
        "High" => Color::Red,
        "Moderate" => Color::Yellow,
        "Low" => Color::Green,
        _ => Color::White,
    }
}

/// Get the color for a US EPA air quality index (1 = best, 6 = worst)
pub fn aqi_color(aqi_us: f64) -> Color {
    match aqi_us as i64 {
        1 => Color::Green,
        2 => Color::Yellow,
        3 => Color::LightRed,
        _ => Color::Red,
    }
}

/// Spinner frames shared by the loading views
pub const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Scroll lines per j/k press
#[allow(dead_code)]
pub const SCROLL_LINES_PER_ACTION: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_colors() {
        assert_eq!(risk_color("High"), Color::Red);
        assert_eq!(risk_color("Moderate"), Color::Yellow);
        assert_eq!(risk_color("Low"), Color::Green);
        assert_eq!(risk_color("Unknown"), Color::White);
    }
}

//! Per-tab renderers
//!
//! One pure function per tab, from payload to a list of lines. Each renderer
//! tolerates any absent field by omitting the corresponding element; the
//! service has already done all substantive computation, so nothing here goes
//! beyond string interpolation and coordinate rounding.

use super::styling::{aqi_color, risk_color};
use crate::state::AudioSlot;
use crate::types::{
    BlogReport, CurrentConditions, Earthquake, PodcastReport, TsunamiReport, TwitterReport,
    WeatherReport,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Format seismic coordinates with hemisphere letters, rounded to two
/// decimal places: `(13.456, 92.123)` becomes `"13.46°N, 92.12°E"`.
pub fn format_coordinates(lat: f64, lon: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.2}°{}, {:.2}°{}", lat.abs(), ns, lon.abs(), ew)
}

fn header_line(text: String) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn label_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
        Span::raw(value),
    ])
}

pub fn blog_lines(report: &BlogReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let title = match &report.city {
        Some(city) => format!("Weather Blog - {city}"),
        None => "Weather Blog".to_string(),
    };
    lines.push(header_line(title));
    lines.push(Line::from(""));

    if let Some(blog) = &report.blog {
        for paragraph in blog.lines() {
            lines.push(Line::from(paragraph.to_string()));
        }
        lines.push(Line::from(""));
    }

    if let Some(image_url) = &report.image_url {
        lines.push(label_line("Image", format!("{image_url}  [i] open")));
    }

    if let Some(pdf_url) = &report.pdf_url {
        lines.push(label_line("PDF", format!("{pdf_url}  [o] open")));
    }

    if let Some(timestamp) = &report.timestamp {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Generated {timestamp}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

fn conditions_lines(current: &CurrentConditions) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(temp) = current.temp_c {
        let value = match current.feels_like_c {
            Some(feels) => format!("{temp:.1}°C (feels like {feels:.1}°C)"),
            None => format!("{temp:.1}°C"),
        };
        lines.push(label_line("Temperature", value));
    }

    if let Some(condition) = &current.condition {
        lines.push(label_line("Condition", condition.clone()));
    }

    if let Some(humidity) = current.humidity {
        lines.push(label_line("Humidity", format!("{humidity:.0}%")));
    }

    if let Some(wind) = current.wind_kph {
        lines.push(label_line("Wind", format!("{wind:.1} kph")));
    }

    if let Some(uv) = current.uv {
        lines.push(label_line("UV Index", format!("{uv:.1}")));
    }

    if let Some(aqi) = current.aqi_us {
        lines.push(Line::from(vec![
            Span::styled("AQI (US EPA): ", Style::default().fg(Color::Cyan)),
            Span::styled(format!("{aqi:.0}"), Style::default().fg(aqi_color(aqi))),
        ]));
    }

    if let (Some(pm2_5), Some(pm10)) = (current.pm2_5, current.pm10) {
        lines.push(label_line("PM2.5 / PM10", format!("{pm2_5:.1} / {pm10:.1}")));
    }

    if let Some(local_time) = &current.local_time {
        lines.push(label_line("Local time", local_time.clone()));
    }

    lines
}

pub fn weather_lines(report: &WeatherReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let title = match &report.city {
        Some(city) => format!("Current Weather - {city}"),
        None => "Current Weather".to_string(),
    };
    lines.push(header_line(title));
    lines.push(Line::from(""));

    if let Some(current) = &report.current {
        lines.extend(conditions_lines(current));
    }

    if !report.monthly_history.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Monthly History",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));

        for day in &report.monthly_history {
            let date = day.date.clone().unwrap_or_else(|| "—".to_string());
            let temp = day
                .avg_temp_c
                .map(|t| format!("{t:.1}°C"))
                .unwrap_or_else(|| "—".to_string());
            let condition = day.condition.clone().unwrap_or_default();
            lines.push(Line::from(format!("  {date}  {temp:>8}  {condition}")));
        }
    }

    lines
}

fn earthquake_card(quake: &Earthquake) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let place = quake.place.clone().unwrap_or_else(|| "Unknown location".to_string());
    lines.push(Line::from(Span::styled(
        place,
        Style::default().add_modifier(Modifier::BOLD),
    )));

    if let Some(magnitude) = quake.magnitude {
        lines.push(Line::from(format!("  Magnitude: {magnitude}")));
    }

    if let Some(depth) = quake.depth_km {
        lines.push(Line::from(format!("  Depth: {depth} km")));
    }

    if let Some(risk) = &quake.risk {
        lines.push(Line::from(vec![
            Span::raw("  Risk: "),
            Span::styled(
                risk.clone(),
                Style::default()
                    .fg(risk_color(risk))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    if let Some(coords) = &quake.coordinates {
        lines.push(Line::from(format!(
            "  Location: {}",
            format_coordinates(coords.lat, coords.lon)
        )));
    }

    lines
}

pub fn tsunami_lines(report: &TsunamiReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(header_line("Indian Tsunami Alerts".to_string()));

    if let Some(hours) = report.hours_checked {
        lines.push(Line::from(Span::styled(
            format!("Checked the last {hours} hours"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    if report.earthquakes.is_empty() {
        lines.push(Line::from(Span::styled(
            "No Significant Activity",
            Style::default().fg(Color::Green),
        )));
        return lines;
    }

    for quake in &report.earthquakes {
        lines.extend(earthquake_card(quake));
        lines.push(Line::from(""));
    }

    if let Some(total) = report.total_found {
        lines.push(Line::from(Span::styled(
            format!("{total} event(s) found in window"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

pub fn podcast_lines(report: &PodcastReport, audio: &AudioSlot) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let title = match &report.city {
        Some(city) => format!("Climate Podcast - {city}"),
        None => "Climate Podcast".to_string(),
    };
    lines.push(header_line(title));
    lines.push(Line::from(""));

    if let Some(script) = &report.script {
        for paragraph in script.lines() {
            lines.push(Line::from(paragraph.to_string()));
        }
        lines.push(Line::from(""));
    }

    if let Some(weather) = &report.weather {
        lines.push(Line::from(Span::styled(
            "Conditions",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(conditions_lines(weather));
        lines.push(Line::from(""));
    }

    if audio.loading {
        lines.push(Line::from(Span::styled(
            "Generating audio...",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(audio_url) = &audio.audio_url {
        lines.push(label_line("Audio", format!("{audio_url}  [o] open")));
    } else if let Some(error) = &audio.error {
        lines.push(Line::from(Span::styled(
            format!("Audio error: {error}"),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(note) = &report.note {
        lines.push(Line::from(Span::styled(
            format!("{note}  [a] request audio"),
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "[a] request audio",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

pub fn twitter_lines(report: &TwitterReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let title = match &report.city {
        Some(city) => format!("Weather Tweet - {city}"),
        None => "Weather Tweet".to_string(),
    };
    lines.push(header_line(title));
    lines.push(Line::from(""));

    if let Some(tweet_text) = &report.tweet_text {
        for paragraph in tweet_text.lines() {
            lines.push(Line::from(paragraph.to_string()));
        }
        lines.push(Line::from(""));
    }

    if let Some(status) = &report.status {
        let color = if status == "success" {
            Color::Green
        } else {
            Color::Yellow
        };
        lines.push(Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Cyan)),
            Span::styled(status.clone(), Style::default().fg(color)),
        ]));
    }

    if let Some(tweet_url) = &report.tweet_url {
        lines.push(label_line("Tweet", format!("{tweet_url}  [o] open")));
    }

    if let Some(weather) = &report.weather {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Conditions",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(conditions_lines(weather));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinates;

    fn lines_to_text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_format_coordinates_rounding() {
        assert_eq!(format_coordinates(13.456, 92.123), "13.46°N, 92.12°E");
    }

    #[test]
    fn test_format_coordinates_hemispheres() {
        assert_eq!(format_coordinates(-33.868, 151.209), "33.87°S, 151.21°E");
        assert_eq!(format_coordinates(40.713, -74.006), "40.71°N, 74.01°W");
    }

    #[test]
    fn test_tsunami_empty_shows_no_activity() {
        let report = TsunamiReport {
            hours_checked: Some(24),
            earthquakes: vec![],
            ..Default::default()
        };
        let text = lines_to_text(&tsunami_lines(&report));
        assert!(text.contains("No Significant Activity"));
        assert!(text.contains("last 24 hours"));
        assert!(!text.contains("Magnitude"));
    }

    #[test]
    fn test_tsunami_card_fields() {
        let report = TsunamiReport {
            hours_checked: Some(24),
            earthquakes: vec![Earthquake {
                place: Some("Bay of Bengal".to_string()),
                magnitude: Some(6.8),
                depth_km: Some(12.0),
                risk: Some("High".to_string()),
                coordinates: Some(Coordinates {
                    lat: 13.456,
                    lon: 92.123,
                }),
            }],
            ..Default::default()
        };
        let text = lines_to_text(&tsunami_lines(&report));
        assert!(text.contains("Bay of Bengal"));
        assert!(text.contains("Risk: High"));
        assert!(text.contains("Location: 13.46°N, 92.12°E"));
        assert!(!text.contains("No Significant Activity"));
    }

    #[test]
    fn test_blog_without_pdf_omits_pdf_element() {
        let report = BlogReport {
            city: Some("Chennai".to_string()),
            blog: Some("text".to_string()),
            image_url: Some("/img/1.png".to_string()),
            pdf_url: None,
            timestamp: None,
        };
        let text = lines_to_text(&blog_lines(&report));
        assert!(text.contains("Weather Blog - Chennai"));
        assert!(text.contains("Image: /img/1.png"));
        assert!(!text.contains("PDF"));
    }

    #[test]
    fn test_weather_omits_absent_fields() {
        let report = WeatherReport {
            city: Some("Delhi".to_string()),
            current: Some(CurrentConditions {
                temp_c: Some(31.5),
                condition: Some("Mist".to_string()),
                ..Default::default()
            }),
            monthly_history: vec![],
            timestamp: None,
        };
        let text = lines_to_text(&weather_lines(&report));
        assert!(text.contains("Temperature: 31.5°C"));
        assert!(text.contains("Condition: Mist"));
        assert!(!text.contains("Humidity"));
        assert!(!text.contains("Monthly History"));
    }

    #[test]
    fn test_podcast_audio_states() {
        let report = PodcastReport {
            city: Some("Kolkata".to_string()),
            script: Some("Good morning.".to_string()),
            ..Default::default()
        };

        let idle = AudioSlot::default();
        let text = lines_to_text(&podcast_lines(&report, &idle));
        assert!(text.contains("[a] request audio"));

        let ready = AudioSlot {
            audio_url: Some("/static/podcast.mp3".to_string()),
            ..Default::default()
        };
        let text = lines_to_text(&podcast_lines(&report, &ready));
        assert!(text.contains("Audio: /static/podcast.mp3"));
    }

    #[test]
    fn test_twitter_renders_status_and_url() {
        let report = TwitterReport {
            city: Some("Mumbai".to_string()),
            tweet_text: Some("Humid evening in Mumbai".to_string()),
            status: Some("success".to_string()),
            tweet_url: Some("https://twitter.com/u/status/1".to_string()),
            ..Default::default()
        };
        let text = lines_to_text(&twitter_lines(&report));
        assert!(text.contains("Humid evening in Mumbai"));
        assert!(text.contains("Status: success"));
        assert!(text.contains("https://twitter.com/u/status/1"));
    }
}

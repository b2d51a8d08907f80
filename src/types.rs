use serde::Deserialize;

/// The five display tabs. Each tab is bound to exactly one API path and one
/// renderer; the set is closed and defined at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Blog,
    Weather,
    Tsunami,
    Podcast,
    Twitter,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Blog,
        Tab::Weather,
        Tab::Tsunami,
        Tab::Podcast,
        Tab::Twitter,
    ];

    /// Fixed relative API path for this tab. Exhaustive over the closed set,
    /// so a new tab variant fails to compile until it gets a path.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Tab::Blog => "/api/weather_blog",
            Tab::Weather => "/api/weather",
            Tab::Tsunami => "/api/tsunami",
            Tab::Podcast => "/api/podcast",
            Tab::Twitter => "/api/twitter",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Blog => "Blog",
            Tab::Weather => "Weather",
            Tab::Tsunami => "Tsunami",
            Tab::Podcast => "Podcast",
            Tab::Twitter => "Twitter",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Blog => 0,
            Tab::Weather => 1,
            Tab::Tsunami => 2,
            Tab::Podcast => 3,
            Tab::Twitter => 4,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Parse a tab name from config. Names outside the known set fall back to
    /// the blog tab; this fallback is deliberate and mirrors the backend's
    /// own default route.
    pub fn from_name(name: &str) -> Tab {
        match name.to_ascii_lowercase().as_str() {
            "blog" | "weather_blog" => Tab::Blog,
            "weather" => Tab::Weather,
            "tsunami" => Tab::Tsunami,
            "podcast" => Tab::Podcast,
            "twitter" => Tab::Twitter,
            _ => Tab::Blog,
        }
    }
}

/// Lifecycle of a tab's fetch, derived from its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct BlogReport {
    pub city: Option<String>,
    pub blog: Option<String>,
    pub image_url: Option<String>,
    pub pdf_url: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CurrentConditions {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub local_time: Option<String>,
    pub temp_c: Option<f64>,
    pub feels_like_c: Option<f64>,
    pub condition: Option<String>,
    pub wind_kph: Option<f64>,
    pub humidity: Option<f64>,
    pub uv: Option<f64>,
    pub aqi_us: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct HistoryDay {
    pub date: Option<String>,
    pub avg_temp_c: Option<f64>,
    pub condition: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WeatherReport {
    pub city: Option<String>,
    pub current: Option<CurrentConditions>,
    #[serde(default)]
    pub monthly_history: Vec<HistoryDay>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Earthquake {
    pub place: Option<String>,
    pub magnitude: Option<f64>,
    pub depth_km: Option<f64>,
    pub risk: Option<String>,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TsunamiReport {
    pub hours_checked: Option<u32>,
    pub total_found: Option<u32>,
    #[serde(default)]
    pub earthquakes: Vec<Earthquake>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PodcastReport {
    pub city: Option<String>,
    pub script: Option<String>,
    pub weather: Option<CurrentConditions>,
    pub note: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TwitterReport {
    pub city: Option<String>,
    pub tweet_text: Option<String>,
    pub tweet_id: Option<serde_json::Value>,
    pub tweet_url: Option<String>,
    pub status: Option<String>,
    pub weather: Option<CurrentConditions>,
    pub timestamp: Option<String>,
}

/// Response to `/api/podcast/audio`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AudioReport {
    pub city: Option<String>,
    pub audio_url: Option<String>,
    pub timestamp: Option<String>,
}

/// Decoded result for a tab's most recent fetch. A tab's slot holds exactly
/// one of these at a time; a new fetch replaces it wholesale, never merges.
#[derive(Debug, Clone)]
pub enum TabPayload {
    Blog(BlogReport),
    Weather(WeatherReport),
    Tsunami(TsunamiReport),
    Podcast(PodcastReport),
    Twitter(TwitterReport),
    Error(String),
}

impl TabPayload {
    /// Decode a response body for the given tab.
    ///
    /// Any JSON object carrying an `error` string collapses to
    /// `TabPayload::Error`, as do non-JSON bodies and shape mismatches. All
    /// failure kinds render identically; only the message differs.
    pub fn decode(tab: Tab, body: &str) -> TabPayload {
        let value: serde_json::Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(e) => return TabPayload::Error(format!("Decode error: {e}")),
        };

        if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
            return TabPayload::Error(message.to_string());
        }

        let decoded = match tab {
            Tab::Blog => serde_json::from_value(value).map(TabPayload::Blog),
            Tab::Weather => serde_json::from_value(value).map(TabPayload::Weather),
            Tab::Tsunami => serde_json::from_value(value).map(TabPayload::Tsunami),
            Tab::Podcast => serde_json::from_value(value).map(TabPayload::Podcast),
            Tab::Twitter => serde_json::from_value(value).map(TabPayload::Twitter),
        };

        decoded.unwrap_or_else(|e| TabPayload::Error(format!("Decode error: {e}")))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            TabPayload::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TabPayload::Error(_))
    }

    /// The primary text of this payload, used for yanking to the clipboard.
    pub fn yankable_text(&self) -> Option<&str> {
        match self {
            TabPayload::Blog(report) => report.blog.as_deref(),
            TabPayload::Podcast(report) => report.script.as_deref(),
            TabPayload::Twitter(report) => report.tweet_text.as_deref(),
            TabPayload::Weather(_) | TabPayload::Tsunami(_) | TabPayload::Error(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths_non_empty_and_distinct() {
        let mut seen = Vec::new();
        for tab in Tab::ALL {
            let path = tab.endpoint_path();
            assert!(!path.is_empty());
            assert!(path.starts_with("/api/"));
            assert!(!seen.contains(&path));
            seen.push(path);
        }
    }

    #[test]
    fn test_from_name_known() {
        assert_eq!(Tab::from_name("tsunami"), Tab::Tsunami);
        assert_eq!(Tab::from_name("Weather"), Tab::Weather);
        assert_eq!(Tab::from_name("PODCAST"), Tab::Podcast);
    }

    #[test]
    fn test_from_name_unknown_falls_back_to_blog() {
        assert_eq!(Tab::from_name("radio"), Tab::Blog);
        assert_eq!(Tab::from_name(""), Tab::Blog);
    }

    #[test]
    fn test_next_prev_cycle() {
        for tab in Tab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
        assert_eq!(Tab::Twitter.next(), Tab::Blog);
        assert_eq!(Tab::Blog.prev(), Tab::Twitter);
    }

    #[test]
    fn test_decode_blog_success() {
        let body = r#"{"city":"Chennai","blog":"text","image_url":"/img/1.png"}"#;
        match TabPayload::decode(Tab::Blog, body) {
            TabPayload::Blog(report) => {
                assert_eq!(report.city.as_deref(), Some("Chennai"));
                assert_eq!(report.image_url.as_deref(), Some("/img/1.png"));
                assert!(report.pdf_url.is_none());
            }
            other => panic!("expected blog payload, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_service_error_collapses() {
        let body = r#"{"error":"WeatherAPI quota exceeded"}"#;
        let payload = TabPayload::decode(Tab::Weather, body);
        assert_eq!(payload.error_message(), Some("WeatherAPI quota exceeded"));
    }

    #[test]
    fn test_decode_non_json_body() {
        let payload = TabPayload::decode(Tab::Tsunami, "<html>502 Bad Gateway</html>");
        assert!(payload.is_error());
        assert!(payload.error_message().unwrap().starts_with("Decode error"));
    }

    #[test]
    fn test_decode_tsunami_tolerates_missing_fields() {
        let body = r#"{"hours_checked":24,"earthquakes":[]}"#;
        match TabPayload::decode(Tab::Tsunami, body) {
            TabPayload::Tsunami(report) => {
                assert_eq!(report.hours_checked, Some(24));
                assert!(report.earthquakes.is_empty());
                assert!(report.total_found.is_none());
            }
            other => panic!("expected tsunami payload, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_twitter_with_weather_context() {
        let body = r#"{
            "city": "Mumbai",
            "tweet_text": "Humid evening in Mumbai",
            "status": "generated_but_not_posted",
            "weather": {"temp_c": 31.5, "condition": "Mist"}
        }"#;
        match TabPayload::decode(Tab::Twitter, body) {
            TabPayload::Twitter(report) => {
                assert_eq!(report.status.as_deref(), Some("generated_but_not_posted"));
                let weather = report.weather.unwrap();
                assert_eq!(weather.temp_c, Some(31.5));
            }
            other => panic!("expected twitter payload, got {other:?}"),
        }
    }

    #[test]
    fn test_yankable_text_per_tab() {
        let blog = TabPayload::Blog(BlogReport {
            blog: Some("post".into()),
            ..Default::default()
        });
        assert_eq!(blog.yankable_text(), Some("post"));

        let weather = TabPayload::Weather(WeatherReport::default());
        assert!(weather.yankable_text().is_none());
    }
}

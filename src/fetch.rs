use crate::state::AppState;
use crate::types::{AudioReport, Tab, TabPayload};
use crate::utils::log_debug;
use std::sync::{Arc, RwLock};
use url::Url;

/// Spawns a background task to fetch one tab's payload.
///
/// This is the single effectful operation per tab: mark the slot loading,
/// issue one GET, decode the body, store the result. Network failures, body
/// read failures, non-JSON bodies and service-reported errors all land in
/// the slot as an error payload; nothing here is fatal to the process.
pub fn fetch_tab_background(
    state: Arc<RwLock<AppState>>,
    base_url: String,
    tab: Tab,
    tsunami_hours: Option<u32>,
) {
    let seq = {
        let mut s = state.write().unwrap();
        s.slot_mut(tab).begin_fetch()
    };

    tokio::spawn(async move {
        let url = match build_tab_url(&base_url, tab, tsunami_hours) {
            Ok(url) => url,
            Err(e) => {
                let mut s = state.write().unwrap();
                s.slot_mut(tab)
                    .complete_fetch(seq, TabPayload::Error(format!("Invalid URL: {e}")));
                return;
            }
        };

        log_debug(&format!("GET {url} (seq {seq})"));
        let payload = match reqwest::get(&url).await {
            Ok(response) => match response.text().await {
                Ok(body) => TabPayload::decode(tab, &body),
                Err(e) => TabPayload::Error(format!("Failed to read response body: {e}")),
            },
            Err(e) => TabPayload::Error(format!("Network error: {e}")),
        };

        let mut s = state.write().unwrap();
        if !s.slot_mut(tab).complete_fetch(seq, payload) {
            log_debug(&format!("Discarded stale response for {} (seq {seq})", tab.title()));
        }
    });
}

/// Fetch the tab only when its slot is empty; stored payloads persist across
/// tab switches until an explicit refresh.
pub fn ensure_tab_loaded(
    state: &Arc<RwLock<AppState>>,
    base_url: &str,
    tab: Tab,
    tsunami_hours: Option<u32>,
) {
    let needs_fetch = {
        let s = state.read().unwrap();
        s.slot(tab).needs_fetch()
    };

    if needs_fetch {
        fetch_tab_background(Arc::clone(state), base_url.to_string(), tab, tsunami_hours);
    }
}

/// Spawns a background task requesting podcast audio generation.
///
/// The audio URL lives in its own slot rather than the podcast payload, so
/// a later podcast refresh still replaces that payload wholesale.
pub fn fetch_podcast_audio_background(state: Arc<RwLock<AppState>>, base_url: String) {
    {
        let mut s = state.write().unwrap();
        if s.audio.loading {
            return;
        }
        s.audio.loading = true;
        s.audio.error = None;
    }

    tokio::spawn(async move {
        let url = format!(
            "{}/api/podcast/audio",
            base_url.trim_end_matches('/')
        );

        log_debug(&format!("GET {url}"));
        let result = match reqwest::get(&url).await {
            Ok(response) => match response.json::<AudioReport>().await {
                Ok(report) => match report.audio_url {
                    Some(audio_url) => Ok(audio_url),
                    None => Err("No audio_url in response".to_string()),
                },
                Err(e) => Err(format!("Decode error: {e}")),
            },
            Err(e) => Err(format!("Network error: {e}")),
        };

        let mut s = state.write().unwrap();
        s.audio.loading = false;
        match result {
            Ok(audio_url) => s.audio.audio_url = Some(audio_url),
            Err(message) => s.audio.error = Some(message),
        }
    });
}

/// Build the full request URL for a tab. Only the tsunami tab carries a
/// query parameter (`hours`), and only when configured.
pub fn build_tab_url(base_url: &str, tab: Tab, tsunami_hours: Option<u32>) -> Result<String, String> {
    let full_path = format!("{}{}", base_url.trim_end_matches('/'), tab.endpoint_path());

    let mut url = Url::parse(&full_path).map_err(|e| e.to_string())?;

    if tab == Tab::Tsunami {
        if let Some(hours) = tsunami_hours {
            url.query_pairs_mut()
                .append_pair("hours", &hours.to_string());
        }
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tab_url_basic() {
        let url = build_tab_url("http://localhost:5000", Tab::Blog, None);
        assert_eq!(url.unwrap(), "http://localhost:5000/api/weather_blog");
    }

    #[test]
    fn test_build_tab_url_trailing_slash() {
        let url = build_tab_url("http://localhost:5000/", Tab::Weather, None);
        assert_eq!(url.unwrap(), "http://localhost:5000/api/weather");
    }

    #[test]
    fn test_build_tab_url_tsunami_hours() {
        let url = build_tab_url("http://localhost:5000", Tab::Tsunami, Some(48));
        assert_eq!(url.unwrap(), "http://localhost:5000/api/tsunami?hours=48");
    }

    #[test]
    fn test_build_tab_url_hours_only_applies_to_tsunami() {
        let url = build_tab_url("http://localhost:5000", Tab::Podcast, Some(48));
        assert_eq!(url.unwrap(), "http://localhost:5000/api/podcast");
    }

    #[test]
    fn test_build_tab_url_invalid_base() {
        assert!(build_tab_url("not a valid url", Tab::Blog, None).is_err());
    }
}

//! Derived asset handling
//!
//! The backend returns image, PDF and audio links as relative paths under
//! `/static/`. They resolve against the same base URL as the API and open
//! in the platform's default viewer.

use crate::utils::log_debug;
use std::process::{Command, Stdio};
use url::Url;

/// Resolve an asset path against the backend base URL. Absolute URLs (such
/// as `tweet_url`) pass through untouched.
pub fn resolve_asset_url(base_url: &str, path_or_url: &str) -> Result<String, String> {
    if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
        return Ok(path_or_url.to_string());
    }

    let base = Url::parse(base_url).map_err(|e| format!("Invalid base URL: {e}"))?;
    let resolved = base
        .join(path_or_url)
        .map_err(|e| format!("Invalid asset path: {e}"))?;

    Ok(resolved.to_string())
}

/// Hand a URL to the platform's default link/viewer handler. Failure is
/// logged and otherwise ignored; the TUI stays up either way.
pub fn open_in_viewer(url: &str) -> bool {
    #[cfg(target_os = "macos")]
    let opened = spawn_opener("open", url);

    #[cfg(target_os = "windows")]
    let opened = spawn_opener_args("cmd", &["/C", "start", ""], url);

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let opened = spawn_opener("xdg-open", url);

    if !opened {
        log_debug(&format!("Failed to open {url} in viewer"));
    }
    opened
}

fn spawn_opener(cmd: &str, url: &str) -> bool {
    spawn_opener_args(cmd, &[], url)
}

fn spawn_opener_args(cmd: &str, args: &[&str], url: &str) -> bool {
    Command::new(cmd)
        .args(args)
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let url = resolve_asset_url("http://172.17.132.1:5000", "/static/blog.pdf");
        assert_eq!(url.unwrap(), "http://172.17.132.1:5000/static/blog.pdf");
    }

    #[test]
    fn test_resolve_with_trailing_slash_base() {
        let url = resolve_asset_url("http://localhost:5000/", "/img/1.png");
        assert_eq!(url.unwrap(), "http://localhost:5000/img/1.png");
    }

    #[test]
    fn test_absolute_url_passes_through() {
        let url = resolve_asset_url(
            "http://localhost:5000",
            "https://twitter.com/user/status/123",
        );
        assert_eq!(url.unwrap(), "https://twitter.com/user/status/123");
    }

    #[test]
    fn test_invalid_base_is_error() {
        assert!(resolve_asset_url("not a url", "/static/a.png").is_err());
    }
}

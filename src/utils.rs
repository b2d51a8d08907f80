use std::fs::OpenOptions;
use std::io::Write;

/// Log debug message to /tmp/weatherhub-tui.log
pub fn log_debug(msg: &str) {
    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/weatherhub-tui.log")
        .and_then(|mut f| writeln!(f, "{msg}"));
}

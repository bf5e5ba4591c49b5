//! Wire-level debugging via LOUD_WIRE environment variable.
//!
//! When `LOUD_WIRE` is set to any value, prints the query parameters of API
//! requests and the raw JSON of responses to stderr with pretty formatting and
//! colors.
//!
//! # Usage
//!
//! ```bash
//! LOUD_WIRE=1 cargo run --example top_headlines
//! ```
//!
//! # Output Format
//!
//! - Green `>>>` for outgoing requests
//! - Red `<<<` for incoming responses
//! - Timestamps and request IDs for correlation
//!
//! Article `content` fields are truncated to keep output readable. The API key is
//! never printed: it travels in a header, and only the payload is dumped.

use super::error_helpers::truncate_for_context;
use colored::Colorize;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Request ID counter for correlating requests with responses
static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Cached check for whether LOUD_WIRE is enabled
static ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if LOUD_WIRE debugging is enabled.
///
/// The result is cached after first check. `LOUD_WIRE` must be set before the
/// first API call is made.
#[must_use]
pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("LOUD_WIRE").is_ok())
}

/// Get the next request ID for correlation.
#[must_use]
pub fn next_request_id() -> usize {
    REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Fields whose values are truncated if too long.
const TRUNCATE_FIELDS: &[&str] = &["content"];

/// Maximum length before truncation.
const TRUNCATE_THRESHOLD: usize = 100;

/// Walks the JSON tree and truncates long string values of [`TRUNCATE_FIELDS`].
fn truncate_long_fields(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if TRUNCATE_FIELDS.contains(&key.as_str()) {
                    if let serde_json::Value::String(s) = val
                        && s.len() > TRUNCATE_THRESHOLD
                    {
                        *s = truncate_for_context(s, TRUNCATE_THRESHOLD);
                    }
                } else {
                    truncate_long_fields(val);
                }
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                truncate_long_fields(item);
            }
        }
        _ => {}
    }
}

/// Format the current UTC timestamp for log output.
fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Log prefix with timestamp and request ID.
fn prefix(request_id: usize) -> String {
    let ts = timestamp().dimmed();
    format!(
        "{} {} {}",
        "[LOUD_WIRE]".bold(),
        ts,
        format!("[REQ#{}]", request_id).cyan()
    )
}

fn print_json(prefix: &str, value: &serde_json::Value) {
    if let Ok(colored) = colored_json::to_colored_json_auto(value) {
        for line in colored.lines() {
            eprintln!("{prefix} {line}");
        }
    } else if let Ok(pretty) = serde_json::to_string_pretty(value) {
        for line in pretty.lines() {
            eprintln!("{prefix} {line}");
        }
    }
}

/// Log an outgoing HTTP request and its query parameters.
pub fn log_request(request_id: usize, method: &str, url: &str, params: &serde_json::Value) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);
    let direction = ">>>".green().bold();

    eprintln!("{prefix} {direction} {method} {url}");
    eprintln!("{prefix} {}:", "Params".green());
    print_json(&prefix, params);
}

/// Log an incoming HTTP response status.
pub fn log_response_status(request_id: usize, status: u16) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);
    let direction = "<<<".red().bold();
    let status_text = if status < 300 {
        format!("{status} OK").green()
    } else {
        format!("{status} ERROR").red()
    };

    eprintln!("{prefix} {direction} {status_text}");
}

/// Log an incoming HTTP response body.
pub fn log_response_body(request_id: usize, body: &str) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);

    if let Ok(mut parsed) = serde_json::from_str::<serde_json::Value>(body) {
        truncate_long_fields(&mut parsed);
        eprintln!("{prefix} {}:", "Response".red());
        print_json(&prefix, &parsed);
    } else {
        // Not valid JSON, print as-is (truncated)
        eprintln!(
            "{prefix} {}: {}",
            "Response".red(),
            truncate_for_context(body, 1000)
        );
    }
}

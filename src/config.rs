use chrono::{DateTime, Datelike, Utc};

/// Formspree form that receives messages when no override is compiled in.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/mqawazjk";

/// Local storage key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// RFC 3339 timestamp captured by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// The form-relay endpoint for this build.
///
/// Set `PORTFOLIO_FORM_ENDPOINT` at compile time to point the contact form
/// somewhere else. Blank values fall back to [`DEFAULT_FORM_ENDPOINT`].
pub fn form_endpoint() -> &'static str {
    resolve_endpoint(option_env!("PORTFOLIO_FORM_ENDPOINT"))
}

fn resolve_endpoint(value: Option<&'static str>) -> &'static str {
    match value.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_FORM_ENDPOINT,
    }
}

/// Year shown in the footer copyright line.
pub fn copyright_year() -> i32 {
    year_from_timestamp(BUILD_TIME).unwrap_or_else(|| Utc::now().year())
}

fn year_from_timestamp(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).year())
}

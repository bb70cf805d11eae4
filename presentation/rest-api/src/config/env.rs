use std::env;
use std::str::FromStr;

/// Reads `key` and parses it, falling back to `default` when the variable is
/// unset or malformed.
pub fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(variable = key, value = %raw, "Malformed value, using default");
            default
        }),
        Err(_) => default,
    }
}

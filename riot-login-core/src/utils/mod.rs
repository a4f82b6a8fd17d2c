//! Log sanitization helpers
//!
//! Response bodies echo account data, so nothing longer than a short prefix
//! and never a password reaches the log.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a response body for logging.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Replace a secret with a fixed-width placeholder.
pub fn mask_secret(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<empty>"
    } else {
        "********"
    }
}

//! User agent strings for outbound requests

use rand::seq::SliceRandom;

const CHROME_VERSIONS: &[&str] = &["122.0.0.0", "123.0.0.0", "124.0.0.0", "125.0.0.0"];

const OS_STRINGS: &[&str] = &[
    "Windows NT 10.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "X11; Linux x86_64",
];

/// A plausible desktop Chrome user agent, picked once per client
pub fn generate_user_agent() -> String {
    let mut rng = rand::thread_rng();
    let os = OS_STRINGS.choose(&mut rng).unwrap_or(&OS_STRINGS[0]);
    let chrome = CHROME_VERSIONS.choose(&mut rng).unwrap_or(&CHROME_VERSIONS[0]);
    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
        os, chrome
    )
}

/// Standard accept header for HTML requests
pub fn accept_html() -> &'static str {
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"
}

/// Standard accept-language header
pub fn accept_language() -> &'static str {
    "en-US,en;q=0.9"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_agent() {
        let ua = generate_user_agent();
        assert!(ua.starts_with("Mozilla/5.0"));
        assert!(ua.contains("Chrome/"));
    }
}

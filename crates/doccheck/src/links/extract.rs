//! External link discovery in preprocessed content.
//!
//! Scans for substrings with a URL shape, trims trailing punctuation,
//! deduplicates while keeping first-occurrence order, and drops obvious
//! placeholder targets (loopback hosts and the reserved example domains).
//! No network I/O happens here.

use regex::Regex;
use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::OnceLock;
use url::{Host, Url};

static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| {
        Regex::new(r#"(?:https?|ftp)://[^\s\[\]<>"'`]+"#).expect("Url regex should compile")
    })
}

/// Punctuation that ends a sentence around a URL, not the URL itself.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

/// Extract candidate URLs: deduplicated, order-stable, placeholders dropped.
pub fn extract_links(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for m in url_regex().find_iter(content) {
        let url = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
        if url.is_empty() || is_placeholder(url) {
            continue;
        }
        if seen.insert(url.to_string()) {
            links.push(url.to_string());
        }
    }

    links
}

/// True for hosts that can never be a real external target: `localhost`,
/// loopback addresses, and the reserved example domains.
fn is_placeholder(url: &str) -> bool {
    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(_) => return false,
    };

    match parsed.host() {
        Some(Host::Domain(domain)) => {
            let domain = domain.to_ascii_lowercase();
            domain == "localhost" || is_example_domain(&domain)
        }
        Some(Host::Ipv4(addr)) => IpAddr::from(addr).is_loopback(),
        Some(Host::Ipv6(addr)) => IpAddr::from(addr).is_loopback(),
        None => false,
    }
}

fn is_example_domain(domain: &str) -> bool {
    for reserved in ["example.com", "example.net", "example.org"] {
        if domain == reserved || domain.ends_with(&format!(".{}", reserved)) {
            return true;
        }
    }
    false
}

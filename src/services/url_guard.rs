//! Outbound URL checks for the summarization call.
//!
//! A page is only handed to the AI provider when its URL is a well-formed
//! http(s) URL on a public host. Loopback, RFC 1918, link-local and
//! dotless intranet names are refused before any request is made.

use std::net::Ipv4Addr;

use url::{Host, Url};

use crate::types::errors::SummaryError;

/// Returns `true` if `url` parses and its host looks publicly routable.
pub fn is_publicly_routable(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    match parsed.host() {
        None => false,
        Some(Host::Ipv4(addr)) => !is_non_public_ipv4(addr),
        // IPv6 literals carry no domain suffix.
        Some(Host::Ipv6(_)) => false,
        Some(Host::Domain(domain)) => {
            let domain = domain.trim_end_matches('.');
            !domain.eq_ignore_ascii_case("localhost")
                && !domain.to_ascii_lowercase().ends_with(".localhost")
                && domain.contains('.')
        }
    }
}

fn is_non_public_ipv4(addr: Ipv4Addr) -> bool {
    addr.is_loopback()
        || addr.is_private()
        || addr.is_link_local()
        || addr.is_unspecified()
        || is_shared_address_space(addr)
}

/// Carrier-grade NAT range `100.64.0.0/10` (RFC 6598).
fn is_shared_address_space(addr: Ipv4Addr) -> bool {
    let [a, b, ..] = addr.octets();
    a == 100 && (b & 0xC0) == 64
}

/// Validates a summarization target, returning the parsed URL.
pub fn validate_summary_target(url: &str) -> Result<Url, SummaryError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(SummaryError::InvalidUrl(url.to_string()));
    }
    let parsed = Url::parse(trimmed).map_err(|e| SummaryError::InvalidUrl(format!("{}: {}", url, e)))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(SummaryError::InvalidUrl(url.to_string()));
    }
    if !is_publicly_routable(trimmed) {
        return Err(SummaryError::NotPubliclyRoutable(url.to_string()));
    }
    Ok(parsed)
}

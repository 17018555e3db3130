//! Card image resolution for bookmarks.
//!
//! A bookmark's own image always wins. Otherwise well-known sites get a
//! favicon from the favicon service and everything else gets the placeholder.
//! Nothing here touches the network: the functions only build URL strings,
//! and failed loads are handled by walking the [`fallback_chain`].

use url::Url;

use crate::types::bookmark::PLACEHOLDER_IMAGE;

/// Size requested from the favicon service for the primary image.
pub const DEFAULT_FAVICON_SIZE: u32 = 256;

/// Favicon sizes tried in order before giving up on the placeholder.
pub const FALLBACK_FAVICON_SIZES: [u32; 3] = [256, 128, 64];

/// Domains eligible for favicon-service images. A host matches when it
/// contains one of these.
pub const WELL_KNOWN_DOMAINS: &[&str] = &[
    "google.com",
    "youtube.com",
    "facebook.com",
    "instagram.com",
    "twitter.com",
    "linkedin.com",
    "github.com",
    "chatgpt.com",
    "claude.ai",
    "microsoft.com",
    "netflix.com",
    "amazon.com",
    "apple.com",
    "reddit.com",
    "wikipedia.org",
    "stackoverflow.com",
];

const PLACEHOLDER_HOST: &str = "placehold.co";

/// Host fragments the alternate favicon provider handles badly.
const FAVICON_IM_SKIPPED: &[&str] = &["anime", ".to", ".ru", ".hu"];

/// Host fragments that point at the local network.
const LOCAL_HOST_MARKERS: &[&str] = &["192.168.", "localhost", ".local"];

/// Third-party places a site icon can be fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaviconProvider {
    /// Google's favicon service at the given pixel size.
    Google { size: u32 },
    /// favicon.im, large variant.
    FaviconIm,
    /// DuckDuckGo's icon mirror.
    DuckDuckGo,
    /// `/favicon.ico` on the site itself.
    Direct,
}

impl FaviconProvider {
    /// Templated icon URL for `bookmark_url`, or the placeholder when the URL
    /// does not parse or the provider is known not to work for the host.
    pub fn icon_url(&self, bookmark_url: &str) -> String {
        let Ok(parsed) = Url::parse(bookmark_url) else {
            return PLACEHOLDER_IMAGE.to_string();
        };
        let Some(host) = parsed.host_str() else {
            return PLACEHOLDER_IMAGE.to_string();
        };

        match self {
            FaviconProvider::Google { size } => favicon_service_url(host, *size),
            FaviconProvider::FaviconIm => {
                if contains_any(host, FAVICON_IM_SKIPPED) {
                    PLACEHOLDER_IMAGE.to_string()
                } else {
                    format!("https://favicon.im/{}?larger=true", host)
                }
            }
            FaviconProvider::DuckDuckGo => {
                if contains_any(host, LOCAL_HOST_MARKERS) {
                    PLACEHOLDER_IMAGE.to_string()
                } else {
                    format!("https://icons.duckduckgo.com/ip3/{}.ico", host)
                }
            }
            FaviconProvider::Direct => {
                if contains_any(host, LOCAL_HOST_MARKERS) || parsed.scheme() == "http" {
                    PLACEHOLDER_IMAGE.to_string()
                } else {
                    format!("{}://{}/favicon.ico", parsed.scheme(), host)
                }
            }
        }
    }
}

/// Returns `true` if `image` is the placeholder sentinel or served by the
/// placeholder host.
pub fn is_placeholder(image: &str) -> bool {
    if image == PLACEHOLDER_IMAGE {
        return true;
    }
    Url::parse(image)
        .ok()
        .and_then(|u| u.host_str().map(|h| h == PLACEHOLDER_HOST))
        .unwrap_or(false)
}

/// Returns `true` if `host` belongs to one of [`WELL_KNOWN_DOMAINS`].
pub fn is_well_known_host(host: &str) -> bool {
    WELL_KNOWN_DOMAINS.iter().any(|known| host.contains(known))
}

/// Best first guess for a bookmark's card image.
pub fn primary_image_source(declared_image: &str, bookmark_url: &str) -> String {
    if !declared_image.is_empty() && !is_placeholder(declared_image) {
        return declared_image.to_string();
    }

    match well_known_host(bookmark_url) {
        Some(host) => favicon_service_url(&host, DEFAULT_FAVICON_SIZE),
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Candidate images tried in order as each one fails to load.
///
/// Always non-empty and always ends with the placeholder.
pub fn fallback_chain(bookmark_url: &str) -> Vec<String> {
    match well_known_host(bookmark_url) {
        Some(host) => FALLBACK_FAVICON_SIZES
            .iter()
            .map(|size| favicon_service_url(&host, *size))
            .chain(std::iter::once(PLACEHOLDER_IMAGE.to_string()))
            .collect(),
        None => vec![PLACEHOLDER_IMAGE.to_string()],
    }
}

fn well_known_host(bookmark_url: &str) -> Option<String> {
    let parsed = Url::parse(bookmark_url).ok()?;
    let host = parsed.host_str()?;
    is_well_known_host(host).then(|| host.to_string())
}

fn favicon_service_url(host: &str, size: u32) -> String {
    format!("https://www.google.com/s2/favicons?domain={}&sz={}", host, size)
}

fn contains_any(host: &str, fragments: &[&str]) -> bool {
    fragments.iter().any(|fragment| host.contains(fragment))
}

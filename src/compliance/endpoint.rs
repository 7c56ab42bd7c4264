//! Endpoint transport checks

use url::Url;

const MAX_URI_LENGTH: usize = 2048;

/// True only for an absolute `https` URL with a non-empty host
///
/// Relative references, other schemes, hostless URLs and oversized input
/// are all rejected.
pub fn is_secure_endpoint(uri: &str) -> bool {
    let uri = uri.trim();
    if uri.is_empty() || uri.len() > MAX_URI_LENGTH {
        return false;
    }

    let parsed = match Url::parse(uri) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(error = %e, "Endpoint is not an absolute URL");
            return false;
        }
    };

    if parsed.scheme() != "https" {
        tracing::warn!(scheme = parsed.scheme(), "Endpoint does not use https");
        return false;
    }

    matches!(parsed.host_str(), Some(host) if !host.is_empty())
}

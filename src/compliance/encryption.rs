//! Connection-string encryption checks

use std::collections::HashMap;

const ENCRYPT_ON: [&str; 4] = ["true", "yes", "strict", "mandatory"];
const TRUTHY: [&str; 2] = ["true", "yes"];

/// True only when `Encrypt` is on and the server certificate is verified
///
/// Accepts ADO-style `key=value;` pairs. Keys are case-insensitive and
/// surrounding whitespace is ignored. Any segment without `=` or with an
/// empty key makes the whole string malformed, which yields `false`.
pub fn is_encryption_enforced(connection_string: &str) -> bool {
    let Some(pairs) = parse_pairs(connection_string) else {
        tracing::debug!("Connection string is malformed");
        return false;
    };

    let encrypt_on = pairs
        .get("encrypt")
        .is_some_and(|v| ENCRYPT_ON.contains(&v.as_str()));
    if !encrypt_on {
        return false;
    }

    let trusts_any_cert = pairs
        .get("trustservercertificate")
        .is_some_and(|v| TRUTHY.contains(&v.as_str()));
    if trusts_any_cert {
        tracing::warn!("Encryption enabled but server certificate is not verified");
        return false;
    }

    true
}

fn parse_pairs(connection_string: &str) -> Option<HashMap<String, String>> {
    let mut pairs = HashMap::new();

    for segment in connection_string.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let (key, value) = segment.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        let normalized_key: String = key
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        pairs.insert(normalized_key, value.trim().to_lowercase());
    }

    if pairs.is_empty() {
        None
    } else {
        Some(pairs)
    }
}

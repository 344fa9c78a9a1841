use once_cell::sync::Lazy;
use regex_automata::meta::Regex;

/// Sentinel returned whenever a client address cannot be derived.
pub const UNKNOWN: &str = "Unknown";

/// Shape check only: runs of 1-3 digits. Out-of-range octets such as
/// `999.999.999.999` pass deliberately; callers asked for the header value
/// as sent, not a parsed address.
static IPV4_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,3}(\.[0-9]{1,3}){3}$").expect("valid IPv4 shape pattern"));

static IPV6_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Fa-f:]{2,45}$").expect("valid IPv6 shape pattern")
});

/// Cleans a raw header-supplied address and validates its shape.
///
/// Control characters and whitespace are stripped before matching, so a
/// value like `"::1\r\n"` comes back as `"::1"`. Anything that does not
/// look like an IPv4 or IPv6 address yields [`UNKNOWN`].
pub fn sanitize(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|ch| !ch.is_ascii_control() && !ch.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return UNKNOWN.to_string();
    }
    if IPV4_SHAPE.is_match(cleaned.as_bytes()) {
        return cleaned;
    }
    if cleaned.contains(':') && IPV6_SHAPE.is_match(cleaned.as_bytes()) {
        return cleaned;
    }

    UNKNOWN.to_string()
}

#[cfg(test)]
#[path = "ip_test.rs"]
mod ip_test;

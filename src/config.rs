use crate::constants::method;
use crate::origin::Origin;
use thiserror::Error;

/// Fallback for `Access-Control-Max-Age` when no value is configured.
pub const DEFAULT_MAX_AGE: u64 = 86_400;

/// Static CORS configuration, loaded once at process start and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub origin: Origin,
    pub credentials: bool,
    /// Ordered method allowlist. Entries are expected in canonical
    /// uppercase form; requested methods are upper-cased before comparison.
    pub methods: Vec<String>,
    /// Ordered header allowlist, matched case-insensitively.
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    /// Preflight cache lifetime in seconds; `None` falls back to
    /// [`DEFAULT_MAX_AGE`].
    pub max_age: Option<u64>,
}

/// Configuration errors reported eagerly by [`CorsConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "the wildcard origin cannot be combined with credentials; configure an explicit origin policy instead"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("the method allowlist cannot be empty")]
    NoMethodsAllowed,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: Origin::Any,
            credentials: false,
            methods: vec![
                method::GET.into(),
                method::HEAD.into(),
                method::POST.into(),
                method::OPTIONS.into(),
            ],
            allowed_headers: vec!["Content-Type".into()],
            exposed_headers: Vec::new(),
            max_age: None,
        }
    }
}

impl CorsConfig {
    /// Rejects combinations a browser would refuse to honour. Runs at
    /// startup so a bad deployment fails before it serves a request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credentials && matches!(self.origin, Origin::Any) {
            return Err(ConfigError::CredentialsRequireSpecificOrigin);
        }
        if self.methods.is_empty() {
            return Err(ConfigError::NoMethodsAllowed);
        }
        Ok(())
    }

    /// Case-sensitive membership check after upper-casing the candidate.
    pub fn allows_method(&self, candidate: &str) -> bool {
        let candidate = candidate.to_ascii_uppercase();
        self.methods.iter().any(|allowed| *allowed == candidate)
    }

    /// Case-insensitive membership check against the header allowlist.
    pub fn allows_header(&self, candidate: &str) -> bool {
        self.allowed_headers
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(candidate))
    }

    pub fn methods_header_value(&self) -> String {
        self.methods.join(", ")
    }

    pub fn allowed_headers_value(&self) -> String {
        self.allowed_headers.join(", ")
    }

    pub fn max_age_value(&self) -> String {
        self.max_age.unwrap_or(DEFAULT_MAX_AGE).to_string()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::config::{ConfigError, CorsConfig};
use crate::constants::header;
use crate::error::ErrorCode;
use crate::origin::OriginDecision;
use crate::request::ServiceRequest;
use crate::response::Response;

/// Cross-origin policy engine. The single source of truth for allow-origin
/// decisions: normal-response wrapping and preflight answers both go
/// through it, so a browser's cached preflight grant can never disagree
/// with what the real response does.
pub struct Cors {
    config: CorsConfig,
}

impl Cors {
    /// Validates the configuration eagerly; a wildcard origin combined
    /// with credentials is refused here rather than at request time.
    pub fn new(config: CorsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CorsConfig {
        &self.config
    }

    /// Resolves which allow-origin value, if any, this request earns.
    /// Absence of the `Origin` header and a non-matching origin both
    /// resolve to [`OriginDecision::Skip`].
    pub fn resolve_allow_origin(&self, request: &ServiceRequest) -> OriginDecision {
        self.config.origin.resolve(request.origin())
    }

    /// Wraps a route response with the cross-origin headers the request
    /// earns. Takes the response by value and returns the merged copy;
    /// the status and body pass through untouched.
    ///
    /// Merging is conservative: an allow-origin, allow-methods or
    /// allow-headers value already set by a handler wins, and `Vary`
    /// tokens are appended without duplication. Applying twice is
    /// observably the same as applying once.
    pub fn apply(&self, request: &ServiceRequest, response: Response) -> Response {
        let mut response = response;
        let decision = self.resolve_allow_origin(request);

        if let Some(value) = decision.header_value() {
            response
                .headers
                .set_if_absent(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
        if !decision.is_wildcard() {
            if self.config.credentials {
                response
                    .headers
                    .set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            }
            // The decision depends on the caller's Origin, so shared
            // caches must key on it.
            response.headers.add_vary(header::ORIGIN);
        }

        // Informational, even when no origin resolved: tooling can see
        // what a rejected preflight would have needed.
        response
            .headers
            .set_if_absent(header::ACCESS_CONTROL_ALLOW_METHODS, self.config.methods_header_value());
        response
            .headers
            .set_if_absent(header::ACCESS_CONTROL_ALLOW_HEADERS, self.config.allowed_headers_value());

        if !self.config.exposed_headers.is_empty() {
            response.headers.set(
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                self.config.exposed_headers.join(", "),
            );
        }

        response
    }

    /// Answers a preflight. Callers route OPTIONS requests here; a missing
    /// `Origin` header is tolerated and simply resolves no allow-origin
    /// header while method and header validation still run.
    ///
    /// Rejections are plain JSON errors with no CORS or `Vary` headers
    /// attached.
    pub fn preflight(&self, request: &ServiceRequest) -> Response {
        let decision = self.resolve_allow_origin(request);

        if let Some(requested) = request.access_control_request_method() {
            let requested = requested.trim().to_ascii_uppercase();
            if !requested.is_empty() && !self.config.allows_method(&requested) {
                log::debug!("preflight rejected: method {requested} not in allowlist");
                return Response::error(
                    ErrorCode::MethodNotAllowed,
                    format!("Method {requested} is not allowed"),
                );
            }
        }

        let allow_headers = match request.access_control_request_headers() {
            Some(raw) if !raw.trim().is_empty() => {
                let requested: Vec<&str> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .collect();
                for name in &requested {
                    if !self.config.allows_header(name) {
                        log::debug!("preflight rejected: header {name} not in allowlist");
                        return Response::error(
                            ErrorCode::CorsHeaderNotAllowed,
                            format!("Header {name} is not allowed"),
                        )
                        .with_field("header", *name);
                    }
                }
                // Echo exactly what was asked: the browser's cached grant
                // narrows to the requested set.
                requested.join(", ")
            }
            _ => self.config.allowed_headers_value(),
        };

        let mut response = Response::no_content();
        if let Some(value) = decision.header_value() {
            response
                .headers
                .set(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
        response.headers.set(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.config.methods_header_value(),
        );
        response
            .headers
            .set(header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);
        response
            .headers
            .set(header::ACCESS_CONTROL_MAX_AGE, self.config.max_age_value());

        let origin_resolved = matches!(decision, OriginDecision::Value(_));
        if self.config.credentials && origin_resolved {
            response
                .headers
                .set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        if !self.config.exposed_headers.is_empty() {
            response.headers.set(
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                self.config.exposed_headers.join(", "),
            );
        }
        if origin_resolved {
            response.headers.add_vary(header::ORIGIN);
        }

        response
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;

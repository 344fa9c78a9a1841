use crate::config::{ConfigError, CorsConfig};
use crate::constants::header;
use crate::cors::Cors;
use crate::headers::HeaderCollection;
use crate::request::ServiceRequest;
use crate::response::{Body, Response};
use crate::router;

/// Top-level request intake: method gate, OPTIONS short-circuit, dispatch
/// and CORS wrapping. One value per process, immutable and shareable.
pub struct EdgeService {
    cors: Cors,
}

impl EdgeService {
    pub fn new(config: CorsConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            cors: Cors::new(config)?,
        })
    }

    pub fn cors(&self) -> &Cors {
        &self.cors
    }

    /// Handles one request end to end. Every branch returns a response
    /// value; nothing propagates to the caller as a fault.
    pub fn handle(&self, request: &ServiceRequest) -> Response {
        if !self.cors.config().allows_method(&request.method) {
            log::debug!("rejecting {} {}: method not allowed", request.method, request.path);
            let rejection = Response {
                status: 405,
                headers: HeaderCollection::new(),
                body: Body::Empty,
            };
            return self.cors.apply(request, rejection);
        }

        if request.is_options() {
            return self.handle_options(request);
        }

        let response = router::dispatch(request, self.cors.config());
        self.cors.apply(request, response)
    }

    /// OPTIONS handling. A real preflight (all three CORS request headers
    /// present) goes to the engine, which emits its own origin headers, so
    /// the result is not wrapped again. Anything else is a bare 204 with
    /// an `Allow` header and deliberately no Access-Control headers.
    fn handle_options(&self, request: &ServiceRequest) -> Response {
        if request.is_preflight() {
            return self.cors.preflight(request);
        }

        let mut response = Response::no_content();
        response
            .headers
            .set(header::ALLOW, self.cors.config().methods_header_value());
        response
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

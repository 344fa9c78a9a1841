use crate::constants::{header, method};
use crate::headers::HeaderCollection;
use crate::metadata::PlatformMetadata;

/// One incoming request as the host platform hands it over. Built once per
/// request and dropped with it; nothing here outlives the exchange.
#[derive(Debug, Clone, Default)]
pub struct ServiceRequest {
    pub method: String,
    pub path: String,
    pub headers: HeaderCollection,
    pub metadata: Option<PlatformMetadata>,
}

impl ServiceRequest {
    pub fn new<M, P>(method: M, path: P) -> Self
    where
        M: Into<String>,
        P: Into<String>,
    {
        Self {
            method: method.into(),
            path: path.into(),
            headers: HeaderCollection::new(),
            metadata: None,
        }
    }

    pub fn with_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.set(name, value);
        self
    }

    pub fn with_metadata(mut self, metadata: PlatformMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn origin(&self) -> Option<&str> {
        self.headers.get(header::ORIGIN)
    }

    pub fn access_control_request_method(&self) -> Option<&str> {
        self.headers.get(header::ACCESS_CONTROL_REQUEST_METHOD)
    }

    pub fn access_control_request_headers(&self) -> Option<&str> {
        self.headers.get(header::ACCESS_CONTROL_REQUEST_HEADERS)
    }

    /// Client address as reported by the platform edge, unsanitized.
    pub fn client_ip(&self) -> Option<&str> {
        self.headers.get(header::CF_CONNECTING_IP)
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.headers.get(header::USER_AGENT)
    }

    pub fn is_options(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }

    /// A browser preflight carries all three CORS request headers; a bare
    /// OPTIONS probe does not.
    pub fn is_preflight(&self) -> bool {
        self.origin().is_some()
            && self.access_control_request_method().is_some()
            && self.access_control_request_headers().is_some()
    }
}

#![allow(dead_code)]

use edgeinfo::constants::{header, method};
use edgeinfo::{CorsConfig, EdgeService, Origin, PlatformMetadata, ServiceRequest};

#[derive(Default)]
pub struct ServiceBuilder {
    origin: Option<Origin>,
    credentials: Option<bool>,
    methods: Option<Vec<String>>,
    allowed_headers: Option<Vec<String>>,
    exposed_headers: Option<Vec<String>>,
    max_age: Option<u64>,
}

pub fn service() -> ServiceBuilder {
    ServiceBuilder::default()
}

impl ServiceBuilder {
    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn build(self) -> EdgeService {
        let defaults = CorsConfig::default();
        EdgeService::new(CorsConfig {
            origin: self.origin.unwrap_or(defaults.origin),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            methods: self.methods.unwrap_or(defaults.methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            max_age: self.max_age.or(defaults.max_age),
        })
        .expect("valid service configuration")
    }
}

pub fn get(path: &str) -> ServiceRequest {
    ServiceRequest::new(method::GET, path)
}

pub fn preflight(path: &str) -> ServiceRequest {
    ServiceRequest::new(method::OPTIONS, path)
        .with_header(header::ORIGIN, "https://caller.example")
        .with_header(header::ACCESS_CONTROL_REQUEST_METHOD, method::GET)
        .with_header(header::ACCESS_CONTROL_REQUEST_HEADERS, "Content-Type")
}

pub fn sample_metadata() -> PlatformMetadata {
    PlatformMetadata {
        asn: Some(64511),
        as_organization: Some("Example Carrier".into()),
        colo: Some("TXL".into()),
        country: Some("DE".into()),
        region: Some("Berlin".into()),
        city: Some("Berlin".into()),
        latitude: Some("52.52000".into()),
        longitude: Some("13.40500".into()),
        timezone: Some("Europe/Berlin".into()),
        ..PlatformMetadata::default()
    }
}

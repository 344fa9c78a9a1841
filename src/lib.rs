pub mod constants;
pub mod ip;

mod config;
mod cors;
mod error;
mod headers;
mod metadata;
mod origin;
mod request;
mod response;
mod router;
mod routes;
mod service;

pub use config::{ConfigError, CorsConfig, DEFAULT_MAX_AGE};
pub use cors::Cors;
pub use error::ErrorCode;
pub use headers::HeaderCollection;
pub use metadata::PlatformMetadata;
pub use origin::{Origin, OriginDecision};
pub use request::ServiceRequest;
pub use response::{Body, Response};
pub use service::EdgeService;

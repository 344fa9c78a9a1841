use std::fmt;

/// Machine-readable error codes carried in JSON error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MethodNotAllowed,
    EnvPlatformMetadataMissing,
    InternalServerError,
    NotFound,
    CorsHeaderNotAllowed,
}

impl ErrorCode {
    /// Wire representation of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ErrorCode::EnvPlatformMetadataMissing => "ENV_PLATFORM_METADATA_MISSING",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::CorsHeaderNotAllowed => "CORS_HEADER_NOT_ALLOWED",
        }
    }

    /// HTTP status a response carrying this code must use.
    pub fn status(self) -> u16 {
        match self {
            ErrorCode::MethodNotAllowed => 405,
            ErrorCode::EnvPlatformMetadataMissing => 500,
            ErrorCode::InternalServerError => 500,
            ErrorCode::NotFound => 404,
            ErrorCode::CorsHeaderNotAllowed => 400,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

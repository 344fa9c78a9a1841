use crate::config::CorsConfig;
use crate::constants::path;
use crate::error::ErrorCode;
use crate::request::ServiceRequest;
use crate::response::Response;
use crate::routes;

/// Exact-path dispatch over the fixed route table. No trailing-slash
/// normalization, no prefix matching, no path parameters.
///
/// The method allowlist is re-checked here even though the entry point
/// already gates it, so the dispatcher stays safe if called directly.
pub fn dispatch(request: &ServiceRequest, config: &CorsConfig) -> Response {
    if !config.allows_method(&request.method) {
        return Response::error(
            ErrorCode::MethodNotAllowed,
            format!("Method {} is not allowed", request.method),
        );
    }

    match request.path.as_str() {
        path::HEALTH => routes::health(),
        path::ROOT => routes::root(request),
        path::ALL_JSON => routes::all_json(request),
        path::CF_JSON => routes::cf_json(request),
        path::HEADERS => routes::headers_json(request),
        other => {
            log::debug!("no route for {other}");
            Response::error(ErrorCode::NotFound, format!("No route for {other}"))
        }
    }
}

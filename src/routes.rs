use crate::constants::method;
use crate::error::ErrorCode;
use crate::ip;
use crate::metadata::PlatformMetadata;
use crate::request::ServiceRequest;
use crate::response::Response;
use serde_json::{Map, Value, json};

pub fn health() -> Response {
    Response::json(200, json!({ "msg": "Server up and running" }))
}

/// `/` — the client address as plain text, or the sentinel.
pub fn root(request: &ServiceRequest) -> Response {
    Response::text(200, ip::sanitize(request.client_ip().unwrap_or_default()))
}

/// `/all.json` — sanitized IP, user agent and the platform metadata in one
/// object. GET and HEAD only; missing metadata is reported before the
/// method branch so HEAD sees it too.
pub fn all_json(request: &ServiceRequest) -> Response {
    if request.method != method::GET && request.method != method::HEAD {
        return Response::error(
            ErrorCode::MethodNotAllowed,
            format!("Method {} is not allowed here; use GET or HEAD", request.method),
        );
    }

    let Some(metadata) = &request.metadata else {
        log::warn!("platform metadata absent on {}", request.path);
        return Response::error(
            ErrorCode::EnvPlatformMetadataMissing,
            "The platform did not attach request metadata",
        );
    };

    if request.method == method::HEAD {
        // Headers only; skip IP and user-agent work entirely.
        return Response::json_head(200);
    }

    match client_info(request, metadata) {
        Ok(info) => Response::json(200, info),
        Err(err) => {
            log::error!("failed to assemble client info: {err}");
            Response::error(ErrorCode::InternalServerError, "Something went wrong")
        }
    }
}

/// `/cf.json` — the raw platform metadata, `{}` when none was attached.
pub fn cf_json(request: &ServiceRequest) -> Response {
    let value = request
        .metadata
        .as_ref()
        .and_then(|metadata| serde_json::to_value(metadata).ok())
        .unwrap_or_else(|| Value::Object(Map::new()));
    Response::json(200, value)
}

/// `/headers` — every request header as a JSON object.
pub fn headers_json(request: &ServiceRequest) -> Response {
    let mut map = Map::new();
    for (name, value) in request.headers.iter() {
        map.insert(name.to_string(), Value::String(value.to_string()));
    }
    Response::json(200, Value::Object(map))
}

fn client_info(
    request: &ServiceRequest,
    metadata: &PlatformMetadata,
) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(metadata)?;
    if let Value::Object(map) = &mut value {
        map.insert(
            "ip".into(),
            Value::String(ip::sanitize(request.client_ip().unwrap_or_default())),
        );
        map.insert(
            "userAgent".into(),
            Value::String(request.user_agent().unwrap_or(ip::UNKNOWN).to_string()),
        );
    }
    Ok(value)
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

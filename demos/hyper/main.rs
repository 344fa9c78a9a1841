use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::header::{HeaderName, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use edgeinfo::{CorsConfig, EdgeService, Origin, PlatformMetadata, ServiceRequest};

/// Stands in for the edge platform: reads metadata once from the
/// EDGEINFO_METADATA env var (JSON) and attaches it to every request.
fn platform_metadata() -> Option<PlatformMetadata> {
    let raw = std::env::var("EDGEINFO_METADATA").ok()?;
    match serde_json::from_str(&raw) {
        Ok(metadata) => Some(metadata),
        Err(err) => {
            eprintln!("ignoring malformed EDGEINFO_METADATA: {err}");
            None
        }
    }
}

fn to_service_request(req: &Request<Incoming>, metadata: Option<PlatformMetadata>) -> ServiceRequest {
    let mut request = ServiceRequest::new(req.method().as_str(), req.uri().path());
    for (name, value) in req.headers() {
        if let Ok(value) = value.to_str() {
            request.headers.set(name.as_str(), value);
        }
    }
    request.metadata = metadata;
    request
}

fn to_hyper_response(response: edgeinfo::Response) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(response.status);
    if let Some(map) = builder.headers_mut() {
        for (name, value) in response.headers.iter() {
            if let (Ok(name), Ok(value)) =
                (HeaderName::try_from(name), HeaderValue::from_str(value))
            {
                map.insert(name, value);
            }
        }
    }
    builder
        .body(Full::new(Bytes::from(response.body_bytes())))
        .expect("valid response")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    env_logger::init();

    let service = Arc::new(
        EdgeService::new(CorsConfig {
            origin: Origin::any(),
            ..CorsConfig::default()
        })
        .expect("valid service configuration"),
    );
    let metadata = platform_metadata();

    let addr: SocketAddr = "127.0.0.1:5003".parse()?;
    let listener = TcpListener::bind(addr).await?;
    println!("edgeinfo demo running on http://{addr}");

    loop {
        let (stream, _) = listener.accept().await?;
        let service = Arc::clone(&service);
        let metadata = metadata.clone();
        let io = TokioIo::new(stream);

        tokio::spawn(async move {
            let handler = service_fn(move |req: Request<Incoming>| {
                let service = Arc::clone(&service);
                let metadata = metadata.clone();
                async move {
                    let request = to_service_request(&req, metadata);
                    Ok::<_, std::convert::Infallible>(to_hyper_response(service.handle(&request)))
                }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, handler).await {
                eprintln!("connection error: {err}");
            }
        });
    }
}

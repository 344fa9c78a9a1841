pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
    pub const ALLOW: &str = "Allow";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const CACHE_CONTROL: &str = "Cache-Control";
    pub const X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
    pub const CF_CONNECTING_IP: &str = "CF-Connecting-IP";
    pub const USER_AGENT: &str = "User-Agent";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod path {
    pub const ROOT: &str = "/";
    pub const HEALTH: &str = "/health";
    pub const ALL_JSON: &str = "/all.json";
    pub const CF_JSON: &str = "/cf.json";
    pub const HEADERS: &str = "/headers";
}

pub mod content_type {
    pub const JSON: &str = "application/json;charset=UTF-8";
    pub const TEXT: &str = "text/plain;charset=UTF-8";
}

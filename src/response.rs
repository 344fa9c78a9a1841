use crate::constants::{content_type, header};
use crate::error::ErrorCode;
use crate::headers::HeaderCollection;
use serde_json::{Value, json};

/// Transport-agnostic response value. The host adapter converts it into
/// whatever its HTTP stack expects.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: HeaderCollection,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Text(String),
    Json(Value),
}

impl Response {
    /// A JSON response with the fixed header set every JSON route shares.
    pub fn json(status: u16, value: Value) -> Self {
        Self {
            status,
            headers: json_headers(),
            body: Body::Json(value),
        }
    }

    /// JSON headers without a body, for HEAD answers.
    pub fn json_head(status: u16) -> Self {
        Self {
            status,
            headers: json_headers(),
            body: Body::Empty,
        }
    }

    /// A structured error body: `{"code": ..., "message": ...}` with the
    /// status dictated by the code.
    pub fn error<S: Into<String>>(code: ErrorCode, message: S) -> Self {
        Self::json(
            code.status(),
            json!({
                "code": code.as_str(),
                "message": message.into(),
            }),
        )
    }

    pub fn text<S: Into<String>>(status: u16, body: S) -> Self {
        let mut headers = HeaderCollection::new();
        headers.set(header::CONTENT_TYPE, content_type::TEXT);
        Self {
            status,
            headers,
            body: Body::Text(body.into()),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            headers: HeaderCollection::new(),
            body: Body::Empty,
        }
    }

    /// Adds an extra field to a JSON object body; no-op for other bodies.
    pub fn with_field<S: Into<String>, V: Into<Value>>(mut self, key: S, value: V) -> Self {
        if let Body::Json(Value::Object(map)) = &mut self.body {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Serialized body bytes, for adapters that need raw output.
    pub fn body_bytes(&self) -> Vec<u8> {
        match &self.body {
            Body::Empty => Vec::new(),
            Body::Text(text) => text.clone().into_bytes(),
            Body::Json(value) => value.to_string().into_bytes(),
        }
    }
}

fn json_headers() -> HeaderCollection {
    let mut headers = HeaderCollection::new();
    headers.set(header::CONTENT_TYPE, content_type::JSON);
    headers.set(header::CACHE_CONTROL, "no-store");
    headers.set(header::X_CONTENT_TYPE_OPTIONS, "nosniff");
    headers
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

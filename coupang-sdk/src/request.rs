//! Request descriptors.
//!
//! A [`Request`] names one vendor call before it is signed: the method, the
//! path, and at most one of a query string or a JSON body. Endpoint functions
//! in [`crate::endpoints`] build these; the client signs and sends them.

use std::fmt;

use bytes::Bytes;
use serde::Serialize;

/// HTTP methods accepted by the vendor gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What travels alongside the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Path only.
    None,
    /// URL-encoded query string, without the leading `?`.
    Query(String),
    /// UTF-8 JSON body.
    Body(Bytes),
}

/// A declarative description of one vendor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    path: String,
    payload: Payload,
}

impl Request {
    /// A path-only request.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            payload: Payload::None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Attach a query string. An empty query leaves the request path-only.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.payload = if query.is_empty() {
            Payload::None
        } else {
            Payload::Query(query)
        };
        self
    }

    /// Attach a pre-encoded JSON body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.payload = Payload::Body(body.into());
        self
    }

    /// Serialize `body` to JSON and attach it.
    pub fn with_json<T: Serialize + ?Sized>(self, body: &T) -> Result<Self, serde_json::Error> {
        let bytes = serde_json::to_vec(body)?;
        Ok(self.with_body(bytes))
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn query(&self) -> Option<&str> {
        match &self.payload {
            Payload::Query(query) => Some(query),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&Bytes> {
        match &self.payload {
            Payload::Body(body) => Some(body),
            _ => None,
        }
    }

    /// Path plus `?query` when a query is present.
    pub fn path_and_query(&self) -> String {
        match self.query() {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

/// Incremental builder for URL-encoded query strings.
///
/// Keys and values are percent-encoded; pairs keep insertion order so the
/// string that is signed is the string that is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.pairs.push((key.to_owned(), value.to_string()));
        self
    }

    /// Push `key=value` only when `value` is present.
    pub fn push_opt<V: fmt::Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl From<QueryString> for String {
    fn from(query: QueryString) -> Self {
        query.encode()
    }
}

/// Percent-encode a single dynamic path segment.
///
/// `.` is left as is, so a value of `.` or `..` still yields a dot segment;
/// the client refuses to send such paths (see [`has_dot_segment`]).
pub fn segment(value: impl fmt::Display) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}

/// Whether `path` has a segment that URL parsing treats as `.` or `..`.
///
/// `%2e` counts as a dot, case-insensitively.
pub fn has_dot_segment(path: &str) -> bool {
    path.split('/').any(|segment| {
        let segment = segment.to_ascii_lowercase().replace("%2e", ".");
        segment == "." || segment == ".."
    })
}

//! Request/response model shared by every operation and every transport.

use bytes::Bytes;
use serde_json::Value;
use std::fmt;

/// HTTP verbs used by the admin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
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

/// Endpoint path relative to the API root, kept as raw segments.
///
/// Identifiers are stored exactly as given. Encoding each segment for the wire
/// is the transport's job, so an id such as `a/b` remains a single segment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fixed or caller-supplied segment.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// A file handed to a multipart endpoint.
///
/// Nothing about the content is checked client-side; empty or odd files are
/// forwarded and left for the backend to judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub bytes: Bytes,
    /// Per-part content type. The request-level header is always generated by the HTTP client.
    pub mime: Option<String>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read a file from disk, using its final path component as the file name.
    pub async fn from_path(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(file_name, bytes))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// Form with a single `file` field.
    Multipart(FilePart),
}

/// How the transport should treat the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    #[default]
    Json,
    /// Keep the payload as raw bytes; never attempt to decode it.
    Binary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: ApiPath,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub response: ResponseMode,
}

impl ApiRequest {
    pub fn new(method: Method, path: ApiPath) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: RequestBody::Empty,
            response: ResponseMode::Json,
        }
    }

    pub fn get(path: ApiPath) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: ApiPath) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: ApiPath) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: ApiPath) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, file: FilePart) -> Self {
        self.body = RequestBody::Multipart(file);
        self
    }

    pub fn binary_response(mut self) -> Self {
        self.response = ResponseMode::Binary;
        self
    }
}

/// Raw payload returned by binary endpoints (downloads, exports).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryPayload {
    pub bytes: Bytes,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Binary(BinaryPayload),
}

impl ApiResponse {
    pub fn into_json(self) -> crate::Result<Value> {
        match self {
            ApiResponse::Json(v) => Ok(v),
            ApiResponse::Binary(_) => Err(crate::Error::UnexpectedResponse {
                expected: "json",
                context: crate::ErrorContext::new().with_details("transport returned binary payload"),
            }),
        }
    }

    pub fn into_binary(self) -> crate::Result<BinaryPayload> {
        match self {
            ApiResponse::Binary(b) => Ok(b),
            ApiResponse::Json(_) => Err(crate::Error::UnexpectedResponse {
                expected: "binary",
                context: crate::ErrorContext::new().with_details("transport returned decoded json"),
            }),
        }
    }
}

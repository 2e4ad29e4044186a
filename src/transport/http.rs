use super::request::{
    ApiRequest, ApiResponse, BinaryPayload, FilePart, Method, RequestBody, ResponseMode,
};
use super::{Transport, TransportError};
use crate::config::ClientConfig;
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderName, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::Proxy;
use tracing::{debug, warn};
use url::Url;

/// reqwest-backed [`Transport`] for the knowledge admin API.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    root_segments: Vec<String>,
    token: Option<String>,
}

impl HttpTransport {
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }

    /// Build a transport from `KB_ADMIN_*` environment settings.
    pub fn from_env() -> Result<Self> {
        HttpTransportBuilder::from_config(ClientConfig::from_env()).build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve the absolute URL for a request, percent-encoding every segment.
    ///
    /// A segment that is exactly `.` or `..` is refused: URL normalization
    /// would drop it (or its `%2E` spelling) and retarget the request at
    /// another endpoint.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        if let Some(dot) = request
            .path
            .segments()
            .iter()
            .find(|s| matches!(s.as_str(), "." | ".."))
        {
            return Err(Error::validation_with_context(
                format!("path segment {:?} cannot be addressed", dot),
                ErrorContext::new()
                    .with_field_path("request.path")
                    .with_details(request.path.to_string()),
            ));
        }

        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::configuration_with_context(
                    "base url cannot carry path segments",
                    ErrorContext::new()
                        .with_field_path("config.base_url")
                        .with_details(self.base_url.to_string()),
                )
            })?;
            segments.pop_if_empty();
            segments.extend(self.root_segments.iter());
            segments.extend(request.path.segments().iter());
        }
        Ok(url)
    }

    fn multipart_form(file: FilePart) -> Result<Form> {
        let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.file_name);
        if let Some(mime) = &file.mime {
            part = part.mime_str(mime).map_err(|e| {
                Error::validation_with_context(
                    format!("invalid mime type: {}", e),
                    ErrorContext::new()
                        .with_field_path("file.mime")
                        .with_details(mime.clone()),
                )
            })?;
        }
        Ok(Form::new().part("file", part))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request)?;
        debug!(
            method = %request.method,
            path = %request.path,
            mode = ?request.response,
            "kb admin request"
        );

        let mut req = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };

        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }

        req = match request.body {
            RequestBody::Empty => req,
            RequestBody::Json(body) => req.json(&body),
            // Content-Type (with boundary) is left to reqwest.
            RequestBody::Multipart(file) => req.multipart(Self::multipart_form(file)?),
        };

        req = req.header("x-request-id", uuid::Uuid::new_v4().to_string());

        let response = req
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, "failed to read error body");
                    format!("<failed to read error body: {}>", e)
                }
            };
            warn!(
                method = %request.method,
                path = %request.path,
                status = status.as_u16(),
                "kb admin request failed"
            );
            return Err(Error::Remote {
                status: status.as_u16(),
                message,
            });
        }

        match request.response {
            ResponseMode::Binary => {
                let header = |name: HeaderName| {
                    response
                        .headers()
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(String::from)
                };
                let content_type = header(CONTENT_TYPE);
                let content_disposition = header(CONTENT_DISPOSITION);
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| Error::Transport(TransportError::Http(e)))?;
                Ok(ApiResponse::Binary(BinaryPayload {
                    bytes,
                    content_type,
                    content_disposition,
                }))
            }
            ResponseMode::Json => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| Error::Transport(TransportError::Http(e)))?;
                if bytes.is_empty() {
                    return Ok(ApiResponse::Json(serde_json::Value::Null));
                }
                Ok(ApiResponse::Json(serde_json::from_slice(&bytes)?))
            }
        }
    }
}

pub struct HttpTransportBuilder {
    config: ClientConfig,
}

impl HttpTransportBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn api_root(mut self, root: impl Into<String>) -> Self {
        self.config.api_root = root.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.config.proxy_url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<HttpTransport> {
        let config = self.config;
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base url: {}", e),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(config.base_url.clone()),
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                "base url cannot carry path segments",
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(config.base_url.clone()),
            ));
        }

        let root_segments = config
            .api_root
            .split('/')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(config.pool_idle_timeout()));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy url: {}", e),
                    ErrorContext::new().with_field_path("config.proxy_url"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(HttpTransport {
            client,
            base_url,
            root_segments,
            token: config.token,
        })
    }
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ApiPath;

    fn transport(base: &str, root: &str) -> HttpTransport {
        HttpTransport::builder()
            .base_url(base)
            .api_root(root)
            .build()
            .unwrap()
    }

    #[test]
    fn url_joins_root_and_encodes_segments() {
        let t = transport("http://localhost:5050", "/api/knowledge");
        let req = ApiRequest::get(
            ApiPath::new()
                .segment("databases")
                .segment("kb 1/a?b#c")
                .segment("query-params"),
        );
        assert_eq!(
            t.url_for(&req).unwrap().as_str(),
            "http://localhost:5050/api/knowledge/databases/kb%201%2Fa%3Fb%23c/query-params"
        );
    }

    #[test]
    fn dot_segments_never_retarget_the_request() {
        let t = transport("http://localhost:5050", "/api/knowledge");
        for path in [
            ApiPath::new().segment("databases").segment(".."),
            ApiPath::new().segment("databases").segment("."),
            ApiPath::new()
                .segment("mysql")
                .segment("tables")
                .segment("..")
                .segment("data"),
        ] {
            let err = t.url_for(&ApiRequest::delete(path)).unwrap_err();
            assert!(matches!(err, Error::Validation { .. }));
            assert_eq!(
                err.context().and_then(|c| c.field_path.as_deref()),
                Some("request.path")
            );
        }

        // Dots inside a longer identifier are ordinary characters.
        let req = ApiRequest::get(
            ApiPath::new()
                .segment("databases")
                .segment("...")
                .segment("v1.2"),
        );
        assert_eq!(
            t.url_for(&req).unwrap().as_str(),
            "http://localhost:5050/api/knowledge/databases/.../v1.2"
        );

        let req = ApiRequest::get(ApiPath::new().segment("databases").segment("50%off"));
        assert_eq!(
            t.url_for(&req).unwrap().as_str(),
            "http://localhost:5050/api/knowledge/databases/50%25off"
        );
    }

    #[test]
    fn unparseable_mime_is_a_validation_error() {
        let file = FilePart::new("rows.csv", "a,b\n1,2").with_mime("not a mime");
        let err = HttpTransport::multipart_form(file).err().unwrap();
        assert!(matches!(err, Error::Validation { .. }));
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("file.mime")
        );

        let file = FilePart::new("rows.csv", "a,b\n1,2").with_mime("text/csv");
        assert!(HttpTransport::multipart_form(file).is_ok());
    }

    #[test]
    fn base_path_and_trailing_slash_are_preserved() {
        let t = transport("http://localhost:5050/gateway/", "api/knowledge/");
        let req = ApiRequest::get(ApiPath::new().segment("stats"));
        assert_eq!(
            t.url_for(&req).unwrap().as_str(),
            "http://localhost:5050/gateway/api/knowledge/stats"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        let err = HttpTransport::builder()
            .base_url("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, Error::Configuration { .. }));

        let err = HttpTransport::builder()
            .base_url("mailto:admin@example.com")
            .build()
            .err()
            .unwrap();
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("config.base_url")
        );
    }
}

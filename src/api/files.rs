use super::root;
use crate::transport::{ApiRequest, FilePart};
use crate::types::UploadOptions;
use crate::{KnowledgeAdminClient, Result};
use serde_json::Value;

/// File staging for later ingestion.
pub struct FileApi<'a> {
    client: &'a KnowledgeAdminClient,
}

impl<'a> FileApi<'a> {
    pub(crate) fn new(client: &'a KnowledgeAdminClient) -> Self {
        Self { client }
    }

    /// `POST /files/upload[?db_id=..]` as multipart field `file`.
    ///
    /// An empty `db_id` is treated like `None`.
    pub async fn upload(&self, file: FilePart, db_id: Option<&str>) -> Result<Value> {
        let options = UploadOptions {
            db_id: db_id.map(String::from),
            allow_jsonl: false,
        };
        self.upload_with(file, &options).await
    }

    pub async fn upload_with(&self, file: FilePart, options: &UploadOptions) -> Result<Value> {
        let mut request = ApiRequest::post(root("files").segment("upload"));
        if let Some(db_id) = options.db_id.as_deref().filter(|id| !id.is_empty()) {
            request = request.query_param("db_id", db_id);
        }
        if options.allow_jsonl {
            request = request.query_param("allow_jsonl", true);
        }
        self.client.send_json(request.multipart(file)).await
    }

    /// `GET /files/supported-types`
    pub async fn supported_types(&self) -> Result<Value> {
        self.client
            .send_json(ApiRequest::get(root("files").segment("supported-types")))
            .await
    }

    /// `POST /files/markdown`: convert a document to markdown without storing it.
    pub async fn to_markdown(&self, file: FilePart) -> Result<Value> {
        self.client
            .send_json(ApiRequest::post(root("files").segment("markdown")).multipart(file))
            .await
    }
}

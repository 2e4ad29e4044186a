use super::{body, database, document};
use crate::transport::{ApiRequest, BinaryPayload};
use crate::types::ParamBag;
use crate::{KnowledgeAdminClient, Result};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct AddDocumentsBody<'a, I> {
    items: &'a [I],
    params: &'a ParamBag,
}

/// Document ingestion and lookup within one knowledge database.
pub struct DocumentApi<'a> {
    client: &'a KnowledgeAdminClient,
}

impl<'a> DocumentApi<'a> {
    pub(crate) fn new(client: &'a KnowledgeAdminClient) -> Self {
        Self { client }
    }

    /// `POST /databases/{db_id}/documents` with body `{"items": .., "params": ..}`.
    ///
    /// `items` keeps its order; `params` controls ingestion (chunking, content type)
    /// and is not inspected.
    pub async fn add<I: Serialize>(
        &self,
        db_id: &str,
        items: &[I],
        params: &ParamBag,
    ) -> Result<Value> {
        let request = ApiRequest::post(database(db_id).segment("documents"))
            .json(body(&AddDocumentsBody { items, params })?);
        self.client.send_json(request).await
    }

    /// Same as [`DocumentApi::add`] with an empty `params` object.
    pub async fn add_with_defaults<I: Serialize>(&self, db_id: &str, items: &[I]) -> Result<Value> {
        self.add(db_id, items, &ParamBag::new()).await
    }

    /// `GET /databases/{db_id}/documents/{doc_id}`: metadata plus content.
    pub async fn info(&self, db_id: &str, doc_id: &str) -> Result<Value> {
        self.client
            .send_json(ApiRequest::get(document(db_id, doc_id)))
            .await
    }

    /// Metadata only.
    pub async fn basic_info(&self, db_id: &str, doc_id: &str) -> Result<Value> {
        self.client
            .send_json(ApiRequest::get(document(db_id, doc_id).segment("basic")))
            .await
    }

    /// Chunks and lines only.
    pub async fn content(&self, db_id: &str, doc_id: &str) -> Result<Value> {
        self.client
            .send_json(ApiRequest::get(document(db_id, doc_id).segment("content")))
            .await
    }

    pub async fn delete(&self, db_id: &str, doc_id: &str) -> Result<Value> {
        self.client
            .send_json(ApiRequest::delete(document(db_id, doc_id)))
            .await
    }

    /// Original file bytes. The response is never decoded.
    pub async fn download(&self, db_id: &str, doc_id: &str) -> Result<BinaryPayload> {
        self.client
            .send_binary(ApiRequest::get(document(db_id, doc_id).segment("download")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::recording_client;
    use crate::transport::{Method, RequestBody, ResponseMode};
    use crate::types::ParamBag;
    use serde_json::json;

    #[tokio::test]
    async fn add_sends_items_and_params_exactly() {
        let (client, transport) = recording_client();
        client
            .documents()
            .add("kb1", &["/up/a.pdf", "/up/b.md"], &ParamBag::new())
            .await
            .unwrap();

        let req = transport.last();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path.to_string(), "/databases/kb1/documents");
        assert_eq!(
            req.body,
            RequestBody::Json(json!({"items": ["/up/a.pdf", "/up/b.md"], "params": {}}))
        );
    }

    #[tokio::test]
    async fn add_keeps_caller_params_untouched() {
        let (client, transport) = recording_client();
        let mut params = ParamBag::new();
        params.insert("content_type".into(), json!("url"));
        params.insert("chunk_size".into(), json!(1000));
        let items = vec![json!("https://example.com/guide")];

        client.documents().add("kb1", &items, &params).await.unwrap();
        assert_eq!(
            transport.last().body,
            RequestBody::Json(json!({
                "items": ["https://example.com/guide"],
                "params": {"content_type": "url", "chunk_size": 1000}
            }))
        );

        client.documents().add_with_defaults("kb1", &items).await.unwrap();
        assert_eq!(
            transport.last().body,
            RequestBody::Json(json!({"items": ["https://example.com/guide"], "params": {}}))
        );
    }

    #[tokio::test]
    async fn lookup_and_delete_paths() {
        let (client, transport) = recording_client();
        let docs = client.documents();
        docs.info("kb1", "file_9d").await.unwrap();
        docs.basic_info("kb1", "file_9d").await.unwrap();
        docs.content("kb1", "file_9d").await.unwrap();
        docs.delete("kb1", "file_9d").await.unwrap();

        let seen: Vec<_> = transport
            .requests()
            .into_iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect();
        assert_eq!(
            seen,
            [
                "GET /databases/kb1/documents/file_9d",
                "GET /databases/kb1/documents/file_9d/basic",
                "GET /databases/kb1/documents/file_9d/content",
                "DELETE /databases/kb1/documents/file_9d",
            ]
        );
    }

    #[tokio::test]
    async fn download_requests_binary_mode() {
        let (client, transport) = recording_client();
        let file = client.documents().download("kb1", "file_9d").await.unwrap();
        assert_eq!(file.bytes.as_ref(), b"%PDF-1.4");

        let req = transport.last();
        assert_eq!(req.path.to_string(), "/databases/kb1/documents/file_9d/download");
        assert_eq!(req.response, ResponseMode::Binary);
        assert_eq!(req.body, RequestBody::Empty);
    }
}

use super::root;
use crate::transport::ApiRequest;
use crate::{KnowledgeAdminClient, Result};
use serde_json::Value;

/// Readiness of the embedding models the backend knows about.
pub struct EmbeddingApi<'a> {
    client: &'a KnowledgeAdminClient,
}

impl<'a> EmbeddingApi<'a> {
    pub(crate) fn new(client: &'a KnowledgeAdminClient) -> Self {
        Self { client }
    }

    /// `GET /embedding-models/{model_id}/status`
    pub async fn status(&self, model_id: &str) -> Result<Value> {
        let path = root("embedding-models").segment(model_id).segment("status");
        self.client.send_json(ApiRequest::get(path)).await
    }

    /// `GET /embedding-models/status`: model id to status for every model.
    pub async fn all_status(&self) -> Result<Value> {
        self.client
            .send_json(ApiRequest::get(root("embedding-models").segment("status")))
            .await
    }
}

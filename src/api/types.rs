use super::root;
use crate::transport::ApiRequest;
use crate::{KnowledgeAdminClient, Result};
use serde_json::Value;

/// Backend capabilities and aggregate counters.
pub struct TypeApi<'a> {
    client: &'a KnowledgeAdminClient,
}

impl<'a> TypeApi<'a> {
    pub(crate) fn new(client: &'a KnowledgeAdminClient) -> Self {
        Self { client }
    }

    /// `GET /types`: supported storage/retrieval strategies.
    pub async fn kb_types(&self) -> Result<Value> {
        self.client.send_json(ApiRequest::get(root("types"))).await
    }

    /// `GET /stats`
    pub async fn statistics(&self) -> Result<Value> {
        self.client.send_json(ApiRequest::get(root("stats"))).await
    }
}

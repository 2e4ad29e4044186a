//! Client facade for the knowledge admin API.
//!
//! The client holds nothing but the injected transport. Each accessor returns a
//! borrowed namespace whose operations map one-to-one onto backend endpoints.

use crate::api::{
    DatabaseApi, DocumentApi, EmbeddingApi, FileApi, QueryApi, TableApi, TypeApi,
};
use crate::transport::{ApiRequest, BinaryPayload, HttpTransport, Transport};
use crate::Result;
use serde_json::Value;
use std::sync::Arc;

/// Stateless entry point; cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct KnowledgeAdminClient {
    transport: Arc<dyn Transport>,
}

impl KnowledgeAdminClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self::new(Arc::new(transport))
    }

    /// Build a client over [`HttpTransport`] configured from `KB_ADMIN_*` variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::from_env()?))
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn databases(&self) -> DatabaseApi<'_> {
        DatabaseApi::new(self)
    }

    pub fn documents(&self) -> DocumentApi<'_> {
        DocumentApi::new(self)
    }

    pub fn queries(&self) -> QueryApi<'_> {
        QueryApi::new(self)
    }

    pub fn files(&self) -> FileApi<'_> {
        FileApi::new(self)
    }

    pub fn types(&self) -> TypeApi<'_> {
        TypeApi::new(self)
    }

    pub fn embedding_models(&self) -> EmbeddingApi<'_> {
        EmbeddingApi::new(self)
    }

    pub fn tables(&self) -> TableApi<'_> {
        TableApi::new(self)
    }

    pub(crate) async fn send_json(&self, request: ApiRequest) -> Result<Value> {
        self.transport.execute(request).await?.into_json()
    }

    pub(crate) async fn send_binary(&self, request: ApiRequest) -> Result<BinaryPayload> {
        self.transport
            .execute(request.binary_response())
            .await?
            .into_binary()
    }
}

impl std::fmt::Debug for KnowledgeAdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeAdminClient").finish_non_exhaustive()
    }
}

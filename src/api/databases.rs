use super::{body, database, root};
use crate::transport::{ApiRequest, BinaryPayload};
use crate::types::ExportFormat;
use crate::{KnowledgeAdminClient, Result};
use serde::Serialize;
use serde_json::Value;

/// Knowledge database CRUD.
pub struct DatabaseApi<'a> {
    client: &'a KnowledgeAdminClient,
}

impl<'a> DatabaseApi<'a> {
    pub(crate) fn new(client: &'a KnowledgeAdminClient) -> Self {
        Self { client }
    }

    /// `GET /databases`
    pub async fn list(&self) -> Result<Value> {
        self.client.send_json(ApiRequest::get(root("databases"))).await
    }

    /// `POST /databases`; `data` is sent as-is, see [`crate::types::CreateDatabaseRequest`].
    pub async fn create<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        self.client
            .send_json(ApiRequest::post(root("databases")).json(body(data)?))
            .await
    }

    /// `GET /databases/{db_id}`
    pub async fn get(&self, db_id: &str) -> Result<Value> {
        self.client.send_json(ApiRequest::get(database(db_id))).await
    }

    /// `PUT /databases/{db_id}` with a partial update body.
    pub async fn update<T: Serialize + ?Sized>(&self, db_id: &str, patch: &T) -> Result<Value> {
        self.client
            .send_json(ApiRequest::put(database(db_id)).json(body(patch)?))
            .await
    }

    /// `DELETE /databases/{db_id}`
    pub async fn delete(&self, db_id: &str) -> Result<Value> {
        self.client.send_json(ApiRequest::delete(database(db_id))).await
    }

    /// `GET /databases/{db_id}/export` as a file.
    pub async fn export(
        &self,
        db_id: &str,
        format: ExportFormat,
        include_vectors: bool,
    ) -> Result<BinaryPayload> {
        let request = ApiRequest::get(database(db_id).segment("export"))
            .query_param("format", format)
            .query_param("include_vectors", include_vectors);
        self.client.send_binary(request).await
    }
}

use super::{body, database};
use crate::transport::ApiRequest;
use crate::types::ParamBag;
use crate::{KnowledgeAdminClient, Result};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
    meta: &'a ParamBag,
}

/// Retrieval against a knowledge database.
///
/// `meta` carries backend-defined retrieval options (top-k, filters, rerank
/// switches); no keys are added or checked here.
pub struct QueryApi<'a> {
    client: &'a KnowledgeAdminClient,
}

impl<'a> QueryApi<'a> {
    pub(crate) fn new(client: &'a KnowledgeAdminClient) -> Self {
        Self { client }
    }

    /// `POST /databases/{db_id}/query`
    pub async fn query(&self, db_id: &str, query: &str, meta: &ParamBag) -> Result<Value> {
        self.post(db_id, "query", query, meta).await
    }

    /// `POST /databases/{db_id}/query-test`: tuning path, not recorded as usage.
    pub async fn query_test(&self, db_id: &str, query: &str, meta: &ParamBag) -> Result<Value> {
        self.post(db_id, "query-test", query, meta).await
    }

    /// `GET /databases/{db_id}/query-params`: options recognized for this database's type.
    pub async fn params(&self, db_id: &str) -> Result<Value> {
        self.client
            .send_json(ApiRequest::get(database(db_id).segment("query-params")))
            .await
    }

    async fn post(&self, db_id: &str, endpoint: &str, query: &str, meta: &ParamBag) -> Result<Value> {
        let request = ApiRequest::post(database(db_id).segment(endpoint))
            .json(body(&QueryBody { query, meta })?);
        self.client.send_json(request).await
    }
}

//! Operation namespaces, one per endpoint group of the knowledge admin router.
//!
//! | Namespace | Prefix |
//! |-----------|--------|
//! | [`DatabaseApi`] | `/databases` |
//! | [`DocumentApi`] | `/databases/{db_id}/documents` |
//! | [`QueryApi`] | `/databases/{db_id}/query*` |
//! | [`FileApi`] | `/files` |
//! | [`TypeApi`] | `/types`, `/stats` |
//! | [`EmbeddingApi`] | `/embedding-models` |
//! | [`TableApi`] | `/mysql` |

mod databases;
mod documents;
mod embedding;
mod files;
mod query;
mod tables;
mod types;

pub use databases::DatabaseApi;
pub use documents::DocumentApi;
pub use embedding::EmbeddingApi;
pub use files::FileApi;
pub use query::QueryApi;
pub use tables::TableApi;
pub use types::TypeApi;

use crate::transport::ApiPath;
use crate::Result;
use serde::Serialize;
use serde_json::Value;

fn root(segment: &str) -> ApiPath {
    ApiPath::new().segment(segment)
}

fn database(db_id: &str) -> ApiPath {
    root("databases").segment(db_id)
}

fn document(db_id: &str, doc_id: &str) -> ApiPath {
    database(db_id).segment("documents").segment(doc_id)
}

fn body<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::transport::testing::RecordingTransport;
    use crate::KnowledgeAdminClient;

    pub(crate) fn recording_client() -> (KnowledgeAdminClient, RecordingTransport) {
        let transport = RecordingTransport::new();
        (KnowledgeAdminClient::with_transport(transport.clone()), transport)
    }
}

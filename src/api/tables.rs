use super::{body, root};
use crate::transport::{ApiPath, ApiRequest, FilePart};
use crate::types::Page;
use crate::{KnowledgeAdminClient, Result};
use serde::Serialize;
use serde_json::Value;

/// 外部关系型数据源（MySQL）表管理。
///
/// Independent of knowledge-database documents: tables are listed, paged,
/// previewed from spreadsheets and imported by name.
pub struct TableApi<'a> {
    client: &'a KnowledgeAdminClient,
}

fn table(table_name: &str) -> ApiPath {
    root("mysql").segment("tables").segment(table_name)
}

impl<'a> TableApi<'a> {
    pub(crate) fn new(client: &'a KnowledgeAdminClient) -> Self {
        Self { client }
    }

    /// `GET /mysql/tables`
    pub async fn list(&self) -> Result<Value> {
        self.client
            .send_json(ApiRequest::get(root("mysql").segment("tables")))
            .await
    }

    /// `GET /mysql/tables/{table_name}`: columns and row count.
    pub async fn info(&self, table_name: &str) -> Result<Value> {
        self.client.send_json(ApiRequest::get(table(table_name))).await
    }

    /// `GET /mysql/tables/{table_name}/data?offset=&limit=`
    pub async fn data(&self, table_name: &str, page: Page) -> Result<Value> {
        let request = ApiRequest::get(table(table_name).segment("data"))
            .query_param("offset", page.offset)
            .query_param("limit", page.limit);
        self.client.send_json(request).await
    }

    /// First 100 rows.
    pub async fn data_first_page(&self, table_name: &str) -> Result<Value> {
        self.data(table_name, Page::default()).await
    }

    /// `DELETE /mysql/tables/{table_name}`
    pub async fn delete(&self, table_name: &str) -> Result<Value> {
        self.client
            .send_json(ApiRequest::delete(table(table_name)))
            .await
    }

    /// `POST /mysql/preview`: inferred columns and rows of a CSV/XLSX file, nothing persisted.
    pub async fn preview(&self, file: FilePart) -> Result<Value> {
        self.client
            .send_json(ApiRequest::post(root("mysql").segment("preview")).multipart(file))
            .await
    }

    /// `POST /mysql/import`; see [`crate::types::ImportOptions`] for the usual body.
    pub async fn import<T: Serialize + ?Sized>(&self, options: &T) -> Result<Value> {
        self.client
            .send_json(ApiRequest::post(root("mysql").segment("import")).json(body(options)?))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::recording_client;
    use crate::transport::{FilePart, Method, RequestBody};
    use crate::types::{ImportOptions, Page};
    use futures::future::join_all;
    use serde_json::json;

    fn pairs(query: &[(String, String)]) -> Vec<(&str, &str)> {
        query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[tokio::test]
    async fn data_defaults_to_first_hundred_rows() {
        let (client, transport) = recording_client();
        client.tables().data_first_page("orders").await.unwrap();
        let req = transport.last();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path.to_string(), "/mysql/tables/orders/data");
        assert_eq!(pairs(&req.query), [("offset", "0"), ("limit", "100")]);
    }

    #[tokio::test]
    async fn data_uses_explicit_window() {
        let (client, transport) = recording_client();
        client
            .tables()
            .data("orders", Page::new(250, 25))
            .await
            .unwrap();
        assert_eq!(pairs(&transport.last().query), [("offset", "250"), ("limit", "25")]);
    }

    #[tokio::test]
    async fn table_crud_paths() {
        let (client, transport) = recording_client();
        client.tables().list().await.unwrap();
        client.tables().info("orders").await.unwrap();
        client.tables().delete("orders").await.unwrap();
        let seen: Vec<_> = transport
            .requests()
            .into_iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect();
        assert_eq!(
            seen,
            [
                "GET /mysql/tables",
                "GET /mysql/tables/orders",
                "DELETE /mysql/tables/orders",
            ]
        );
    }

    #[tokio::test]
    async fn preview_is_multipart_and_import_is_verbatim_json() {
        let (client, transport) = recording_client();
        let sheet = FilePart::new("sales.csv", &b"region,total\nnorth,12\n"[..]).with_mime("text/csv");
        client.tables().preview(sheet.clone()).await.unwrap();
        let req = transport.last();
        assert_eq!(req.path.to_string(), "/mysql/preview");
        assert_eq!(req.body, RequestBody::Multipart(sheet));

        let options = ImportOptions::new("/data/uploads/sales_ab12.csv", "sales").drop_if_exists(true);
        client.tables().import(&options).await.unwrap();
        let req = transport.last();
        assert_eq!(req.path.to_string(), "/mysql/import");
        assert_eq!(
            req.body,
            RequestBody::Json(json!({
                "file_path": "/data/uploads/sales_ab12.csv",
                "table_name": "sales",
                "create_table": true,
                "drop_if_exists": true,
                "batch_size": 1000
            }))
        );
    }

    #[tokio::test]
    async fn concurrent_calls_are_independent() {
        let (client, transport) = recording_client();
        let tables = client.tables();
        let names = ["a", "b", "c"];
        let results = join_all(names.iter().map(|n| tables.info(n))).await;
        assert!(results.iter().all(|r| r.is_ok()));

        let mut paths: Vec<_> = transport
            .requests()
            .into_iter()
            .map(|r| r.path.to_string())
            .collect();
        paths.sort();
        assert_eq!(paths, ["/mysql/tables/a", "/mysql/tables/b", "/mysql/tables/c"]);
    }
}

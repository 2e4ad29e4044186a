use super::ParamBag;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Body for `POST /databases`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDatabaseRequest {
    pub database_name: String,
    pub description: String,
    pub embed_model_name: String,
    #[serde(default = "default_kb_type")]
    pub kb_type: String,
    #[serde(default)]
    pub additional_params: ParamBag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_info: Option<Value>,
}

fn default_kb_type() -> String {
    "lightrag".to_string()
}

impl CreateDatabaseRequest {
    pub fn new(
        database_name: impl Into<String>,
        description: impl Into<String>,
        embed_model_name: impl Into<String>,
    ) -> Self {
        Self {
            database_name: database_name.into(),
            description: description.into(),
            embed_model_name: embed_model_name.into(),
            kb_type: default_kb_type(),
            additional_params: ParamBag::new(),
            llm_info: None,
        }
    }

    pub fn kb_type(mut self, kb_type: impl Into<String>) -> Self {
        self.kb_type = kb_type.into();
        self
    }

    pub fn additional_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.additional_params.insert(key.into(), value);
        self
    }

    pub fn llm_info(mut self, info: Value) -> Self {
        self.llm_info = Some(info);
        self
    }
}

/// Body for `PUT /databases/{db_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDatabaseRequest {
    pub name: String,
    pub description: String,
}

/// Body for `POST /mysql/import`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Server-side path returned by a previous upload.
    pub file_path: String,
    pub table_name: String,
    #[serde(default = "default_true")]
    pub create_table: bool,
    #[serde(default)]
    pub drop_if_exists: bool,
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
}

fn default_true() -> bool {
    true
}

fn default_batch_size() -> u32 {
    1000
}

impl ImportOptions {
    pub fn new(file_path: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            table_name: table_name.into(),
            create_table: true,
            drop_if_exists: false,
            batch_size: default_batch_size(),
        }
    }

    pub fn drop_if_exists(mut self, drop: bool) -> Self {
        self.drop_if_exists = drop;
        self
    }

    pub fn batch_size(mut self, size: u32) -> Self {
        self.batch_size = size;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
    Md,
    Txt,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Md => "md",
            ExportFormat::Txt => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row window for table data. Defaults to the first 100 rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Zero-based number of rows to skip.
    pub offset: u64,
    pub limit: u64,
}

impl Page {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Target database; `None` or empty stages the file in the shared upload area.
    pub db_id: Option<String>,
    /// Accept `.jsonl` files (backend only allows this for untargeted uploads).
    pub allow_jsonl: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_uses_backend_field_names() {
        let req = CreateDatabaseRequest::new("kb1", "product manuals", "siliconflow/BAAI/bge-m3")
            .additional_param("chunk_size", json!(512));
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "database_name": "kb1",
                "description": "product manuals",
                "embed_model_name": "siliconflow/BAAI/bge-m3",
                "kb_type": "lightrag",
                "additional_params": {"chunk_size": 512}
            })
        );
    }

    #[test]
    fn import_options_fill_backend_defaults() {
        let parsed: ImportOptions =
            serde_json::from_value(json!({"file_path": "/up/a.csv", "table_name": "sales"}))
                .unwrap();
        assert_eq!(parsed, ImportOptions::new("/up/a.csv", "sales"));
        assert!(parsed.create_table);
        assert!(!parsed.drop_if_exists);
        assert_eq!(parsed.batch_size, 1000);
    }

    #[test]
    fn default_page_is_first_hundred_rows() {
        assert_eq!(Page::default(), Page::new(0, 100));
    }

    #[test]
    fn export_format_wire_names() {
        assert_eq!(ExportFormat::default().to_string(), "csv");
        assert_eq!(serde_json::to_value(ExportFormat::Xlsx).unwrap(), json!("xlsx"));
    }
}

//! # kb-admin-client
//!
//! 知识库管理 API 的异步 Rust 客户端：数据库、文档、查询、文件、表格数据源。
//!
//! Async client for the knowledge-base admin API of a retrieval backend.
//!
//! ## Overview
//!
//! Every operation translates one application-level call ("list databases",
//! "add documents", "query knowledge base") into exactly one HTTP request and
//! returns the backend's answer unchanged. Identifiers are placed into their
//! path slot verbatim; parameter bags are forwarded without inspection; failures
//! come straight from the transport.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kb_admin_client::{KnowledgeAdminClient, ParamBag};
//! use kb_admin_client::transport::HttpTransport;
//!
//! #[tokio::main]
//! async fn main() -> kb_admin_client::Result<()> {
//!     let transport = HttpTransport::builder()
//!         .base_url("http://127.0.0.1:5050")
//!         .token("admin-token")
//!         .build()?;
//!     let client = KnowledgeAdminClient::with_transport(transport);
//!
//!     let databases = client.databases().list().await?;
//!     println!("{databases:#}");
//!
//!     let answer = client
//!         .queries()
//!         .query("kb_7f3a", "How do I rotate keys?", &ParamBag::new())
//!         .await?;
//!     println!("{answer:#}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Operation namespaces (databases, documents, query, files, types, embedding models, tables) |
//! | [`transport`] | Request model, [`transport::Transport`] seam and the reqwest implementation |
//! | [`config`] | Connection settings with `KB_ADMIN_*` env overrides |
//! | [`types`] | Parameter bags and typed request bodies |

pub mod api;
pub mod client;
pub mod config;
pub mod transport;
pub mod types;

pub use client::KnowledgeAdminClient;
pub use config::ClientConfig;
pub use transport::{BinaryPayload, FilePart, HttpTransport, Transport};
pub use types::{
    CreateDatabaseRequest, ExportFormat, ImportOptions, Page, ParamBag, UpdateDatabaseRequest,
    UploadOptions,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

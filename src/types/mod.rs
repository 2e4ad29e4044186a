//! 类型模块：知识库管理接口的请求体与参数类型。
//!
//! # Types Module
//!
//! Parameter bags (`meta`, `params`, import `options`) are owned by the backend
//! and change independently of this crate, so they stay open JSON maps. The
//! typed structs in [`requests`] are conveniences that serialize to the exact
//! bodies the backend expects; any `Serialize` value is accepted in their place.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ParamBag`] | Open key/value map forwarded verbatim |
//! | [`CreateDatabaseRequest`] | Body for database creation |
//! | [`UpdateDatabaseRequest`] | Body for database rename/description edits |
//! | [`ImportOptions`] | Body for tabular import |
//! | [`ExportFormat`] | File format for database export |
//! | [`Page`] | Offset/limit window for table rows |
//! | [`UploadOptions`] | Query flags for file upload |

pub mod requests;

pub use requests::{
    CreateDatabaseRequest, ExportFormat, ImportOptions, Page, UpdateDatabaseRequest,
    UploadOptions,
};

/// Loosely-typed parameter map, passed through without key inspection.
pub type ParamBag = serde_json::Map<String, serde_json::Value>;

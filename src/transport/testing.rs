//! In-crate transport double used by the operation namespace tests.

use super::{ApiRequest, ApiResponse, BinaryPayload, ResponseMode, Transport};
use crate::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Records every request and answers with a canned body.
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    reply: Option<Value>,
    fail_with: Option<u16>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn replying(reply: Value) -> Self {
        Self {
            reply: Some(reply),
            ..Self::default()
        }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> ApiRequest {
        self.requests().pop().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mode = request.response;
        self.requests.lock().unwrap().push(request);
        if let Some(status) = self.fail_with {
            return Err(Error::Remote {
                status,
                message: "canned failure".into(),
            });
        }
        Ok(match mode {
            ResponseMode::Json => ApiResponse::Json(self.reply.clone().unwrap_or(Value::Null)),
            ResponseMode::Binary => ApiResponse::Binary(BinaryPayload {
                bytes: Bytes::from_static(b"%PDF-1.4"),
                content_type: Some("application/pdf".into()),
                content_disposition: None,
            }),
        })
    }
}

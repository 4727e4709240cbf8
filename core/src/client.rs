//! Client for the RAG PDF question-answering API.
//!
//! # Design
//! `PdfQaClient` holds the immutable base URL and the per-operation timeout
//! configuration, and carries no other state between calls — the only
//! stateful thing in the system (the currently uploaded document) lives on
//! the server. Each operation is split into a `build_*` method producing an
//! `HttpRequest` as plain data and a shared `parse_response` consuming the
//! `HttpResponse`; the public blocking operations wire the two through the
//! transport. The split keeps every wire detail unit-testable without a
//! network.

use std::path::Path;

use url::form_urlencoded;
use uuid::Uuid;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport;
use crate::types::{ApiResponse, Timeouts};

/// Synchronous, stateless client for the PDF question-answering API.
///
/// All five operations block until the server responds or the configured
/// per-operation timeout elapses. A single attempt is made per call; any
/// HTTP status the server returns is a success at this layer and comes back
/// as an [`ApiResponse`] carrying the decoded body and the status code.
#[derive(Debug, Clone)]
pub struct PdfQaClient {
    base_url: String,
    timeouts: Timeouts,
}

impl PdfQaClient {
    /// Client with the default timeouts (120 s upload, 60 s ask, 10 s probes).
    pub fn new(base_url: &str) -> Self {
        Self::with_timeouts(base_url, Timeouts::default())
    }

    pub fn with_timeouts(base_url: &str, timeouts: Timeouts) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeouts,
        }
    }

    /// Upload a local PDF for server-side processing.
    ///
    /// Fails with [`ClientError::PdfNotFound`] — without any network call —
    /// when the path does not exist.
    pub fn upload_pdf(&self, path: impl AsRef<Path>) -> Result<ApiResponse, ClientError> {
        let req = self.build_upload_pdf(path.as_ref())?;
        Self::parse_response(transport::execute(&req)?)
    }

    /// Ask a question about the currently uploaded document.
    pub fn ask_question(&self, question: &str) -> Result<ApiResponse, ClientError> {
        let req = self.build_ask_question(question);
        Self::parse_response(transport::execute(&req)?)
    }

    /// Probe the service's health endpoint.
    pub fn check_health(&self) -> Result<ApiResponse, ClientError> {
        let req = self.build_check_health();
        Self::parse_response(transport::execute(&req)?)
    }

    /// Fetch the current system status (whether a document is loaded).
    pub fn get_status(&self) -> Result<ApiResponse, ClientError> {
        let req = self.build_get_status();
        Self::parse_response(transport::execute(&req)?)
    }

    /// Clear the server-side document so a new PDF can be uploaded.
    pub fn reset_system(&self) -> Result<ApiResponse, ClientError> {
        let req = self.build_reset_system();
        Self::parse_response(transport::execute(&req)?)
    }

    pub fn build_upload_pdf(&self, path: &Path) -> Result<HttpRequest, ClientError> {
        let content = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ClientError::PdfNotFound {
                path: path.to_path_buf(),
            },
            _ => ClientError::FileRead {
                path: path.to_path_buf(),
                detail: e.to_string(),
            },
        })?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.pdf");

        let boundary = Uuid::new_v4().simple().to_string();
        let body = multipart_file_body(&boundary, filename, &content);

        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/upload_pdf/", self.base_url),
            headers: vec![(
                "content-type".to_string(),
                format!("multipart/form-data; boundary={boundary}"),
            )],
            body: Some(body),
            timeout: self.timeouts.upload,
        })
    }

    pub fn build_ask_question(&self, question: &str) -> HttpRequest {
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("question", question)
            .finish();
        HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/ask/", self.base_url),
            headers: vec![(
                "content-type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            )],
            body: Some(body.into_bytes()),
            timeout: self.timeouts.ask,
        }
    }

    pub fn build_check_health(&self) -> HttpRequest {
        // No trailing slash — the legacy route is registered without one.
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/health", self.base_url),
            headers: Vec::new(),
            body: None,
            timeout: self.timeouts.probe,
        }
    }

    pub fn build_get_status(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/status/", self.base_url),
            headers: Vec::new(),
            body: None,
            timeout: self.timeouts.probe,
        }
    }

    pub fn build_reset_system(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/reset/", self.base_url),
            headers: Vec::new(),
            body: None,
            timeout: self.timeouts.probe,
        }
    }

    /// Decode a completed response. Any HTTP status is accepted; only an
    /// undecodable body is an error.
    pub fn parse_response(response: HttpResponse) -> Result<ApiResponse, ClientError> {
        let body = serde_json::from_str(&response.body).map_err(|e| ClientError::Decode {
            detail: e.to_string(),
        })?;
        Ok(ApiResponse {
            body,
            http_code: response.status,
        })
    }
}

/// Encode a single-file `multipart/form-data` body with field name `file`.
fn multipart_file_body(boundary: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(content.len() + 256);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

//! HTTP round-trips described as plain data.
//!
//! # Design
//! `PdfQaClient::build_*` methods produce `HttpRequest` values without
//! touching the network; the transport module executes them and hands back
//! `HttpResponse` values for parsing. Keeping the request/response shapes as
//! plain data makes every wire detail (method, url, headers, body bytes)
//! directly assertable in unit tests.
//!
//! Request bodies are raw bytes rather than strings because PDF uploads are
//! binary multipart payloads. Response bodies stay as strings: the remote
//! API always answers with JSON text.

use std::time::Duration;

/// HTTP method for a request. Only the verbs the remote API uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `PdfQaClient::build_*` methods and executed by the transport
/// with the given per-call timeout.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    pub timeout: Duration,
}

/// An HTTP response described as plain data.
///
/// Produced by the transport after executing an `HttpRequest`, then passed
/// to `PdfQaClient::parse_response` for JSON decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

//! Synchronous client for a RAG PDF question-answering HTTP API.
//!
//! # Overview
//! The remote service ingests one PDF at a time and answers questions about
//! it. This crate wraps its five endpoints — upload, ask, health, status,
//! reset — behind [`PdfQaClient`]: blocking calls, one attempt each, with
//! per-operation timeouts.
//!
//! # Design
//! - `PdfQaClient` is stateless — it holds only the base URL and timeouts;
//!   the currently uploaded document lives on the server.
//! - Requests are built as plain data (`HttpRequest`), executed by the
//!   `transport` module over ureq, and decoded by `parse_response`, keeping
//!   the wire format unit-testable without a network.
//! - Response schemas are undocumented, so bodies stay opaque
//!   (`serde_json::Value`); any HTTP status is returned as data with its
//!   `http_code`, and only local preconditions and transport failures are
//!   errors.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::PdfQaClient;
pub use error::{ClientError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ApiResponse, Timeouts, HTTP_CODE_KEY};

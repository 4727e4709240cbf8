//! In-process stand-in for the PDF question-answering service.
//!
//! Models the HTTP contract only: one document slot, canned answers, the
//! same routes, status codes, and response wording as the real service. The
//! actual PDF/AI pipeline is out of scope.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::{delete, get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// Metadata recorded for the currently loaded document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub filename: String,
    pub num_bytes: usize,
}

#[derive(Deserialize)]
pub struct AskForm {
    pub question: String,
}

/// The single server-side document slot.
pub type Db = Arc<RwLock<Option<DocumentInfo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(None));
    Router::new()
        .route("/health", get(health))
        .route("/upload_pdf/", post(upload_pdf))
        .route("/ask/", post(ask))
        .route("/status/", get(status))
        .route("/reset/", delete(reset))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

type ApiError = (StatusCode, Json<Value>);

fn bad_request(detail: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail })))
}

async fn health(State(db): State<Db>) -> Json<Value> {
    let doc = db.read().await;
    Json(json!({
        "status": "healthy",
        "document_processed": doc.is_some(),
    }))
}

async fn upload_pdf(
    State(db): State<Db>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| bad_request("Malformed multipart body"))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        if !filename.to_lowercase().ends_with(".pdf") {
            return Err(bad_request("Only PDF files are allowed"));
        }
        let content = field
            .bytes()
            .await
            .map_err(|_| bad_request("Malformed multipart body"))?;

        let info = DocumentInfo {
            filename: filename.clone(),
            num_bytes: content.len(),
        };
        *db.write().await = Some(info.clone());

        return Ok(Json(json!({
            "message": format!("PDF '{filename}' uploaded and processed successfully"),
            "document_info": info,
        })));
    }
    Err(bad_request("Missing 'file' field"))
}

async fn ask(State(db): State<Db>, Form(form): Form<AskForm>) -> Result<Json<Value>, ApiError> {
    let doc = db.read().await;
    let Some(doc) = doc.as_ref() else {
        return Err(bad_request(
            "No PDF document has been uploaded and processed. Please upload a PDF first.",
        ));
    };
    if form.question.trim().is_empty() {
        return Err(bad_request("Question cannot be empty"));
    }
    Ok(Json(json!({
        "question": form.question,
        "answer": format!("Canned answer about '{}'", doc.filename),
    })))
}

async fn status(State(db): State<Db>) -> Json<Value> {
    let doc = db.read().await;
    Json(json!({
        "system_ready": doc.is_some(),
        "current_document": doc.clone(),
    }))
}

async fn reset(State(db): State<Db>) -> Json<Value> {
    *db.write().await = None;
    Json(json!({
        "message": "System reset successfully. You can now upload a new PDF.",
    }))
}

//! Blocking HTTP execution of `HttpRequest` values via ureq.
//!
//! # Design
//! The agent is configured with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as data rather than `Err` — status interpretation
//! belongs to the caller, not this layer. Every ureq error (connection
//! refused, DNS failure, timeout) collapses into `ClientError::Transport`;
//! the detail is kept on the variant and logged, but never changes the
//! caller-visible message. One attempt per call, no retries.

use ureq::{Agent, RequestBuilder};

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Execute a request, blocking until the response arrives or the request's
/// timeout elapses.
pub fn execute(req: &HttpRequest) -> Result<HttpResponse, ClientError> {
    let agent: Agent = Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    log::debug!("{:?} {} (timeout {:?})", req.method, req.url, req.timeout);

    let result = match (&req.method, &req.body) {
        (HttpMethod::Get, _) => configured(agent.get(&req.url), req).call(),
        (HttpMethod::Delete, _) => configured(agent.delete(&req.url), req).call(),
        (HttpMethod::Post, Some(body)) => configured(agent.post(&req.url), req).send(&body[..]),
        (HttpMethod::Post, None) => configured(agent.post(&req.url), req).send_empty(),
    };

    let mut response = result.map_err(|e| {
        log::warn!("transport failure for {}: {e}", req.url);
        ClientError::Transport {
            detail: e.to_string(),
        }
    })?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ClientError::Transport {
            detail: e.to_string(),
        })?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

/// Apply the request's headers and timeout to a ureq builder.
fn configured<Any>(mut builder: RequestBuilder<Any>, req: &HttpRequest) -> RequestBuilder<Any> {
    for (name, value) in &req.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
        .config()
        .timeout_global(Some(req.timeout))
        .build()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    /// Connecting to a port nothing listens on must map to `Transport`.
    #[test]
    fn refused_connection_maps_to_transport_error() {
        // Bind to an ephemeral port, then drop the listener so the port is
        // known to be closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let req = HttpRequest {
            method: HttpMethod::Get,
            url: format!("http://{addr}/health"),
            headers: Vec::new(),
            body: None,
            timeout: Duration::from_secs(2),
        };
        let err = execute(&req).unwrap_err();
        assert!(matches!(err, ClientError::Transport { .. }));
        assert_eq!(err.to_string(), "Failed to connect to API");
    }
}

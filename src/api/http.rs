use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Everything the remote services can do wrong, folded into one taxonomy.
/// Callers downgrade these to safe defaults; nothing here is retried.
#[derive(Error, Debug)]
pub enum ApiFailure {
    #[error("Internal Server Error (Down)")]
    ServiceDown,

    #[error("Server Error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Error decoding JSON response: {body}")]
    Decode { body: String },

    #[error("{0}")]
    Transport(String),
}

/// Issues a GET and returns the parsed JSON payload.
pub async fn get_json(client: &Client, url: &str) -> Result<Value, ApiFailure> {
    log::debug!("GET {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ApiFailure::Transport(e.to_string()))?;
    read_response(response).await
}

/// Issues a POST with a JSON body and returns the parsed JSON payload.
pub async fn post_json(client: &Client, url: &str, body: &Value) -> Result<Value, ApiFailure> {
    log::debug!("POST {}", url);
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| ApiFailure::Transport(e.to_string()))?;
    read_response(response).await
}

async fn read_response(response: reqwest::Response) -> Result<Value, ApiFailure> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ApiFailure::Transport(e.to_string()))?;
    normalize(status, body)
}

/// Maps a raw status/body pair onto the failure taxonomy. A 500 means the
/// service itself is down; any other non-200 is reported with its body.
fn normalize(status: u16, body: String) -> Result<Value, ApiFailure> {
    if status == 500 {
        return Err(ApiFailure::ServiceDown);
    }
    if status != 200 {
        return Err(ApiFailure::Status { status, body });
    }
    serde_json::from_str(&body).map_err(|_| ApiFailure::Decode { body })
}

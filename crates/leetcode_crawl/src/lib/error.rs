#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Any response other than `200 OK`; never retried
    #[error("{operation} failed: {status}\n{body}")]
    Http {
        operation: &'static str,
        status: u16,
        body: String,
    },
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

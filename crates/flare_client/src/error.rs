use thiserror::Error;

/// Every way a request against the job service can fail. All variants are
/// converted to a displayable message at the synchronizer boundary; nothing
/// propagates past the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// The request was sent but no response arrived in time.
    #[error("request timed out")]
    Timeout,
    /// The service answered with a non-success status, optionally carrying a
    /// server-provided `detail` message.
    #[error("service returned status {code}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { code: u16, detail: Option<String> },
    /// The response body could not be decoded at all. Missing individual
    /// fields are not an error; they decode to defaults.
    #[error("could not decode response: {0}")]
    Decode(String),
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::Timeout;
    }
    if err.is_decode() {
        return ServiceError::Decode(err.to_string());
    }
    ServiceError::Network(err.to_string())
}

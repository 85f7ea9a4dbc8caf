use thiserror::Error;

/// Failures surfaced to the caller from the generation step.
///
/// Rendering itself never fails: every field access inside a parsed packet
/// falls back to a default. The fatal paths all live here, at the boundary
/// between the generation service and the packet model.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The model reply was not parseable JSON. Recoverable; the caller
    /// should request a fresh generation.
    #[error("model response is not valid JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    /// The reply parsed, but the top level is not a packet object carrying
    /// an activities list.
    #[error("model response is not a worksheet packet: {0}")]
    InvalidPacket(String),
    /// The generation service refused the request for quota reasons. The
    /// caller should wait before retrying rather than retry immediately.
    #[error("generation service is rate limited; retry after a short delay")]
    RateLimited,
    /// Any other generation-service failure.
    #[error("generation service error: {0}")]
    Service(String),
}

impl GenerateError {
    /// Classify a failure status from the generation service so callers can
    /// tell quota exhaustion apart from everything else.
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        match status {
            429 | 503 => GenerateError::RateLimited,
            _ => GenerateError::Service(detail.into()),
        }
    }
}

use thiserror::Error;

/// Failure taxonomy for one translate call. The controller collapses all of
/// these into a single generic notice at the surface; the distinction exists
/// for logs and tests.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("translate request failed: {0}")]
    Network(anyhow::Error),
    #[error("translate endpoint returned status {0}")]
    Status(u16),
    #[error("malformed translate response: {0}")]
    Decode(anyhow::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("listener on {0} has no IP address")]
    NoAddress(String),

    #[error("server thread panicked")]
    WorkerPanicked,
}

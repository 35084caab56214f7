use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error("traversal task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

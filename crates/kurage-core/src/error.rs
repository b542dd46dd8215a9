use thiserror::Error;

#[derive(Debug, Error)]
pub enum KurageError {
    #[error("config error: {0}")]
    Config(String),

    #[error("session store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

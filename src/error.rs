use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal startup failures. Nothing past window creation can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Event loop, GPU instance, adapter or device could not be brought up.
    #[error("initialization failed: {0}")]
    Initialization(String),

    /// The window or its drawing surface could not be created.
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    /// Settings rejected by `Settings::validate`.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

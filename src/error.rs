use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("Error writing output: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this error.
    ///
    /// Usage errors follow clap's convention (2), help and version requests
    /// arrive here as `Usage` too but exit cleanly.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(err) => err.exit_code(),
            AppError::Io(_) => 1,
        }
    }
}

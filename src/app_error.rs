use thiserror::Error;

/// Errors surfaced to the user in the error popup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Unable to draw to terminal")]
    Terminal,
    #[error("Unable to list containers:\n{0}")]
    ContainerList(String),
    #[error("Unable to list images:\n{0}")]
    ImageList(String),
}

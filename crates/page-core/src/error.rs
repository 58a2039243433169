use thiserror::Error;

/// Failures surfaced by the page helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("no element with id `{0}`")]
    ElementNotFound(String),
    #[error("element `{0}` has no inline style")]
    NotStylable(String),
    /// A browser API threw; the exception is carried as text.
    #[error("host error: {0}")]
    Host(String),
}

pub type PageResult<T> = Result<T, PageError>;

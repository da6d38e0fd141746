use thiserror::Error;

pub type ColorResult<T> = Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not one of the accepted textual shapes. Carries the input verbatim.
    #[error("invalid color string: {0:?}")]
    InvalidFormat(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidFormat(input.to_string())
    }
}

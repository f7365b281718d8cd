use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Recognition error: {0}")]
    Recognition(#[from] crate::nlp::RecognitionError),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Missing <id> parameter.")]
    MissingParameter,

    #[error("The <id> parameter is not a number: {0:?}")]
    NotANumber(String),

    #[error("No quiz associated with id={0}.")]
    QuizNotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Input closed")]
    InputClosed,

    #[error("Session error: {0}")]
    Session(String),
}

impl QuizError {
    /// Persistence and configuration failures end the process; everything else
    /// is reported to the user and the prompt loop carries on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            QuizError::Io(_)
                | QuizError::Serialization(_)
                | QuizError::Store(_)
                | QuizError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;

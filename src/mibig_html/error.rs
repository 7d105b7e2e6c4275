use thiserror::Error;

#[derive(Error, Debug)]
pub enum MibigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Invalid data in {accession}: {message}")]
    InvalidData { accession: String, message: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl MibigError {
    pub fn invalid(accession: impl Into<String>, message: impl Into<String>) -> Self {
        MibigError::InvalidData {
            accession: accession.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MibigError>;

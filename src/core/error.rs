use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfessionError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Wire format error: {0}")]
    Wire(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProfessionError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiplomacyError {
    #[error("Player index {index} out of range (ledger size {size})")]
    IndexOutOfRange { index: i32, size: usize },

    #[error("No bonus list for player {0}")]
    EmptySlot(i32),

    #[error("Invalid ledger: {0}")]
    InvalidLedger(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiplomacyError>;

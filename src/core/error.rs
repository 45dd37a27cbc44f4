use thiserror::Error;

use crate::map::HexCoord;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Only one city allowed per map")]
    CityAlreadyExists,

    #[error("Tile not found: {0:?}")]
    TileNotFound(HexCoord),

    #[error("Unknown {kind} tag: {value:?}")]
    UnknownTag { kind: &'static str, value: String },

    #[error("Invalid coordinate key: {0:?}")]
    InvalidCoordinateKey(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Action {action} outside action space of size {size}")]
    ActionOutOfRange { action: usize, size: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Connection failures, timeouts and non-2xx echo responses
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to parse JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider answered with a reply code other than 300
    #[error("API response error (code {code}): {detail}")]
    Api { code: u32, detail: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0} returned an empty result")]
    EmptyResult(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

/// The step of an update run that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ResolveIp,
    ListRecords,
    AddRecord,
    UpdateRecord,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ResolveIp => write!(f, "Unable to obtain IP value"),
            Stage::ListRecords => write!(f, "Error fetching DNS records"),
            Stage::AddRecord => write!(f, "Error adding DNS record"),
            Stage::UpdateRecord => write!(f, "Error updating DNS record"),
        }
    }
}

#[derive(Debug, Error)]
#[error("{stage}: {source}")]
pub struct StageError {
    pub stage: Stage,
    pub source: Error,
}

impl StageError {
    pub fn new(stage: Stage, source: Error) -> Self {
        Self { stage, source }
    }
}

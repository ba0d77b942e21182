use crate::model::PilgrimProfile;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum LookupError {
    #[error("no record for pilgrim")]
    NotFound,
    #[error("{0}")]
    Transport(String),
}

impl From<String> for LookupError {
    fn from(value: String) -> Self {
        Self::Transport(value)
    }
}

/// Single query boundary against the external data store: one identifier
/// in, at most one joined pilgrim/camp record out.
#[async_trait]
pub trait LookupGateway: Send + Sync {
    async fn fetch_profile(&self, pilgrim_id: &str) -> Result<PilgrimProfile, LookupError>;
}

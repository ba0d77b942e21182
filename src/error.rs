use actix_web::http::StatusCode;
use thiserror::Error;

use crate::storage::LookupError;

pub const MISSING_ID_MESSAGE: &str = "معرف الحاج غير موجود في الرابط";
pub const NOT_FOUND_MESSAGE: &str = "لم يتم العثور على بيانات الحاج";

/// Every failure a request can end in, paired with the status the error
/// document is served under.
#[derive(Error, Debug, Clone)]
pub enum PageError {
    #[error("{}", MISSING_ID_MESSAGE)]
    MissingId,
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    #[error("{0}")]
    Lookup(String),
    #[error("{0}")]
    Config(String),
}

impl PageError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingId => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Lookup(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LookupError> for PageError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound => Self::NotFound,
            LookupError::Transport(message) => Self::Lookup(message),
        }
    }
}

impl From<String> for PageError {
    fn from(err: String) -> Self {
        Self::Lookup(err)
    }
}

use sandtrail_contracts::error::BackendError;
use sandtrail_model::ModelError;
use thiserror::Error;

use crate::carousel::CarouselError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorefrontError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Invalid record: {0}")]
    Model(#[from] ModelError),

    #[error("Carousel error: {0}")]
    Carousel(#[from] CarouselError),

    #[error("Excursion not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

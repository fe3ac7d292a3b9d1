//! Core library for the Resolution todo service
//!
//! This crate contains the domain model and storage, including:
//! - Todo record and identifier types
//! - Repository trait and store implementations

pub mod error;
pub mod todo;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

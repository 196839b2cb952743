//! Cadcards library exports
//!
//! A catalog of CAD standards (layers, blocks, details, specifications)
//! with a query engine, a persistent favorites store and optional
//! generative flavor content.

pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod favorites;
pub mod oracle;
pub mod session;
pub mod source;
pub mod tools;

pub use error::{CadcardsError, Result};

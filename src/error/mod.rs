//! Error handling
//!
//! Defines the client error taxonomy and how each kind is reported.

pub mod handlers;
pub mod types;

pub use types::*;

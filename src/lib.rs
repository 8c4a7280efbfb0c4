pub mod client;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

pub use client::{run_client, run_with};
pub use config::ClientConfig;
pub use session::SessionOutcome;

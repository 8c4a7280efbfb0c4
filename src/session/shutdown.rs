//! Session shutdown coordination
//!
//! The liveness flag both relays poll, and the outcome the entry point turns
//! into a process exit status.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ClientError;
use crate::error::handlers::error_to_exit_code;

/// Shared "session still running" flag. Only ever moves from true to false.
#[derive(Debug, Clone)]
pub struct LivenessFlag {
    active: Arc<AtomicBool>,
}

impl Default for LivenessFlag {
    fn default() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl LivenessFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Marks the session as over. Returns true only for the call that made the transition.
    pub fn deactivate(&self) -> bool {
        self.active.swap(false, Ordering::AcqRel)
    }
}

/// How a session ended, as seen by the caller of `run_client`.
#[derive(Debug)]
pub enum SessionOutcome {
    /// The client function returned normally; failures were already reported.
    Stopped,
    /// The peer ended the chat; the process must exit at once.
    Terminated(ClientError),
}

impl SessionOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            SessionOutcome::Stopped => 0,
            SessionOutcome::Terminated(err) => error_to_exit_code(err),
        }
    }
}

//! Chat session
//!
//! Connection setup, the greeting phase, the two relays and the shared
//! shutdown state they coordinate through.

pub mod connect;
pub mod greeting;
pub mod inbound;
pub mod lines;
pub mod outbound;
pub mod shutdown;

pub use connect::connect;
pub use greeting::drain_greeting;
pub use inbound::{InboundEnd, inbound_relay};
pub use lines::LineReader;
pub use outbound::{OutboundEnd, outbound_relay};
pub use shutdown::{LivenessFlag, SessionOutcome};

/// Word either side sends to end the chat.
pub const SENTINEL: &str = "bye";

/// True when `line` is the sentinel, ignoring case and surrounding whitespace.
pub fn is_sentinel(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(SENTINEL)
}

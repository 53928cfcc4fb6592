//! Session-scoped answer obfuscation, daily attempt throttling, and the
//! suspicious-activity monitor.
//!
//! None of this is cryptography. The obfuscator raises the bar against
//! casually reading answers out of serialized session state; an attacker with
//! access to the running process can always recover them.

pub mod monitor;
pub mod obfuscator;
pub mod throttle;

pub use monitor::{ActivityKind, ActivityRecord, SecurityMonitor};
pub use obfuscator::SessionKey;
pub use throttle::{AttemptThrottle, ThrottleDecision};

//! Gateway lifecycle states.

use std::fmt;

/// Where the gateway is in its startup/shutdown sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Constructed; analysis client not yet built.
    Uninitialized,
    /// Analysis client built; not yet listening.
    Ready,
    /// Accepting connections.
    Listening,
    /// Listener closed and connections drained.
    Stopped,
    /// Startup or serving failed. Terminal.
    Failed,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::Ready => "ready",
            LifecycleState::Listening => "listening",
            LifecycleState::Stopped => "stopped",
            LifecycleState::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(LifecycleState::Ready.to_string(), "ready");
        assert_eq!(LifecycleState::Stopped.to_string(), "stopped");
    }
}

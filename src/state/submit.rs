//! Submit control state

/// Submit button state machine: Idle -> Sending -> Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

impl SubmitState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
        }
    }

    /// The button ignores presses while a request is in flight
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmitState::default(), SubmitState::Idle);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SubmitState::Idle.label(), "Send Message");
        assert_eq!(SubmitState::Sending.label(), "Sending...");
    }

    #[test]
    fn test_only_idle_is_enabled() {
        assert!(SubmitState::Idle.is_enabled());
        assert!(!SubmitState::Sending.is_enabled());
    }
}

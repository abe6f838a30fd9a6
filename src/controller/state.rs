use std::fmt;

/// Visual state of one copy widget during a click-to-reset cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Idle,
    Busy,
    Success,
    Failure,
}

impl WidgetState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Busy => "copying",
            Self::Success => "copied",
            Self::Failure => "failed",
        }
    }
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

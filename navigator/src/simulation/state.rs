use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// no plan has been computed yet
    AwaitingPath,
    Navigating,
    Arrived,
    Stuck,
}

impl DriverState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Arrived | Self::Stuck)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AwaitingPath => "awaiting path",
            Self::Navigating => "navigating",
            Self::Arrived => "arrived",
            Self::Stuck => "stuck",
        }
    }

    /// text shown to the user
    pub fn status(&self) -> &'static str {
        match self {
            Self::AwaitingPath => "waiting for a route",
            Self::Navigating => "navigating",
            Self::Arrived => "destination reached",
            Self::Stuck => "no path found",
        }
    }
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Occupancy {
    #[default]
    Free,
    Blocked,
}

impl Occupancy {
    pub fn from_blocked(blocked: bool) -> Self {
        if blocked { Self::Blocked } else { Self::Free }
    }

    pub fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}

use std::fmt;

/// Controller phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Explorer rounds are building the trail field.
    Exploration,
    /// Evacuees are moving and the hazard is spreading.
    Evacuation,
    /// Terminal until the next `initialize` or `reset`.
    Finished,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle        => "idle",
            Phase::Exploration => "exploration",
            Phase::Evacuation  => "evacuation",
            Phase::Finished    => "finished",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

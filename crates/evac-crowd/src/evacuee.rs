use std::collections::VecDeque;

use evac_core::{AgentId, Cell};

/// Where an evacuee stands in its lifecycle.  `Evacuated` and `Casualty` are
/// terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum EvacueeStatus {
    #[default]
    Active,
    /// Reached an exit.
    Evacuated,
    /// Caught by the hazard.
    Casualty,
}

/// One occupant trying to get out.
#[derive(Clone, Debug)]
pub struct Evacuee {
    pub id:              AgentId,
    pub cell:            Cell,
    pub status:          EvacueeStatus,
    /// Most recent cells, oldest first.  Bounded; informational only.
    pub history:         VecDeque<Cell>,
    /// Successful moves made so far.
    pub evacuation_time: u32,
    /// Times this evacuee was relocated after being boxed in.
    pub reroute_count:   u32,
    pub stuck_counter:   u32,
}

impl Evacuee {
    pub fn new(id: AgentId, cell: Cell, history_len: usize) -> Self {
        let mut history = VecDeque::with_capacity(history_len);
        if history_len > 0 {
            history.push_back(cell);
        }
        Self {
            id,
            cell,
            status: EvacueeStatus::Active,
            history,
            evacuation_time: 0,
            reroute_count: 0,
            stuck_counter: 0,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == EvacueeStatus::Active
    }

    /// Append `cell` to the history, dropping the oldest entries beyond
    /// `history_len`.
    pub(crate) fn remember(&mut self, cell: Cell, history_len: usize) {
        if history_len == 0 {
            return;
        }
        while self.history.len() >= history_len {
            self.history.pop_front();
        }
        self.history.push_back(cell);
    }
}

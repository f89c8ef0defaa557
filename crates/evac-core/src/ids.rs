//! Strongly typed identifier wrappers.
//!
//! An id is the agent's (or hazard's) position in its owning `Vec`, assigned
//! in creation order.  Ids order agents for the sequential apply phases.

/// Index of an explorer or evacuee within its population `Vec`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

/// Index of a hazard instance in ignition order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardId(pub u32);

use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::{Pid, Ticks};

/// What the CPU did on a given tick. At most one `Finished` per tick,
/// always emitted before the slot is re-evaluated for the next occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EventKind {
    Idle,
    Running { pid: Pid },
    Finished { pid: Pid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvent {
    pub tick: Ticks,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl fmt::Display for TickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EventKind::Idle => write!(f, "<time {}> idle", self.tick),
            EventKind::Running { pid } => {
                write!(f, "<time {}> process {} is running", self.tick, pid)
            }
            EventKind::Finished { pid } => {
                write!(f, "<time {}> process {} is finished...", self.tick, pid)
            }
        }
    }
}

use super::Policy;
use crate::core::{ProcKey, SimCtx};

/// First-Come-First-Served: always runs the head of the ready queue.
/// Non-preemptive by construction; the head only changes on completion.
pub struct Fcfs;

impl Policy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn select(&mut self, ctx: &mut SimCtx) -> Option<ProcKey> {
        ctx.ready_head()
    }
}

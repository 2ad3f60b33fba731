use super::Policy;
use crate::core::{ProcKey, SimCtx};

/// Shortest-Remaining-Time-First. The ready queue is re-sorted by
/// remaining time before every dispatch, so a newly admitted process with
/// less work than the current one preempts it on the next tick. The sort
/// is stable; ties keep earliest-admitted order.
pub struct Srtf;

impl Policy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn select(&mut self, ctx: &mut SimCtx) -> Option<ProcKey> {
        let SimCtx { records, ready, .. } = ctx;
        ready.sort_by_key(|&key| records[key].remaining);
        ctx.ready_head()
    }
}

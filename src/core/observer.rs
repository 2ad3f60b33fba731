use super::state::{ProcKey, ProcState, SimCtx};

/// Debug-build consistency checks over the record partition, run once per
/// tick. Compiles to nothing in release builds.
#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    #[cfg_attr(not(debug_assertions), allow(unused_variables))]
    pub fn observe(&mut self, ctx: &SimCtx, retiring: Option<ProcKey>) {
        self.step += 1;

        #[cfg(debug_assertions)]
        {
            let total = ctx.pending.len() + ctx.ready.len() + ctx.finished.len();
            debug_assert_eq!(total, ctx.records.len(), "partition must cover every record");

            for &key in &ctx.pending {
                let rec = ctx.record(key);
                debug_assert_eq!(rec.state, ProcState::Pending, "pid {} state mismatch", rec.pid);
                debug_assert!(rec.start.is_none(), "pending pid {} already started", rec.pid);
            }

            for &key in &ctx.ready {
                let rec = ctx.record(key);
                debug_assert_eq!(rec.state, ProcState::Ready, "pid {} state mismatch", rec.pid);
                debug_assert!(
                    rec.remaining > 0 && rec.remaining <= rec.burst,
                    "ready pid {} has remaining {} outside (0, {}]",
                    rec.pid,
                    rec.remaining,
                    rec.burst
                );
                debug_assert_eq!(
                    rec.start.is_some(),
                    rec.remaining < rec.burst,
                    "pid {} start must be set exactly when it has run",
                    rec.pid
                );
            }

            for &key in &ctx.finished {
                let rec = ctx.record(key);
                debug_assert_eq!(rec.state, ProcState::Finished, "pid {} state mismatch", rec.pid);
                debug_assert_eq!(rec.remaining, 0, "finished pid {} has work left", rec.pid);
                let completion = rec.completion.unwrap_or_else(|| {
                    panic!("finished pid {} missing completion tick", rec.pid)
                });
                let start = rec
                    .start
                    .unwrap_or_else(|| panic!("finished pid {} missing start tick", rec.pid));
                debug_assert!(start >= rec.arrival, "pid {} started before arrival", rec.pid);
                debug_assert!(
                    completion >= rec.arrival + rec.burst,
                    "pid {} completion {} implies negative waiting time",
                    rec.pid,
                    completion
                );
            }

            if let Some(key) = retiring {
                debug_assert_eq!(
                    ctx.record(key).state,
                    ProcState::Finished,
                    "unreported completion must already be in finished"
                );
            }
        }
    }
}

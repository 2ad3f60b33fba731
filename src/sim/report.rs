use average::{Estimate, Mean};
use serde::{Deserialize, Serialize};

use crate::core::{Pid, SimCtx, Ticks};

/// Final timing metrics for one finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub start: Ticks,
    pub completion: Ticks,
    pub turnaround: Ticks,
    pub waiting: Ticks,
}

/// End-of-run summary: per-process metrics in completion order plus the
/// aggregate averages over the whole process set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub policy: String,
    pub processes: Vec<ProcessMetrics>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    /// Tick at which the last finished event was observed.
    pub finished_at: Ticks,
}

impl Report {
    /// Builds the report from a fully drained context. Only meaningful
    /// once the simulation has terminated.
    pub(crate) fn from_ctx(ctx: &SimCtx, policy: &str) -> Self {
        let mut waiting = Mean::new();
        let mut turnaround = Mean::new();
        let mut finished_at = 0;

        let processes = ctx
            .finished
            .iter()
            .map(|&key| {
                let rec = ctx.record(key);
                let completion = rec.completion.expect("finished record missing completion");
                let start = rec.start.expect("finished record missing start");
                let ta = completion - rec.arrival;
                let wait = ta - rec.burst;
                waiting.add(wait as f64);
                turnaround.add(ta as f64);
                finished_at = finished_at.max(completion);
                ProcessMetrics {
                    pid: rec.pid,
                    arrival: rec.arrival,
                    burst: rec.burst,
                    start,
                    completion,
                    turnaround: ta,
                    waiting: wait,
                }
            })
            .collect();

        Self {
            policy: policy.to_owned(),
            processes,
            avg_waiting: waiting.estimate(),
            avg_turnaround: turnaround.estimate(),
            finished_at,
        }
    }
}

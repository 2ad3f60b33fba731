pub mod fcfs;
pub mod rr;
pub mod srtf;

pub use fcfs::Fcfs;
pub use rr::RoundRobin;
pub use srtf::Srtf;

use crate::core::{ProcKey, SimCtx, Ticks};
use crate::error::SimError;

/// A dispatch discipline. Consulted once per tick; any cursor or quantum
/// bookkeeping lives inside the policy, never in the process records.
pub trait Policy {
    fn name(&self) -> &'static str;

    /// Picks the ready record to advance this tick, or `None` when the
    /// ready queue is empty. May reorder `ctx.ready`.
    fn select(&mut self, ctx: &mut SimCtx) -> Option<ProcKey>;

    /// Called after the selected record consumed one tick.
    fn tick(&mut self, _ctx: &SimCtx, _key: ProcKey, _finished: bool) {}

    /// Called when a completed record leaves the ready queue at `index`.
    fn removed(&mut self, _ctx: &SimCtx, _index: usize) {}
}

impl Policy for Box<dyn Policy> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn select(&mut self, ctx: &mut SimCtx) -> Option<ProcKey> {
        (**self).select(ctx)
    }

    fn tick(&mut self, ctx: &SimCtx, key: ProcKey, finished: bool) {
        (**self).tick(ctx, key, finished)
    }

    fn removed(&mut self, ctx: &SimCtx, index: usize) {
        (**self).removed(ctx, index)
    }
}

/// Builds a policy from its configured name, validating the RR quantum.
/// An unknown name is a configuration error, never a silent default.
pub fn from_config(name: &str, quantum: Option<i64>) -> Result<Box<dyn Policy>, SimError> {
    match name {
        "FCFS" => Ok(Box::new(Fcfs)),
        "SRTF" => Ok(Box::new(Srtf)),
        "RR" => {
            let quantum = quantum.ok_or(SimError::MissingQuantum)?;
            if quantum <= 0 {
                return Err(SimError::InvalidQuantum(quantum));
            }
            Ok(Box::new(RoundRobin::new(quantum as Ticks)))
        }
        other => Err(SimError::UnknownPolicy(other.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_named_policy() {
        assert_eq!(from_config("FCFS", None).unwrap().name(), "FCFS");
        assert_eq!(from_config("SRTF", None).unwrap().name(), "SRTF");
        assert_eq!(from_config("RR", Some(4)).unwrap().name(), "RR");
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(matches!(
            from_config("SJF", None),
            Err(SimError::UnknownPolicy(name)) if name == "SJF"
        ));
    }

    #[test]
    fn rr_without_quantum_is_rejected() {
        assert!(matches!(from_config("RR", None), Err(SimError::MissingQuantum)));
    }

    #[test]
    fn non_positive_quantum_is_rejected() {
        assert!(matches!(from_config("RR", Some(0)), Err(SimError::InvalidQuantum(0))));
        assert!(matches!(from_config("RR", Some(-3)), Err(SimError::InvalidQuantum(-3))));
    }
}

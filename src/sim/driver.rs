use log::info;
use rustc_hash::FxHashSet;

use super::report::Report;
use super::workload::ProcessSpec;
use crate::core::{SimCore, SimCtx, TickEvent, Ticks};
use crate::error::SimError;
use crate::policy::Policy;

/// A configured simulation run: validated workload, one policy, one clock.
pub struct Sim<P: Policy> {
    core: SimCore<P>,
}

impl<P: Policy> Sim<P> {
    /// Validates the workload and builds the registry in input order.
    pub fn new(specs: &[ProcessSpec], policy: P) -> Result<Self, SimError> {
        if specs.is_empty() {
            return Err(SimError::EmptyProcessSet);
        }

        let mut seen = FxHashSet::default();
        let mut ctx = SimCtx::new();
        for spec in specs {
            if spec.pid == 0 {
                return Err(SimError::InvalidPid(0));
            }
            if spec.burst == 0 {
                return Err(SimError::InvalidBurst {
                    pid: i64::from(spec.pid),
                    burst: 0,
                });
            }
            if !seen.insert(spec.pid) {
                return Err(SimError::DuplicatePid(spec.pid));
            }
            ctx.register(spec);
        }

        info!("loaded {} processes, policy {}", specs.len(), policy.name());
        Ok(Self {
            core: SimCore::new(ctx, policy),
        })
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) -> Vec<TickEvent> {
        self.core.step()
    }

    pub fn done(&self) -> bool {
        self.core.done()
    }

    pub fn now(&self) -> Ticks {
        self.core.now()
    }

    pub fn process_count(&self) -> usize {
        self.core.ctx.records.len()
    }

    /// Runs to termination, returning the full event log.
    pub fn run(&mut self) -> Vec<TickEvent> {
        let mut events = Vec::new();
        while !self.done() {
            events.extend(self.step());
        }
        events
    }

    /// Final metrics; call after the run has terminated.
    pub fn report(&self) -> Report {
        debug_assert!(self.done(), "report requested mid-simulation");
        Report::from_ctx(&self.core.ctx, self.core.policy.name())
    }
}

use super::Policy;
use crate::core::{ProcKey, SimCtx, Ticks};

/// Round-Robin with a fixed time quantum. The rotating cursor and the
/// quantum countdown are policy-local; the ready queue itself is never
/// reordered.
pub struct RoundRobin {
    quantum: Ticks,
    quantum_left: Ticks,
    cursor: usize,
}

impl RoundRobin {
    pub fn new(quantum: Ticks) -> Self {
        assert!(quantum > 0, "quantum must be positive");
        Self {
            quantum,
            quantum_left: quantum,
            cursor: 0,
        }
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn select(&mut self, ctx: &mut SimCtx) -> Option<ProcKey> {
        if ctx.ready.is_empty() {
            return None;
        }
        // The queue may have shrunk since the last rotation.
        if self.cursor >= ctx.ready.len() {
            self.cursor = 0;
        }
        Some(ctx.ready[self.cursor])
    }

    fn tick(&mut self, _ctx: &SimCtx, _key: ProcKey, finished: bool) {
        self.quantum_left -= 1;
        if self.quantum_left == 0 {
            self.quantum_left = self.quantum;
            // A record that finished exactly at quantum expiry keeps the
            // cursor in place; its slot is vacated, not rotated past.
            if !finished {
                self.cursor += 1;
            }
        }
    }

    fn removed(&mut self, _ctx: &SimCtx, index: usize) {
        self.quantum_left = self.quantum;
        if index < self.cursor {
            self.cursor -= 1;
        }
        // index == cursor: the vacated slot is re-examined next tick,
        // wrapping in select() if it fell off the end.
    }
}

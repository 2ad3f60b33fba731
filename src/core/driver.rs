use log::debug;

use super::event::{EventKind, TickEvent};
use super::observer::Observer;
use super::state::{ProcKey, ProcState, SimCtx, Ticks};
use crate::policy::Policy;

/// The tick engine. Owns the clock and the record partition; the policy is
/// consulted once per tick for the dispatch decision.
pub struct SimCore<P: Policy> {
    pub ctx: SimCtx,
    pub policy: P,
    observer: Observer,
    /// Completed on the previous tick; its finished event is reported at
    /// the top of the next tick, before dispatch.
    retiring: Option<ProcKey>,
}

impl<P: Policy> SimCore<P> {
    pub fn new(ctx: SimCtx, policy: P) -> Self {
        Self {
            ctx,
            policy,
            observer: Observer::new(),
            retiring: None,
        }
    }

    /// Runs one tick: admit arrivals, report a deferred completion,
    /// dispatch, advance the chosen record. Returns the tick's events
    /// (one `Running`/`Idle`, possibly preceded by one `Finished`).
    pub fn step(&mut self) -> Vec<TickEvent> {
        let now = self.ctx.now;
        let mut events = Vec::with_capacity(2);

        self.admit();

        if let Some(key) = self.retiring.take() {
            events.push(TickEvent {
                tick: now,
                kind: EventKind::Finished {
                    pid: self.ctx.pid_of(key),
                },
            });
        }

        match self.policy.select(&mut self.ctx) {
            Some(key) => {
                self.run_one(key, &mut events);
            }
            None => {
                debug_assert!(self.ctx.ready.is_empty(), "policy idled with ready work");
                // A tick that only reports a completion is not idle.
                if events.is_empty() {
                    events.push(TickEvent {
                        tick: now,
                        kind: EventKind::Idle,
                    });
                }
            }
        }

        self.observer.observe(&self.ctx, self.retiring);
        self.ctx.advance_time();
        events
    }

    /// All processes finished and every completion has been reported.
    pub fn done(&self) -> bool {
        self.ctx.pending.is_empty() && self.ctx.ready.is_empty() && self.retiring.is_none()
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    /// Moves every pending record with `arrival ≤ now` into ready, in
    /// registry order, setting `remaining = burst` at the move.
    fn admit(&mut self) {
        let SimCtx {
            now,
            records,
            pending,
            ready,
            ..
        } = &mut self.ctx;

        pending.retain(|&key| {
            let rec = &mut records[key];
            if rec.arrival > *now {
                return true;
            }
            rec.state = ProcState::Ready;
            rec.remaining = rec.burst;
            ready.push(key);
            debug!("tick {}: admitted pid {} (burst {})", now, rec.pid, rec.burst);
            false
        });
    }

    fn run_one(&mut self, key: ProcKey, events: &mut Vec<TickEvent>) {
        let now = self.ctx.now;
        let rec = self.ctx.record_mut(key);
        debug_assert!(rec.remaining > 0, "dispatched a record with no work left");

        if rec.remaining == rec.burst {
            rec.start = Some(now);
        }
        rec.remaining -= 1;
        let finished = rec.remaining == 0;
        let pid = rec.pid;

        events.push(TickEvent {
            tick: now,
            kind: EventKind::Running { pid },
        });
        self.policy.tick(&self.ctx, key, finished);

        if finished {
            // The record leaves ready now; the finished event is observed
            // one tick later, so completion is recorded as `now + 1`.
            self.ctx.record_mut(key).completion = Some(now + 1);
            let index = self.ctx.retire(key);
            self.policy.removed(&self.ctx, index);
            self.retiring = Some(key);
            debug!("tick {}: pid {} completed", now, pid);
        }
    }
}

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::sim::ProcessSpec;

pub type Pid = u32;
pub type Ticks = u64;

new_key_type! {
    /// Key into the authoritative process record table.
    pub struct ProcKey;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    Pending,
    Ready,
    Finished,
}

/// One process descriptor plus its mutable simulation fields.
#[derive(Debug)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub state: ProcState,
    /// Valid once the record is admitted to ready; `0 ≤ remaining ≤ burst`.
    pub remaining: Ticks,
    /// Tick of the first `burst → burst-1` transition; set exactly once.
    pub start: Option<Ticks>,
    /// Tick at which the finished event is observed; set exactly once.
    pub completion: Option<Ticks>,
}

/// The whole simulation state: clock, record table and the disjoint
/// pending/ready/finished partition. Keys move between the partition
/// vectors; records never leave the table.
#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub records: SlotMap<ProcKey, ProcessRecord>,
    /// Not yet arrived, in registry (input) order.
    pub pending: Vec<ProcKey>,
    /// Arrived, not finished. Policies may reorder this vector.
    pub ready: Vec<ProcKey>,
    /// Completed, in completion order.
    pub finished: Vec<ProcKey>,
    pub by_pid: FxHashMap<Pid, ProcKey>,
}

impl SimCtx {
    pub fn new() -> Self {
        Self {
            now: 0,
            records: SlotMap::with_key(),
            pending: Vec::new(),
            ready: Vec::new(),
            finished: Vec::new(),
            by_pid: FxHashMap::default(),
        }
    }

    /// Registers a process in the pending set. Registry order is the
    /// FIFO tie-break for equal arrival ticks, so input order is kept.
    pub fn register(&mut self, spec: &ProcessSpec) -> ProcKey {
        let key = self.records.insert(ProcessRecord {
            pid: spec.pid,
            arrival: spec.arrival,
            burst: spec.burst,
            state: ProcState::Pending,
            remaining: 0,
            start: None,
            completion: None,
        });
        let prev = self.by_pid.insert(spec.pid, key);
        debug_assert!(prev.is_none(), "duplicate pid {} must be rejected upstream", spec.pid);
        self.pending.push(key);
        key
    }

    pub fn advance_time(&mut self) {
        self.now = self.now.saturating_add(1);
    }

    pub fn record(&self, key: ProcKey) -> &ProcessRecord {
        &self.records[key]
    }

    pub fn record_mut(&mut self, key: ProcKey) -> &mut ProcessRecord {
        &mut self.records[key]
    }

    pub fn pid_of(&self, key: ProcKey) -> Pid {
        self.records[key].pid
    }

    pub fn ready_head(&self) -> Option<ProcKey> {
        self.ready.first().copied()
    }

    /// Moves a completed record out of the ready partition, returning the
    /// index it occupied (policies use it to fix up cursor state).
    pub fn retire(&mut self, key: ProcKey) -> usize {
        let index = self
            .ready
            .iter()
            .position(|&k| k == key)
            .expect("retiring a record that is not in ready");
        self.ready.remove(index);
        self.records[key].state = ProcState::Finished;
        self.finished.push(key);
        index
    }
}

impl Default for SimCtx {
    fn default() -> Self {
        Self::new()
    }
}

//! Discrete-time CPU scheduling simulator.
//!
//! Models FCFS, Round-Robin and SRTF dispatch over a fixed set of process
//! descriptors and reports per-process waiting/turnaround metrics.

pub mod core;
pub mod error;
pub mod policy;
pub mod sim;

pub use crate::core::{EventKind, SimCore, TickEvent};
pub use error::SimError;
pub use policy::Policy;
pub use sim::{ProcessSpec, Report, Sim};

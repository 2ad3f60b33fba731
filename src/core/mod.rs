pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::SimCore;
pub use event::{EventKind, TickEvent};
pub use state::{Pid, ProcKey, ProcState, ProcessRecord, SimCtx, Ticks};

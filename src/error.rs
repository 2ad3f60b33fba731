use std::fmt;
use std::io;

use crate::core::Pid;

/// Failures detectable before or at the moment of misconfiguration.
/// A simulation started with valid input cannot fail.
#[derive(Debug)]
pub enum SimError {
    /// Input file missing or unreadable.
    Load(io::Error),
    /// A token in the input is not an integer.
    MalformedToken(String),
    /// Total integer count is not divisible by three.
    TrailingFields(usize),
    /// Process id must be a positive integer.
    InvalidPid(i64),
    /// Arrival tick must be non-negative.
    InvalidArrival { pid: i64, arrival: i64 },
    /// Burst time must be positive.
    InvalidBurst { pid: i64, burst: i64 },
    /// Same pid appears more than once in a run.
    DuplicatePid(Pid),
    /// Policy name is not one of FCFS, RR, SRTF.
    UnknownPolicy(String),
    /// RR selected without a time quantum.
    MissingQuantum,
    /// Time quantum must be positive.
    InvalidQuantum(i64),
    /// No processes to schedule; averages would divide by zero.
    EmptyProcessSet,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(err) => write!(f, "could not read task list: {err}"),
            Self::MalformedToken(tok) => {
                write!(f, "invalid process record: '{tok}' is not an integer")
            }
            Self::TrailingFields(count) => write!(
                f,
                "invalid process record: {count} integers do not form whole (pid, arrival, burst) triples"
            ),
            Self::InvalidPid(pid) => {
                write!(f, "invalid process record: pid {pid} is not a positive integer")
            }
            Self::InvalidArrival { pid, arrival } => {
                write!(f, "invalid process record: pid {pid} has negative arrival time {arrival}")
            }
            Self::InvalidBurst { pid, burst } => {
                write!(f, "invalid process record: pid {pid} has non-positive burst time {burst}")
            }
            Self::DuplicatePid(pid) => write!(f, "invalid process record: duplicate pid {pid}"),
            Self::UnknownPolicy(name) => write!(f, "unknown scheduling policy '{name}'"),
            Self::MissingQuantum => write!(f, "RR requires a time quantum"),
            Self::InvalidQuantum(q) => write!(f, "time quantum must be positive, got {q}"),
            Self::EmptyProcessSet => write!(f, "no processes to schedule"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SimError {
    fn from(err: io::Error) -> Self {
        Self::Load(err)
    }
}

use std::fs;
use std::path::Path;

use crate::core::{Pid, Ticks};
use crate::error::SimError;

/// One input row: `pid arrival burst`, whitespace separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
}

/// Parses a task list: whitespace-separated integers, three per process,
/// in input order. Input order is preserved; it is the FIFO tie-break for
/// processes arriving on the same tick.
pub fn parse_workload(input: &str) -> Result<Vec<ProcessSpec>, SimError> {
    let mut values = Vec::new();
    for token in input.split_whitespace() {
        let value: i64 = token
            .parse()
            .map_err(|_| SimError::MalformedToken(token.to_owned()))?;
        values.push(value);
    }

    if values.len() % 3 != 0 {
        return Err(SimError::TrailingFields(values.len()));
    }

    values.chunks_exact(3).map(spec_from_triple).collect()
}

/// Reads and parses a task list file.
pub fn load_workload(path: impl AsRef<Path>) -> Result<Vec<ProcessSpec>, SimError> {
    let input = fs::read_to_string(path)?;
    parse_workload(&input)
}

fn spec_from_triple(triple: &[i64]) -> Result<ProcessSpec, SimError> {
    let (pid, arrival, burst) = (triple[0], triple[1], triple[2]);
    if pid <= 0 || pid > i64::from(u32::MAX) {
        return Err(SimError::InvalidPid(pid));
    }
    if arrival < 0 {
        return Err(SimError::InvalidArrival { pid, arrival });
    }
    if burst <= 0 {
        return Err(SimError::InvalidBurst { pid, burst });
    }
    Ok(ProcessSpec {
        pid: pid as Pid,
        arrival: arrival as Ticks,
        burst: burst as Ticks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triples_in_input_order() {
        let specs = parse_workload("3 0 5\n1 2 4\n2 2 1\n").unwrap();
        assert_eq!(
            specs,
            vec![
                ProcessSpec { pid: 3, arrival: 0, burst: 5 },
                ProcessSpec { pid: 1, arrival: 2, burst: 4 },
                ProcessSpec { pid: 2, arrival: 2, burst: 1 },
            ]
        );
    }

    #[test]
    fn empty_input_is_zero_processes() {
        assert_eq!(parse_workload("").unwrap(), vec![]);
    }

    #[test]
    fn rejects_non_integer_token() {
        assert!(matches!(
            parse_workload("1 0 five"),
            Err(SimError::MalformedToken(tok)) if tok == "five"
        ));
    }

    #[test]
    fn rejects_incomplete_trailing_triple() {
        assert!(matches!(
            parse_workload("1 0 5 2 1"),
            Err(SimError::TrailingFields(5))
        ));
    }

    #[test]
    fn rejects_non_positive_burst() {
        assert!(matches!(
            parse_workload("1 0 0"),
            Err(SimError::InvalidBurst { pid: 1, burst: 0 })
        ));
        assert!(matches!(
            parse_workload("1 0 -4"),
            Err(SimError::InvalidBurst { pid: 1, burst: -4 })
        ));
    }

    #[test]
    fn rejects_bad_pid_and_arrival() {
        assert!(matches!(parse_workload("0 0 5"), Err(SimError::InvalidPid(0))));
        assert!(matches!(
            parse_workload("1 -1 5"),
            Err(SimError::InvalidArrival { pid: 1, arrival: -1 })
        ));
    }
}

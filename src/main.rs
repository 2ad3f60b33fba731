use std::io::Write;

use anyhow::{Context, Result};
use clap::{App, Arg};
use env_logger::Builder;

use schedsim::policy;
use schedsim::sim::{load_workload, Sim};

const RULE: &str = "==================================================================";

fn main() -> Result<()> {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let matches = App::new("schedsim")
        .about("Discrete-time CPU scheduling simulator")
        .arg(
            Arg::with_name("taskfile")
                .required(true)
                .index(1)
                .help("Task list file: one 'pid arrival burst' triple per process"),
        )
        .arg(
            Arg::with_name("policy")
                .required(true)
                .index(2)
                .help("Scheduling policy: FCFS, RR or SRTF"),
        )
        .arg(
            Arg::with_name("quantum")
                .index(3)
                .validator(valid_quantum)
                .help("Time quantum (RR only)"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Emit the event log and report as JSON"),
        )
        .get_matches();

    let taskfile = matches.value_of("taskfile").expect("required arg");
    let policy_name = matches.value_of("policy").expect("required arg");
    let quantum = matches
        .value_of("quantum")
        .map(|q| q.parse::<i64>().expect("validated arg"));
    let json = matches.is_present("json");

    let policy = policy::from_config(policy_name, quantum)?;
    let specs = load_workload(taskfile).with_context(|| format!("loading {taskfile}"))?;
    let mut sim = Sim::new(&specs, policy)?;

    if !json {
        println!("Scheduling Policy: {policy_name}");
        println!("There are {} tasks loaded from {taskfile}.", sim.process_count());
        println!("{RULE}");
    }

    let mut events = Vec::new();
    while !sim.done() {
        for event in sim.step() {
            if !json {
                println!("{event}");
            }
            events.push(event);
        }
    }
    let report = sim.report();

    if json {
        let output = serde_json::json!({
            "events": events,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("<time {}> All processes finish ......", report.finished_at);
        println!("{RULE}");
        println!("Average Waiting Time: {:.2}", report.avg_waiting);
        println!("Average Turnaround Time: {:.2}", report.avg_turnaround);
        println!("{RULE}");
    }

    Ok(())
}

fn valid_quantum(value: String) -> std::result::Result<(), String> {
    value
        .parse::<i64>()
        .map(|_| ())
        .map_err(|_| format!("time quantum must be an integer, got '{value}'"))
}
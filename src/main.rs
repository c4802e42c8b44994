//! Command-line front end: runs every policy on a workload and prints
//! Gantt charts with per-process metrics.
//!
//! ```text
//! u-cpusched [WORKLOAD.json] [--quantum N] [--random N] [--seed S] [--json]
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_cpusched::models::Process;
use u_cpusched::scheduler::{ScheduleRun, SimulationRequest};
use u_cpusched::workload::WorkloadGenerator;

/// Runs FCFS, SJF, SRTF and Round-Robin over a workload and prints a Gantt
/// chart with per-process metrics for each.
#[derive(Parser, Debug)]
#[command(name = "u-cpusched", version, about)]
struct Args {
    /// JSON workload file. Defaults to the built-in three-process sample.
    #[arg(value_name = "WORKLOAD.json")]
    workload: Option<PathBuf>,

    /// Round-Robin time quantum (overrides the workload file).
    #[arg(short, long, value_name = "N")]
    quantum: Option<i64>,

    /// Generate N random processes instead of loading a file.
    #[arg(short, long, value_name = "N", conflicts_with = "workload")]
    random: Option<u32>,

    /// Seed for `--random`.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Print the runs as JSON.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    json: bool,
}

fn sample_workload() -> Vec<Process> {
    vec![
        Process::new(1, 0, 5),
        Process::new(2, 1, 3),
        Process::new(3, 2, 8),
    ]
}

fn load_request(args: &Args) -> Result<SimulationRequest> {
    let mut request = match (&args.workload, args.random) {
        (Some(path), _) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        (None, Some(count)) => {
            let mut rng = SmallRng::seed_from_u64(args.seed);
            SimulationRequest::new(WorkloadGenerator::new(count).generate(&mut rng))
        }
        (None, None) => SimulationRequest::new(sample_workload()),
    };

    if let Some(quantum) = args.quantum {
        request = request.with_quantum(quantum);
    }
    Ok(request)
}

fn print_run(run: &ScheduleRun) {
    println!("\n{} Gantt Chart:", run.policy);
    print!("{}", run.gantt_chart());

    println!(
        "{:>4} {:>8} {:>6} {:>11} {:>8} {:>11}",
        "PID", "Arrival", "Burst", "Completion", "Waiting", "Turnaround"
    );
    for p in &run.processes {
        if let Some(m) = p.metrics() {
            println!(
                "{:>4} {:>8} {:>6} {:>11} {:>8} {:>11}",
                format!("P{}", p.id),
                p.arrival_time,
                p.burst_time,
                m.completion_time,
                m.waiting_time,
                m.turnaround_time
            );
        }
    }

    let kpi = run.kpi();
    println!(
        "Average waiting time: {:.2}, average turnaround time: {:.2}, CPU utilization: {:.1}%",
        kpi.avg_waiting_time,
        kpi.avg_turnaround_time,
        kpi.cpu_utilization * 100.0
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let request = load_request(&args)?;
    info!(
        processes = request.processes.len(),
        quantum = request.quantum,
        "loaded workload"
    );

    let runs = request.run().context("simulation rejected")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&runs)?);
    } else {
        for run in &runs {
            print_run(run);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "u-cpusched",
            "--random",
            "7",
            "--seed",
            "42",
            "--quantum",
            "3",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.random, Some(7));
        assert_eq!(args.seed, 42);
        assert_eq!(args.quantum, Some(3));
        assert!(args.json);
        assert!(args.workload.is_none());
    }

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["u-cpusched", "load.json"]).unwrap();
        assert_eq!(args.workload, Some(PathBuf::from("load.json")));
        assert_eq!(args.seed, 0);
        assert_eq!(args.quantum, None);
        assert!(!args.json);
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(Args::try_parse_from(["u-cpusched", "--quantum", "two"]).is_err());
        assert!(Args::try_parse_from(["u-cpusched", "--bogus"]).is_err());
    }

    #[test]
    fn test_random_workload_seeded() {
        let args = Args::try_parse_from(["u-cpusched", "--random", "4", "--seed", "9"]).unwrap();
        let a = load_request(&args).unwrap();
        let b = load_request(&args).unwrap();
        assert_eq!(a.processes.len(), 4);
        assert_eq!(a.processes, b.processes);
    }
}

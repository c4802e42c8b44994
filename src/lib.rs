//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates classical single-CPU scheduling policies over a set of
//! processes on a discrete time axis and reports the resulting timeline
//! (Gantt chart) and per-process metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessMetrics`,
//!   `ExecutionInterval`, `Timeline`
//! - **`validation`**: Input integrity checks (ids, arrivals, bursts, quantum)
//! - **`scheduler`**: FCFS, SJF, SRTF and Round-Robin policies, metrics,
//!   run KPIs, and multi-policy comparison
//! - **`gantt`**: Text Gantt chart rendering
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::{simulate, Policy};
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 8),
//! ];
//! let run = simulate(Policy::RoundRobin { quantum: 2 }, &processes).unwrap();
//! assert_eq!(run.timeline.busy_time(), 16);
//! println!("{}", run.gantt_chart());
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod gantt;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

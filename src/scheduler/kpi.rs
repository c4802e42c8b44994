//! Run quality metrics (KPIs).
//!
//! Computes aggregate performance indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | End of the last interval |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | completed processes / makespan |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Context Switches | adjacent intervals of different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::Serialize;

use super::ScheduleRun;

/// Run performance indicators.
///
/// Averages are taken over completed processes; all are 0 for an empty run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunKpi {
    /// End of the last interval.
    pub makespan: i64,
    /// Total CPU time used.
    pub busy_time: i64,
    /// CPU idle time within `[0, makespan)`.
    pub idle_time: i64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Longest waiting time of any process.
    pub max_waiting_time: i64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Number of process-to-process switches.
    pub context_switches: usize,
}

impl RunKpi {
    /// Computes KPIs from a run.
    pub fn calculate(run: &ScheduleRun) -> Self {
        let makespan = run.timeline.makespan();
        let busy_time = run.timeline.busy_time();

        let mut completed: usize = 0;
        let mut total_waiting: i64 = 0;
        let mut max_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;

        for m in run.processes.iter().filter_map(|p| p.metrics()) {
            completed += 1;
            total_waiting += m.waiting_time;
            max_waiting = max_waiting.max(m.waiting_time);
            total_turnaround += m.turnaround_time;
        }

        let ratio = |num: f64, den: f64| if den > 0.0 { num / den } else { 0.0 };

        Self {
            makespan,
            busy_time,
            idle_time: run.timeline.idle_time(),
            cpu_utilization: ratio(busy_time as f64, makespan as f64),
            throughput: ratio(completed as f64, makespan as f64),
            avg_waiting_time: ratio(total_waiting as f64, completed as f64),
            max_waiting_time: max_waiting,
            avg_turnaround_time: ratio(total_turnaround as f64, completed as f64),
            context_switches: run.timeline.context_switches(),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{simulate, Policy};

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ]
    }

    #[test]
    fn test_kpi_fcfs() {
        let run = simulate(Policy::Fcfs, &sample()).unwrap();
        let kpi = run.kpi();
        assert_eq!(kpi.makespan, 16);
        assert_eq!(kpi.busy_time, 16);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        // Waiting 0, 4, 6
        assert!((kpi.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.max_waiting_time, 6);
        // Turnaround 5, 7, 14
        assert!((kpi.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 2);
    }

    #[test]
    fn test_kpi_srtf_beats_fcfs_on_waiting() {
        let fcfs = simulate(Policy::Fcfs, &sample()).unwrap().kpi();
        let srtf = simulate(Policy::Srtf, &sample()).unwrap().kpi();
        // SRTF waiting 3, 0, 6
        assert!((srtf.avg_waiting_time - 3.0).abs() < 1e-10);
        assert!(srtf.avg_waiting_time < fcfs.avg_waiting_time);
        assert_eq!(srtf.context_switches, 3);
    }

    #[test]
    fn test_kpi_idle_utilization() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 6, 2)];
        let kpi = simulate(Policy::Fcfs, &processes).unwrap().kpi();
        assert_eq!(kpi.idle_time, 4);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = simulate(Policy::Srtf, &[]).unwrap().kpi();
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.context_switches, 0);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let kpi = simulate(Policy::Fcfs, &sample()).unwrap().kpi();
        assert!(kpi.meets_thresholds(4.0, 0.9));
        assert!(!kpi.meets_thresholds(3.0, 0.9));
        assert!(!kpi.meets_thresholds(4.0, 1.5));
    }
}

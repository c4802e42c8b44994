//! Result of one policy run.

use serde::Serialize;

use super::{Policy, RunKpi};
use crate::gantt::GanttChart;
use crate::models::{Process, Timeline};

/// A completed simulation: the timeline plus every process with its final
/// metrics. Processes keep the caller's input order.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRun {
    /// Policy that produced this run.
    pub policy: Policy,
    /// Execution intervals in execution order.
    pub timeline: Timeline,
    /// Processes with final metrics.
    pub processes: Vec<Process>,
}

impl ScheduleRun {
    pub(crate) fn new(policy: Policy, timeline: Timeline, processes: Vec<Process>) -> Self {
        Self {
            policy,
            timeline,
            processes,
        }
    }

    /// Finds a process by id.
    pub fn process(&self, id: u32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Whether every process finished.
    pub fn is_complete(&self) -> bool {
        self.processes.iter().all(Process::is_complete)
    }

    /// Aggregate metrics for this run.
    pub fn kpi(&self) -> RunKpi {
        RunKpi::calculate(self)
    }

    /// Gantt chart of the timeline.
    pub fn gantt_chart(&self) -> GanttChart {
        GanttChart::new(&self.timeline)
    }
}

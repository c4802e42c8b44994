//! Gantt chart formatting.
//!
//! Turns a [`Timeline`] into a bar sequence (one bar per interval, plus
//! explicit idle bars for gaps) and renders it as a fixed-width text table:
//!
//! ```text
//! +-----+---+--------+
//! | P1  |P2 |   P3   |
//! +-----+---+--------+
//! 0     5   8       16
//! ```
//!
//! The formatter only reads the timeline; it never touches process state.

use std::fmt;

use serde::Serialize;

use crate::models::Timeline;

const IDLE_LABEL: &str = "idle";

/// What occupied the CPU during a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BarKind {
    /// A process ran.
    Process(u32),
    /// Nothing was ready.
    Idle,
}

/// One bar of the chart, covering `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GanttBar {
    /// Occupant.
    pub kind: BarKind,
    /// Start time.
    pub start: i64,
    /// End time.
    pub end: i64,
}

impl GanttBar {
    /// Bar length in time units.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Text label (`P<id>` or `idle`).
    pub fn label(&self) -> String {
        match self.kind {
            BarKind::Process(id) => format!("P{id}"),
            BarKind::Idle => IDLE_LABEL.to_string(),
        }
    }
}

/// A Gantt chart built from a timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GanttChart {
    bars: Vec<GanttBar>,
    scale: usize,
}

impl GanttChart {
    /// Builds the bar sequence. The axis always starts at 0, so a late first
    /// arrival shows up as a leading idle bar.
    pub fn new(timeline: &Timeline) -> Self {
        let mut bars = Vec::with_capacity(timeline.len());
        let mut cursor = 0;

        for interval in timeline {
            if interval.start > cursor {
                bars.push(GanttBar {
                    kind: BarKind::Idle,
                    start: cursor,
                    end: interval.start,
                });
            }
            bars.push(GanttBar {
                kind: BarKind::Process(interval.process_id),
                start: interval.start,
                end: interval.end,
            });
            cursor = interval.end;
        }

        Self { bars, scale: 1 }
    }

    /// Sets the number of characters per time unit (minimum 1).
    pub fn with_scale(mut self, scale: usize) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// The bar sequence, in time order.
    pub fn bars(&self) -> &[GanttBar] {
        &self.bars
    }

    /// Whether the chart has no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Renders the four-line text table. Empty charts render as "".
    pub fn render(&self) -> String {
        if self.bars.is_empty() {
            return String::new();
        }

        let cells: Vec<(String, usize)> = self
            .bars
            .iter()
            .map(|bar| {
                let label = bar.label();
                // Room for the closing stamp keeps later stamps under their borders
                let stamp = bar.end.to_string().len();
                let width = (bar.duration().max(0) as usize * self.scale)
                    .max(label.len())
                    .max(stamp);
                (label, width)
            })
            .collect();

        let mut border = String::from("+");
        let mut labels = String::from("|");
        for (label, width) in &cells {
            border.push_str(&"-".repeat(*width));
            border.push('+');

            let pad_left = (width - label.len()) / 2;
            let pad_right = width - label.len() - pad_left;
            labels.push_str(&" ".repeat(pad_left));
            labels.push_str(label);
            labels.push_str(&" ".repeat(pad_right));
            labels.push('|');
        }

        // Each stamp ends under the '+' that closes its bar
        let mut stamps = self.bars[0].start.to_string();
        for (bar, (_, width)) in self.bars.iter().zip(&cells) {
            stamps.push_str(&format!("{:>w$}", bar.end, w = width + 1));
        }

        format!("{border}\n{labels}\n{border}\n{stamps}\n")
    }
}

impl fmt::Display for GanttChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(intervals: &[(u32, i64, i64)]) -> Timeline {
        let mut t = Timeline::new();
        for &(id, s, e) in intervals {
            t.push(id, s, e);
        }
        t
    }

    #[test]
    fn test_render_fcfs_example() {
        let chart = GanttChart::new(&timeline(&[(1, 0, 5), (2, 5, 8), (3, 8, 16)]));
        let expected = "\
+-----+---+--------+
| P1  |P2 |   P3   |
+-----+---+--------+
0     5   8       16
";
        assert_eq!(chart.render(), expected);
    }

    fn assert_stamps_under_borders(chart: &GanttChart) {
        let text = chart.render();
        let lines: Vec<&str> = text.lines().collect();
        let plus: Vec<usize> = lines[0].match_indices('+').map(|(i, _)| i).collect();
        let stamp_ends: Vec<usize> = lines[3]
            .char_indices()
            .filter(|&(i, c)| {
                c.is_ascii_digit()
                    && lines[3][i + 1..].chars().next().map_or(true, |n| n == ' ')
            })
            .map(|(i, _)| i)
            .collect();
        assert_eq!(plus, stamp_ends);
    }

    #[test]
    fn test_stamps_align_with_borders() {
        let chart = GanttChart::new(&timeline(&[(1, 0, 1), (2, 1, 3), (1, 3, 12)]));
        assert_stamps_under_borders(&chart);
    }

    #[test]
    fn test_long_stamps_on_short_bars() {
        let chart = GanttChart::new(&timeline(&[
            (1, 998, 999),
            (2, 999, 1000),
            (3, 1000, 1001),
            (4, 1001, 100_000),
        ]));
        assert_stamps_under_borders(&chart);

        let text = chart.render();
        let stamps = text.lines().nth(3).unwrap();
        assert!(stamps.contains(" 999 "));
        assert!(stamps.contains(" 1000 "));
        assert!(stamps.contains(" 1001 "));
        assert!(stamps.ends_with(" 100000"));
    }

    #[test]
    fn test_idle_gaps_become_bars() {
        let chart = GanttChart::new(&timeline(&[(1, 2, 4), (2, 7, 8)]));
        let kinds: Vec<_> = chart.bars().iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BarKind::Idle,
                BarKind::Process(1),
                BarKind::Idle,
                BarKind::Process(2)
            ]
        );
        assert!(chart.render().contains("idle"));
    }

    #[test]
    fn test_narrow_bar_widens_to_label() {
        let chart = GanttChart::new(&timeline(&[(12, 0, 1)]));
        assert_eq!(chart.render(), "+---+\n|P12|\n+---+\n0   1\n");
    }

    #[test]
    fn test_scale() {
        let chart = GanttChart::new(&timeline(&[(1, 0, 2)])).with_scale(3);
        assert_eq!(chart.render().lines().next(), Some("+------+"));
    }

    #[test]
    fn test_empty_timeline() {
        let chart = GanttChart::new(&Timeline::new());
        assert!(chart.is_empty());
        assert_eq!(chart.render(), "");
        assert_eq!(chart.to_string(), "");
    }
}

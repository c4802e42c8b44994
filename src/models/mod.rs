//! CPU scheduling domain models.
//!
//! Provides the data types a simulation consumes and produces:
//! the processes being scheduled and the timeline of who ran when.
//!
//! # Domain Mappings
//!
//! | u-cpusched | OS textbook | Batch system |
//! |------------|-------------|--------------|
//! | Process | PCB | Job |
//! | ExecutionInterval | Gantt bar | Run slot |
//! | Timeline | Gantt chart | Run log |

mod process;
mod timeline;

pub use process::{Process, ProcessMetrics};
pub use timeline::{ExecutionInterval, Timeline};

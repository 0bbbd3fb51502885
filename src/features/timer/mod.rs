//! Session timer: work/break cycling with history.
//!
//! Provides the countdown state machine, session history persistence,
//! and productivity reports.

pub mod engine;
pub mod report;
pub mod storage;

pub use engine::{format_mmss, Phase, PhaseCause, PhaseChange, SessionTimer};
pub use report::{ReportPeriod, TimerReport};
pub use storage::{SessionRecord, SessionStorage};

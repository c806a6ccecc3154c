//! Small adapters for the clock and report ports.

pub mod report_log;
pub mod system_clock;

pub use report_log::TracingReportSink;
pub use system_clock::SystemClock;

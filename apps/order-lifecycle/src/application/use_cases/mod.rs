//! Application Use Cases

mod process_execution_report;

pub use process_execution_report::{ProcessExecutionReportUseCase, ProcessingError};

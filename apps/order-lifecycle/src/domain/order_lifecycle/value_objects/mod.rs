//! Order Lifecycle Value Objects
//!
//! Immutable types describing inbound reports and recorded fills.

mod exec_type;
mod execution_report;
mod fill;
mod fill_log_policy;
mod order_definition;
mod order_status;

pub use exec_type::ExecType;
pub use execution_report::ExecutionReport;
pub use fill::Fill;
pub use fill_log_policy::FillLogPolicy;
pub use order_definition::OrderDefinition;
pub use order_status::OrderStatus;

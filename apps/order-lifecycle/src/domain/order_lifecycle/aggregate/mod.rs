//! Order Lifecycle Aggregate

mod order_node;
mod order_state;

pub use order_node::OrderNode;
pub use order_state::OrderState;

//! Infrastructure Layer
//!
//! This module contains all adapters (implementations) for the ports defined
//! in the domain and application layers. Following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: Order state store (in-memory)
//!   - `publisher/`: Downstream sinks (tracing log, stdout JSON lines)
//!
//! - **Driver Adapters (Inbound)**
//!   - `codec/`: JSON decoding of inbound records
//!   - `runtime/`: Partitioned worker pool feeding the use case

pub mod codec;
pub mod persistence;
pub mod publisher;
pub mod runtime;

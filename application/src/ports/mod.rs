//! Ports: interfaces implemented outside the application layer

pub mod backend_gateway;
pub mod progress;

//! Use cases orchestrating the consultation flow

pub mod consult;
pub mod dispatch;
pub mod synthesize;

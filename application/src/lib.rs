//! Application layer for council
//!
//! Use cases orchestrate the domain; ports define the interfaces that
//! infrastructure and presentation implement.
//!
//! The central use case is [`ConsultUseCase`]: classify the question (or
//! accept a forced tier), resolve the tier's panel, fan the question out to
//! every role's backend, and synthesize the ordered results into one
//! [`council_domain::FinalAnswer`].

pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

pub use ports::backend_gateway::{BackendError, BackendGateway};
pub use ports::progress::{NoProgress, ProgressNotifier};
pub use use_cases::consult::{ConsultError, ConsultInput, ConsultUseCase};
pub use use_cases::dispatch::PanelDispatcher;
pub use use_cases::synthesize::{SynthesisEngine, SynthesisError};

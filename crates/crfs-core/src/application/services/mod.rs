//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! halves of a run: "collect the user's choices" and "set the project up".

pub mod selection_service;
pub mod setup_service;
pub mod step_runner;

pub use selection_service::{STACK_PROMPT, SelectionService};
pub use setup_service::SetupService;
pub use step_runner::StepRunner;

//! Command runner adapters.

mod dry_run;
mod recording;
mod system;

pub use dry_run::DryRunRunner;
pub use recording::RecordingRunner;
pub use system::SystemRunner;

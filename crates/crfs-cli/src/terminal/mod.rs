//! Terminal-facing implementations of the core ports.
//!
//! - [`DialoguerPrompter`]: arrow-key menus (`interactive` feature)
//! - [`SpinnerRunner`]: wraps another runner with a progress spinner
//! - [`ConsoleObserver`]: prints banners, captured output and results

mod observer;
#[cfg(feature = "interactive")]
mod prompt;
mod spinner;

pub use observer::ConsoleObserver;
#[cfg(feature = "interactive")]
pub use prompt::DialoguerPrompter;
pub use spinner::SpinnerRunner;

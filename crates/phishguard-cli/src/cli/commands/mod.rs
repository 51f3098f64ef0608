//! CLI command handlers, one per file.

pub(crate) mod check;
mod features;
mod health;
pub(crate) mod interactive;
mod meta;
mod samples;

pub use check::run_check;
pub use features::run_features;
pub use health::run_health;
pub use interactive::run_interactive;
pub use meta::{run_completions, run_man};
pub use samples::run_samples;

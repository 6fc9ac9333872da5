//! CLI command handlers. Each command is in its own file.

mod check;
mod clear;
mod history;

pub use check::run_check;
pub use clear::run_clear;
pub use history::run_history;

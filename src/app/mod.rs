pub mod batch;
pub mod shell;

pub use batch::{run_once, RunSummary};
pub use shell::run_shell;

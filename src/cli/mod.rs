mod commands;

pub use commands::{run_extract, Cli};

//! CLI subcommand implementations for the `mscout` binary.

pub mod analyze_cmd;
pub mod batch_cmd;
pub mod logging;
pub mod output;
pub mod progress;

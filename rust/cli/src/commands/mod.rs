//! Command handler modules for the `kems` CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed in, so tests can capture them
//! - Errors propagated as `CliError`; [`crate::run`] prints them and picks the exit code

pub mod cfg;
pub mod deal;
pub mod play;
pub mod rules;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rules::handle_rules_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

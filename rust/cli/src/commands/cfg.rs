//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of each value
//! (default, file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "ai": {
//!     "value": "baseline",
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        },
        "ai_turn_delay_ms": {
            "value": config.ai_turn_delay_ms,
            "source": sources.ai_turn_delay_ms,
        },
        "swap_delay_ms": {
            "value": config.swap_delay_ms,
            "source": sources.swap_delay_ms,
        },
        "reveal_delay_ms": {
            "value": config.reveal_delay_ms,
            "source": sources.reveal_delay_ms,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

//! CLI commands
//!
//! Command implementations for the `lando` binary.

mod progress;
mod push;
mod status;
pub mod style;
mod tags;

pub use push::{PushCommitsOptions, run_push_commits};
pub use status::run_check_job;
pub use tags::run_push_tags;

use lando_cli::error::{Error, Result};

/// Ask before submitting, unless `--yes` was given
///
/// Declining is [`Error::Cancelled`].
fn confirm(prompt: &str, assume_yes: bool) -> Result<()> {
    if assume_yes {
        return Ok(());
    }
    let accepted = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| Error::Io(std::io::Error::other(e)))?;
    if accepted {
        Ok(())
    } else {
        Err(Error::Cancelled)
    }
}

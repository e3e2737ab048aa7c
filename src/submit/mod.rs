//! Three-phase push engine
//!
//! Handles the workflow of sending local history to Lando:
//! 1. Planning - work out the actions and tags to send
//! 2. Confirmation - left to the interface (prompt, `--yes`)
//! 3. Execution - look up the repository and submit one landing job

mod execute;
mod plan;
mod progress;

pub use execute::{PushResult, execute_push, report_dry_run};
pub use plan::{PushPlan, plan_commit_push, plan_tag_push};
pub use progress::{NoopProgress, Phase, ProgressCallback};

//! History analysis
//!
//! Turns the divergence between a local ref and its remote-tracking ref into
//! an ordered list of replayable actions:
//! 1. Enumerate - commits on the local ref but not the remote one, oldest first
//! 2. Extract - one patch document per commit
//! 3. Classify - linear chain or true merge at the tip
//! 4. Assemble - `AddCommit` per commit, collapsed under a `MergeOnto` for merges
//!
//! Tag detection runs independently of the commit pipeline.

mod assemble;
mod enumerate;
mod merge;
mod patch;
mod tags;

pub use assemble::{assemble_actions, assemble_classified};
pub use enumerate::enumerate_commits;
pub use merge::{classify_commits, classify_history};
pub use patch::extract_patches;
pub use tags::detect_new_tags;

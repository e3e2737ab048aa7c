//! lando-cli - submit local git history to Lando
//!
//! Reads the commits, merges and tags a local branch has over its
//! remote-tracking branch and turns them into an ordered list of actions that
//! Lando replays on the real repository.

pub mod config;
pub mod error;
pub mod history;
pub mod lando;
pub mod repo;
pub mod submit;
pub mod types;

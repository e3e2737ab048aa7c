//! JSON shapes sent to Lando

use crate::types::{Action, NewTag};
use serde::{Deserialize, Serialize};

/// One action as Lando expects it on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum LandoAction {
    /// A base64-encoded patch document
    #[serde(rename = "add-commit-base64")]
    AddCommitBase64 {
        /// Standard base64, unwrapped
        content: String,
    },
    /// Merge `target` onto the current branch
    MergeOnto {
        /// Message for the merge commit
        commit_message: String,
        /// Branch name or commit hash
        target: String,
    },
    /// Create a tag
    Tag {
        /// Tag name
        name: String,
        /// Commit hash the tag points at
        target: String,
    },
}

impl From<&Action> for LandoAction {
    fn from(action: &Action) -> Self {
        match action {
            Action::AddCommit { base64_patch } => Self::AddCommitBase64 {
                content: base64_patch.clone(),
            },
            Action::MergeOnto {
                commit_message,
                target,
            } => Self::MergeOnto {
                commit_message: commit_message.clone(),
                target: target.as_str().to_string(),
            },
        }
    }
}

impl From<&NewTag> for LandoAction {
    fn from(tag: &NewTag) -> Self {
        Self::Tag {
            name: tag.name.clone(),
            target: tag.target.clone(),
        }
    }
}

/// Body of a push request
#[derive(Debug, Clone, Serialize)]
pub struct PushRequest<'a> {
    /// Actions in replay order
    pub actions: &'a [LandoAction],
}

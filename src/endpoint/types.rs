//! Entity kind definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A GitHub object category that can be extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum EntityKind {
    Commits,
    CommitComments,
    IssueComments,
    Issues,
    Members,
    Organizations,
    PullRequests,
    Repositories,
}

impl EntityKind {
    /// All supported kinds, in documentation order
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Commits,
        EntityKind::CommitComments,
        EntityKind::IssueComments,
        EntityKind::Issues,
        EntityKind::Members,
        EntityKind::Organizations,
        EntityKind::PullRequests,
        EntityKind::Repositories,
    ];

    /// Name used in configuration and output keys
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Commits => "commits",
            EntityKind::CommitComments => "commit_comments",
            EntityKind::IssueComments => "issue_comments",
            EntityKind::Issues => "issues",
            EntityKind::Members => "members",
            EntityKind::Organizations => "organizations",
            EntityKind::PullRequests => "pull_requests",
            EntityKind::Repositories => "repositories",
        }
    }

    /// Whether the kind lives under a repository and needs one to resolve
    pub fn is_repository_scoped(&self) -> bool {
        !matches!(
            self,
            EntityKind::Members | EntityKind::Organizations | EntityKind::Repositories
        )
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| Error::unsupported_kind(s))
    }
}

impl TryFrom<String> for EntityKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

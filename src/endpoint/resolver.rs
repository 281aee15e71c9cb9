//! Path mapping for GitHub v3 endpoints

use super::types::EntityKind;
use crate::error::{Error, Result};

/// Resolve the resource path for an entity kind within a scope.
///
/// `repository` is ignored for kinds that are not repository scoped and
/// required for the rest.
pub fn resolve(kind: EntityKind, organization: &str, repository: Option<&str>) -> Result<String> {
    let org = organization;
    let repo = || repository.ok_or_else(|| Error::missing_field("repository"));

    let path = match kind {
        EntityKind::Commits => format!("repos/{org}/{}/commits", repo()?),
        EntityKind::CommitComments => format!("repos/{org}/{}/comments", repo()?),
        EntityKind::IssueComments => format!("repos/{org}/{}/issues/comments", repo()?),
        EntityKind::Issues => format!("repos/{org}/{}/issues", repo()?),
        EntityKind::Members => format!("orgs/{org}/members"),
        EntityKind::Organizations => "user/organizations".to_string(),
        EntityKind::PullRequests => format!("repos/{org}/{}/pulls", repo()?),
        EntityKind::Repositories => format!("orgs/{org}/repos"),
    };

    Ok(path)
}

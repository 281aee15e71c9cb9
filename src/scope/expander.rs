//! Expansion of a request into scope units

use super::types::{ExtractionRequest, ExtractionUnit, RepositoryScope};
use crate::endpoint::{self, EntityKind};
use crate::error::Result;
use crate::pagination::{paginate, Fetch};
use tracing::{info, warn};

/// Expand a request into the units to extract, in processing order.
///
/// Kinds that are not repository scoped always give exactly one unit. For
/// `RepositoryScope::All` the organization's repositories are listed first;
/// a failure there is returned as is.
pub async fn expand<F>(request: &ExtractionRequest, fetch: &F) -> Result<Vec<ExtractionUnit>>
where
    F: Fetch + ?Sized,
{
    let kind = request.entity_kind();
    let org = request.organization();

    if !kind.is_repository_scoped() {
        return Ok(vec![ExtractionUnit::new(kind, org, None)]);
    }

    let repositories = match request.repository() {
        // ExtractionRequest refuses to build this combination
        RepositoryScope::None => Vec::new(),
        RepositoryScope::Single(name) => vec![name.clone()],
        RepositoryScope::List(names) => names.clone(),
        RepositoryScope::All => list_repositories(request, fetch).await?,
    };

    Ok(repositories
        .into_iter()
        .map(|repo| ExtractionUnit::new(kind, org, Some(repo)))
        .collect())
}

/// List the names of every repository in the request's organization
pub async fn list_repositories<F>(request: &ExtractionRequest, fetch: &F) -> Result<Vec<String>>
where
    F: Fetch + ?Sized,
{
    let path = endpoint::resolve(EntityKind::Repositories, request.organization(), None)?;
    let records = paginate(
        fetch,
        EntityKind::Repositories,
        &path,
        request.extra_query_params(),
    )
    .await?;

    let mut names = Vec::with_capacity(records.len());
    for record in &records {
        match record.get("name").and_then(|v| v.as_str()) {
            Some(name) => names.push(name.to_string()),
            None => warn!(path, "Skipping repository record without a name"),
        }
    }

    info!(
        organization = request.organization(),
        count = names.len(),
        "Resolved repositories"
    );
    Ok(names)
}

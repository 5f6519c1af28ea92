use github_lookup_client::{GitHubClient, GitHubError};

use crate::models::{ResourceKind, ResourceRecord};

/// The result of one form submission, tagged with what was submitted.
#[derive(Debug)]
pub struct LookupOutcome {
    pub kind: ResourceKind,
    pub identifier: String,
    pub result: Result<ResourceRecord, GitHubError>,
}

/// Resolves a submission against the endpoint selected by `kind` and
/// normalizes the response into a [`ResourceRecord`].
pub async fn perform_lookup(
    github: &dyn GitHubClient,
    kind: ResourceKind,
    identifier: &str,
) -> Result<ResourceRecord, GitHubError> {
    match kind {
        ResourceKind::User => Ok(github.get_user(identifier).await?.into()),
        ResourceKind::Repo => Ok(github.get_repo(identifier).await?.into()),
    }
}

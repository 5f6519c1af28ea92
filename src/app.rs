use github_lookup_client::{GitHubClient, RealGitHubClient};
use reqwest::Client;

use crate::config::Config;

/// The `App` struct holds the long-lived handles that the form loop and its
/// lookup tasks share.
pub struct App {
    /// Client used to resolve lookups against the GitHub API.
    pub github: Box<dyn GitHubClient>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let github = RealGitHubClient::new(
            Client::new(),
            config.gh_base_url.clone(),
            config.gh_access_token.clone(),
        );

        Self {
            github: Box::new(github),
        }
    }
}

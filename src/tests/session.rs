use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use claims::{assert_matches, assert_none, assert_some};
use github_lookup_client::{GitHubClient, GitHubError, GithubRepo, GithubUser, MockGitHubClient};
use http::StatusCode;
use tokio::sync::{mpsc, oneshot};

use crate::app::App;
use crate::lookup::{self, LookupOutcome};
use crate::models::{ResourceKind, ResourceRecord};
use crate::results::ResultList;

fn mock_github() -> MockGitHubClient {
    let mut github = MockGitHubClient::new();

    github.expect_get_user().returning(|login| {
        Ok(GithubUser {
            login: login.into(),
            name: None,
            public_repos: 3,
        })
    });

    github.expect_get_repo().returning(|_| {
        Ok(GithubRepo {
            name: "node".into(),
            stargazers_count: 113_200,
        })
    });

    github
}

#[tokio::test]
async fn test_lookup_uses_the_submitted_kind() {
    let github = mock_github();

    let record = lookup::perform_lookup(&github, ResourceKind::User, "octocat")
        .await
        .unwrap();
    assert_eq!(record.kind(), ResourceKind::User);
    assert_matches!(record, ResourceRecord::User { ref login, .. } if login == "octocat");

    let record = lookup::perform_lookup(&github, ResourceKind::Repo, "nodejs/node")
        .await
        .unwrap();
    assert_eq!(record.kind(), ResourceKind::Repo);
    assert_eq!(record.display_name(), "node");
}

#[tokio::test]
async fn test_failed_lookup_leaves_the_list_unchanged() {
    let mut github = MockGitHubClient::new();
    github.expect_get_user().returning(|_| {
        Err(GitHubError::LookupFailed {
            url: "https://api.github.com/users/does-not-exist-xyz"
                .parse()
                .unwrap(),
            status: StatusCode::NOT_FOUND,
        })
    });

    let result = lookup::perform_lookup(&github, ResourceKind::User, "does-not-exist-xyz").await;

    let mut results = ResultList::new();
    let outcome = LookupOutcome {
        kind: ResourceKind::User,
        identifier: "does-not-exist-xyz".into(),
        result,
    };

    assert_none!(results.apply(outcome));
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_sequential_submissions_append_in_submission_order() {
    let github = mock_github();
    let mut results = ResultList::new();

    for identifier in ["defunkt", "ktsn"] {
        let result = lookup::perform_lookup(&github, ResourceKind::User, identifier).await;
        let outcome = LookupOutcome {
            kind: ResourceKind::User,
            identifier: identifier.into(),
            result,
        };

        assert_some!(results.apply(outcome));
    }

    let order = display_names(&results);
    assert_eq!(order, ["defunkt", "ktsn"]);
}

#[tokio::test]
async fn test_overlapping_completions_append_in_completion_order() {
    let github = GatedGitHubClient::new();
    let release_slow = github.hold("slow");

    let app = Arc::new(App {
        github: Box::new(github),
    });

    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();

    for identifier in ["slow", "fast"] {
        let app = Arc::clone(&app);
        let outcome_tx = outcome_tx.clone();

        tokio::spawn(async move {
            let result =
                lookup::perform_lookup(&*app.github, ResourceKind::User, identifier).await;

            let outcome = LookupOutcome {
                kind: ResourceKind::User,
                identifier: identifier.into(),
                result,
            };

            outcome_tx.send(outcome).unwrap();
        });
    }

    let mut results = ResultList::new();

    // The second submission finishes first, since the first one is gated.
    let outcome = outcome_rx.recv().await.unwrap();
    assert_eq!(outcome.identifier, "fast");
    assert_some!(results.apply(outcome));

    release_slow.send(()).unwrap();
    let outcome = outcome_rx.recv().await.unwrap();
    assert_eq!(outcome.identifier, "slow");
    assert_some!(results.apply(outcome));

    let order = display_names(&results);
    assert_eq!(order, ["fast", "slow"]);
}

fn display_names(results: &ResultList) -> Vec<String> {
    results
        .records()
        .iter()
        .map(|record| record.display_name().to_owned())
        .collect()
}

/// Test client whose responses can be held back until the test releases
/// them, to force a specific completion order.
struct GatedGitHubClient {
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl GatedGitHubClient {
    fn new() -> Self {
        Self {
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Holds back the response for `login` until the returned sender fires.
    fn hold(&self, login: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(login.into(), rx);
        tx
    }
}

#[async_trait]
impl GitHubClient for GatedGitHubClient {
    async fn get_user(&self, login: &str) -> Result<GithubUser, GitHubError> {
        let gate = self.gates.lock().unwrap().remove(login);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        Ok(GithubUser {
            login: login.into(),
            name: None,
            public_repos: 0,
        })
    }

    async fn get_repo(&self, _path: &str) -> Result<GithubRepo, GitHubError> {
        Err(GitHubError::Other(anyhow!("not used by these tests")))
    }
}

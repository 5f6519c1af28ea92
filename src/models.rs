use std::fmt;
use std::str::FromStr;

use github_lookup_client::{GithubRepo, GithubUser};

/// The two record kinds the lookup form can resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    User,
    Repo,
}

impl ResourceKind {
    /// All kinds, in the order the form selector offers them.
    pub const ALL: [ResourceKind; 2] = [ResourceKind::User, ResourceKind::Repo];
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::User => "user",
            ResourceKind::Repo => "repo",
        };

        write!(f, "{name}")
    }
}

impl FromStr for ResourceKind {
    type Err = UnrecognizedKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ResourceKind::User),
            "repo" => Ok(ResourceKind::Repo),
            _ => Err(UnrecognizedKind(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognized resource kind: {0}")]
pub struct UnrecognizedKind(String);

/// A normalized lookup result, ready for display.
///
/// The variant fixes which caption a record renders with, so a user can
/// never show a star count and a repository can never show a repository
/// count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceRecord {
    User {
        /// Display name of the account. `None` when the account never set
        /// one.
        name: Option<String>,
        login: String,
        public_repos: u32,
    },
    Repo {
        name: String,
        stargazers_count: u32,
    },
}

impl ResourceRecord {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceRecord::User { .. } => ResourceKind::User,
            ResourceRecord::Repo { .. } => ResourceKind::Repo,
        }
    }

    /// The headline of the record. Users without a display name fall back
    /// to their login.
    pub fn display_name(&self) -> &str {
        match self {
            ResourceRecord::User { name, login, .. } => name.as_deref().unwrap_or(login),
            ResourceRecord::Repo { name, .. } => name,
        }
    }

    /// The kind-dependent second line of the record.
    pub fn caption(&self) -> String {
        match self {
            ResourceRecord::User { public_repos, .. } => {
                format!("repository count: {public_repos}")
            }
            ResourceRecord::Repo {
                stargazers_count, ..
            } => format!("star count: {stargazers_count}"),
        }
    }
}

impl From<GithubUser> for ResourceRecord {
    fn from(user: GithubUser) -> Self {
        ResourceRecord::User {
            name: user.name,
            login: user.login,
            public_repos: user.public_repos,
        }
    }
}

impl From<GithubRepo> for ResourceRecord {
    fn from(repo: GithubRepo) -> Self {
        ResourceRecord::Repo {
            name: repo.name,
            stargazers_count: repo.stargazers_count,
        }
    }
}

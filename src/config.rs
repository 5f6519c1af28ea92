use anyhow::Context;
use github_lookup_client::DEFAULT_BASE_URL;
use secrecy::SecretString;
use url::Url;

#[derive(Debug)]
pub struct Config {
    /// Base URL for the GitHub API. Overriding this allows pointing the
    /// application at a GitHub Enterprise instance or a local test server.
    pub gh_base_url: Url,

    /// Token for authenticated API requests. Anonymous requests work too,
    /// but are subject to much stricter rate limits.
    pub gh_access_token: Option<SecretString>,
}

impl Config {
    /// Reads the configuration from environment variables:
    ///
    /// - `GITHUB_BASE_URL`: alternative API base URL (defaults to the
    ///   public GitHub API)
    /// - `GITHUB_ACCESS_TOKEN`: optional personal access token
    pub fn from_environment() -> anyhow::Result<Self> {
        let gh_base_url = match var("GITHUB_BASE_URL")? {
            Some(value) => value
                .parse()
                .context("Failed to parse GITHUB_BASE_URL environment variable")?,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let gh_access_token = var("GITHUB_ACCESS_TOKEN")?.map(SecretString::from);

        Ok(Self {
            gh_base_url,
            gh_access_token,
        })
    }
}

/// Reads an environment variable for the current process, loading `.env`
/// files via [dotenvy] first. Returns `Ok(None)` instead of `Err` if the
/// variable isn't set.
fn var(key: &str) -> anyhow::Result<Option<String>> {
    match dotenvy::var(key) {
        Ok(content) => Ok(Some(content)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_none, assert_ok, assert_some};
    use secrecy::ExposeSecret;
    use std::sync::{LazyLock, Mutex};

    /// A mutex to ensure that the tests don't run in parallel, since they all
    /// modify the shared environment variables.
    static MUTEX: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    fn clear_env() {
        unsafe { std::env::remove_var("GITHUB_BASE_URL") };
        unsafe { std::env::remove_var("GITHUB_ACCESS_TOKEN") };
    }

    #[test]
    fn test_defaults() {
        let _guard = MUTEX.lock().unwrap();
        clear_env();

        let config = assert_ok!(Config::from_environment());
        assert_eq!(config.gh_base_url.as_str(), "https://api.github.com/");
        assert_none!(config.gh_access_token);
    }

    #[test]
    fn test_overrides() {
        let _guard = MUTEX.lock().unwrap();
        clear_env();

        unsafe { std::env::set_var("GITHUB_BASE_URL", "http://localhost:8000") };
        unsafe { std::env::set_var("GITHUB_ACCESS_TOKEN", "test_token") };

        let config = assert_ok!(Config::from_environment());
        assert_eq!(config.gh_base_url.as_str(), "http://localhost:8000/");

        let token = assert_some!(config.gh_access_token);
        assert_eq!(token.expose_secret(), "test_token");

        clear_env();
    }

    #[test]
    fn test_invalid_base_url() {
        let _guard = MUTEX.lock().unwrap();
        clear_env();

        unsafe { std::env::set_var("GITHUB_BASE_URL", "not a url") };

        let error = assert_err!(Config::from_environment());
        assert_eq!(
            error.to_string(),
            "Failed to parse GITHUB_BASE_URL environment variable"
        );

        clear_env();
    }
}

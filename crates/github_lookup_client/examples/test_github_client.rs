use anyhow::Result;
use github_lookup_client::{DEFAULT_BASE_URL, GitHubClient, RealGitHubClient};
use reqwest::Client;
use secrecy::SecretString;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(clap::Parser, Debug)]
enum Request {
    GetUser {
        login: String,
        #[clap(long, env = "GITHUB_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: Url,
        #[clap(long, env = "GITHUB_ACCESS_TOKEN", hide_env_values = true)]
        access_token: Option<SecretString>,
    },
    GetRepo {
        path: String,
        #[clap(long, env = "GITHUB_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: Url,
        #[clap(long, env = "GITHUB_ACCESS_TOKEN", hide_env_values = true)]
        access_token: Option<SecretString>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    use clap::Parser;

    init_tracing();

    match Request::parse() {
        Request::GetUser {
            login,
            base_url,
            access_token,
        } => {
            let github = RealGitHubClient::new(Client::new(), base_url, access_token);
            let response = github.get_user(&login).await?;
            println!("{response:#?}");
        }
        Request::GetRepo {
            path,
            base_url,
            access_token,
        } => {
            let github = RealGitHubClient::new(Client::new(), base_url, access_token);
            let response = github.get_repo(&path).await?;
            println!("{response:#?}");
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .init();
}

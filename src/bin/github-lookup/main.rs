#[macro_use]
extern crate tracing;

mod prompt;

use std::pin::pin;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use github_lookup::app::App;
use github_lookup::config::Config;
use github_lookup::lookup::{self, LookupOutcome};
use github_lookup::models::ResourceKind;
use github_lookup::results::ResultList;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::prompt::FormAction;

#[derive(clap::Parser, Debug)]
#[command(name = "github-lookup")]
struct Options {
    /// Kind the form selector starts out on (`user` or `repo`).
    #[arg(long, default_value = "user")]
    kind: ResourceKind,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    github_lookup::util::tracing::init();

    let options = Options::parse();

    let config = Config::from_environment().context("Failed to load the configuration")?;
    let app = Arc::new(App::new(&config));

    println!("Look up GitHub users and repositories.");
    println!("Results are appended below as they arrive; quit with Esc or Ctrl-C.");
    println!();

    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    let mut results = ResultList::new();
    let mut kind = options.kind;

    let mut form = pin!(prompt::read_submission(kind));

    loop {
        tokio::select! {
            action = &mut form => {
                match action? {
                    FormAction::Submit { kind: submitted, identifier } => {
                        kind = submitted;
                        submit(&app, &outcome_tx, submitted, identifier);
                    }
                    FormAction::Quit => break,
                }

                form.set(prompt::read_submission(kind));
            }
            Some(outcome) = outcome_rx.recv() => {
                print_outcome(&mut results, outcome);
            }
        }
    }

    if !results.is_empty() {
        println!();
        println!("Session results:");
        println!();
        print!("{results}");
    }

    Ok(())
}

/// Starts one lookup task for a submission.
///
/// Nothing throttles overlapping submissions: every task reports its
/// outcome through `outcome_tx` whenever the upstream responds, so the
/// results list follows completion order.
fn submit(
    app: &Arc<App>,
    outcome_tx: &UnboundedSender<LookupOutcome>,
    kind: ResourceKind,
    identifier: String,
) {
    let app = Arc::clone(app);
    let outcome_tx = outcome_tx.clone();

    tokio::spawn(async move {
        let result = lookup::perform_lookup(&*app.github, kind, &identifier).await;
        let outcome = LookupOutcome {
            kind,
            identifier,
            result,
        };

        if outcome_tx.send(outcome).is_err() {
            debug!("The form loop is gone; dropping a completed lookup");
        }
    });
}

/// Folds a completed lookup into the list and prints the new entry.
/// Failures are only logged; the list stays as it is.
fn print_outcome(results: &mut ResultList, outcome: LookupOutcome) {
    let Some((position, record)) = results.apply(outcome) else {
        return;
    };

    println!(
        "{position}. {} ({})",
        record.display_name().bold(),
        record.kind()
    );
    println!("   {}", record.caption());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }
}

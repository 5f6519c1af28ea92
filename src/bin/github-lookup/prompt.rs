use std::io::ErrorKind;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use github_lookup::models::ResourceKind;
use github_lookup::tasks::spawn_blocking;

/// What the user did with the lookup form.
#[derive(Debug)]
pub enum FormAction {
    Submit {
        kind: ResourceKind,
        identifier: String,
    },
    Quit,
}

/// Prompts for one form submission on a blocking thread.
///
/// The kind selector starts out on `default_kind`, so repeated submissions
/// of the same kind only need a confirmation keystroke.
pub async fn read_submission(default_kind: ResourceKind) -> anyhow::Result<FormAction> {
    spawn_blocking(move || match sync_read_submission(default_kind) {
        // `Ctrl-C` surfaces as an interrupted read; treat it like quitting
        // the form.
        Err(dialoguer::Error::IO(error)) if error.kind() == ErrorKind::Interrupted => {
            Ok(FormAction::Quit)
        }
        result => result.map_err(anyhow::Error::from),
    })
    .await
}

fn sync_read_submission(default_kind: ResourceKind) -> dialoguer::Result<FormAction> {
    let theme = ColorfulTheme::default();

    let kinds = ResourceKind::ALL;
    let default_index = kinds
        .iter()
        .position(|kind| *kind == default_kind)
        .unwrap_or(0);

    let Some(selection) = Select::with_theme(&theme)
        .with_prompt("Kind")
        .items(&kinds)
        .default(default_index)
        .interact_opt()?
    else {
        // `Esc` ends the session.
        return Ok(FormAction::Quit);
    };

    let kind = kinds[selection];

    let hint = match kind {
        ResourceKind::User => "defunkt",
        ResourceKind::Repo => "nodejs/node",
    };

    let identifier: String = Input::with_theme(&theme)
        .with_prompt(format!("Identifier (e.g. {hint})"))
        .allow_empty(true)
        .interact_text()?;

    Ok(FormAction::Submit { kind, identifier })
}

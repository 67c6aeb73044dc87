use std::fs;
use std::io::Read;

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{PanelError, PanelResult};
use crate::formatting::print_import_outcome;
use crate::panel_error;
use crate::wizard::{Notifier, TerminalNotifier};

use super::ensure_admin;

pub async fn handle_import(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_import_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_import_impl(matches: &ArgMatches) -> PanelResult<()> {
    match matches.subcommand() {
        Some(("single", sub_matches)) => import_single(sub_matches).await,
        Some(("batch", sub_matches)) => import_batch(sub_matches).await,
        _ => Err(PanelError::InvalidInput(
            "Use 'teamgate import single' or 'teamgate import batch'".to_string(),
        )),
    }
}

/// Empty optional fields are normalized to absent, never sent as "".
fn optional_field(matches: &ArgMatches, name: &str) -> Option<String> {
    matches
        .get_one::<String>(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

async fn import_single(matches: &ArgMatches) -> PanelResult<()> {
    let mut notifier = TerminalNotifier;

    let access_token = matches
        .get_one::<String>("token")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if access_token.is_empty() {
        return Err(panel_error!(InvalidInput, "Access token must not be empty"));
    }

    let email = optional_field(matches, "email");
    let account_id = optional_field(matches, "account-id");

    let mut context = CliContext::load();
    let client = context.client()?;
    ensure_admin(&client).await?;

    notifier.loading("Importing team account...");
    match client
        .import_team_single(&access_token, email.as_deref(), account_id.as_deref())
        .await
    {
        Ok(outcome) if outcome.success => {
            let message = outcome
                .message
                .unwrap_or_else(|| "Team imported".to_string());
            notifier.success(&message);
            Ok(())
        }
        Ok(outcome) => {
            let message = outcome
                .error
                .unwrap_or_else(|| "Import was rejected by the server".to_string());
            notifier.error(&message);
            Err(PanelError::ServerError(message))
        }
        Err(e) => {
            notifier.error(&e.to_string());
            Err(e)
        }
    }
}

async fn import_batch(matches: &ArgMatches) -> PanelResult<()> {
    let mut notifier = TerminalNotifier;

    let content = match matches.get_one::<String>("file") {
        Some(path) if path == "-" => read_stdin()?,
        Some(path) => fs::read_to_string(path)?,
        None => read_stdin()?,
    };

    if content.trim().is_empty() {
        return Err(panel_error!(InvalidInput, "No account data found in the input"));
    }

    let mut context = CliContext::load();
    let client = context.client()?;
    ensure_admin(&client).await?;

    notifier.loading("Importing accounts...");
    match client.import_team_batch(&content).await {
        Ok(outcome) if outcome.success => {
            print_import_outcome(&outcome);
            if outcome.failed_count > 0 {
                notifier.info(&format!("{} row(s) failed, see the table above", outcome.failed_count));
            } else {
                notifier.success("Batch import finished");
            }
            Ok(())
        }
        Ok(outcome) => {
            let message = outcome
                .error
                .unwrap_or_else(|| "Batch import was rejected by the server".to_string());
            notifier.error(&message);
            Err(PanelError::ServerError(message))
        }
        Err(e) => {
            notifier.error(&e.to_string());
            Err(e)
        }
    }
}

fn read_stdin() -> PanelResult<String> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

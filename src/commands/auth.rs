use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, PanelError, PanelResult};
use crate::wizard::prompt::prompt_line;
use crate::wizard::{Notifier, TerminalNotifier};

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_auth_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_auth_impl(matches: &ArgMatches) -> PanelResult<()> {
    match matches.subcommand() {
        Some(("login", sub_matches)) => login(sub_matches).await,
        Some(("status", _)) => status().await,
        Some(("logout", _)) => logout().await,
        _ => Err(PanelError::InvalidInput(
            "Use 'teamgate auth login', 'teamgate auth status' or 'teamgate auth logout'".to_string(),
        )),
    }
}

async fn login(matches: &ArgMatches) -> PanelResult<()> {
    let mut notifier = TerminalNotifier;

    let username = match matches.get_one::<String>("username") {
        Some(name) => name.clone(),
        None => prompt_line("Username")?,
    };
    let password = match matches.get_one::<String>("password") {
        Some(pass) => pass.clone(),
        None => prompt_line("Password")?,
    };

    if username.trim().is_empty() || password.is_empty() {
        return Err(PanelError::InvalidInput(
            "Username and password are both required".to_string(),
        ));
    }

    let mut context = CliContext::load();
    let client = context.client()?;

    notifier.loading("Logging in...");
    let session = client.login(username.trim(), &password).await?;

    match session {
        Some(token) => {
            context.set_session_token(token)?;
            notifier.success(&format!("Logged in as {}", username.trim()));
            Ok(())
        }
        None => Err(PanelError::ServerError(
            "Login succeeded but the server did not start a session".to_string(),
        )),
    }
}

async fn status() -> PanelResult<()> {
    let mut context = CliContext::load();
    let client = context.client()?;

    let status = client.auth_status().await.context("Failed to query auth status")?;

    if status.authenticated {
        match status.username {
            Some(name) => println!("{} logged in as {}", "✓".green(), name.bold()),
            None => println!("{} logged in", "✓".green()),
        }
    } else {
        println!("{} not logged in", "✗".red());
    }

    Ok(())
}

async fn logout() -> PanelResult<()> {
    let mut notifier = TerminalNotifier;
    let mut context = CliContext::load();

    if !context.has_session() {
        notifier.info("No stored session");
        return Ok(());
    }

    let client = context.client()?;
    // Clear the local token even if the server-side logout fails
    let result = client.logout().await;
    context.clear_session_token()?;

    match result {
        Ok(()) => notifier.success("Logged out"),
        Err(e) => notifier.error(&format!("Server logout failed, local session cleared: {}", e)),
    }

    Ok(())
}

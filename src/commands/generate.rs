use std::fs;
use std::io::{stdout, IsTerminal, Write};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::constants::{GENERATE_BATCH_MAX, GENERATE_BATCH_MIN};
use crate::error::{PanelError, PanelResult};
use crate::formatting::print_generated_codes;
use crate::panel_error;
use crate::wizard::{Notifier, TerminalNotifier};

use super::ensure_admin;

pub async fn handle_generate(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_generate_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_generate_impl(matches: &ArgMatches) -> PanelResult<()> {
    match matches.subcommand() {
        Some(("single", sub_matches)) => generate_single(sub_matches).await,
        Some(("batch", sub_matches)) => generate_batch(sub_matches).await,
        _ => Err(PanelError::InvalidInput(
            "Use 'teamgate generate single' or 'teamgate generate batch'".to_string(),
        )),
    }
}

/// Checked locally before any request is sent.
pub fn validate_batch_count(count: u32) -> PanelResult<u32> {
    if !(GENERATE_BATCH_MIN..=GENERATE_BATCH_MAX).contains(&count) {
        return Err(panel_error!(
            InvalidInput,
            "count must be between {} and {}",
            GENERATE_BATCH_MIN,
            GENERATE_BATCH_MAX
        ));
    }
    Ok(count)
}

async fn generate_single(matches: &ArgMatches) -> PanelResult<()> {
    let mut notifier = TerminalNotifier;

    let custom_code = matches
        .get_one::<String>("code")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let expires_days = matches.get_one::<u32>("expires-days").copied();

    let mut context = CliContext::load();
    let client = context.client()?;
    ensure_admin(&client).await?;

    notifier.loading("Generating redemption code...");
    let outcome = client
        .generate_code_single(custom_code.as_deref(), expires_days)
        .await
        .map_err(|e| {
            notifier.error(&e.to_string());
            e
        })?;

    if !outcome.success {
        let message = outcome
            .error
            .unwrap_or_else(|| "Code generation was rejected by the server".to_string());
        notifier.error(&message);
        return Err(PanelError::ServerError(message));
    }

    print_generated_codes(&outcome);
    notifier.success("Code generated");

    if matches.get_flag("copy") {
        if let Some(code) = &outcome.code {
            // Best effort; a clipboard failure is never fatal
            if let Err(e) = copy_to_clipboard(code) {
                notifier.error(&e.to_string());
            } else {
                notifier.info("Copied to clipboard");
            }
        }
    }

    Ok(())
}

async fn generate_batch(matches: &ArgMatches) -> PanelResult<()> {
    let mut notifier = TerminalNotifier;

    let count = matches
        .get_one::<u32>("count")
        .copied()
        .ok_or_else(|| panel_error!(InvalidInput, "count is required"))?;
    let count = validate_batch_count(count)?;
    let expires_days = matches.get_one::<u32>("expires-days").copied();

    let mut context = CliContext::load();
    let client = context.client()?;
    ensure_admin(&client).await?;

    notifier.loading(&format!("Generating {} redemption codes...", count));
    let outcome = client
        .generate_code_batch(count, expires_days)
        .await
        .map_err(|e| {
            notifier.error(&e.to_string());
            e
        })?;

    if !outcome.success {
        let message = outcome
            .error
            .unwrap_or_else(|| "Code generation was rejected by the server".to_string());
        notifier.error(&message);
        return Err(PanelError::ServerError(message));
    }

    print_generated_codes(&outcome);

    if let Some(path) = matches.get_one::<String>("output") {
        let mut body = outcome.codes.join("\n");
        body.push('\n');
        fs::write(path, body)?;
        notifier.success(&format!("Wrote {} code(s) to {}", outcome.codes.len(), path));
    } else {
        notifier.success("Codes generated");
    }

    Ok(())
}

/// OSC 52 clipboard write, the only mechanism available over a plain
/// terminal stream. Requires a tty and a terminal that honors the sequence.
fn copy_to_clipboard(text: &str) -> PanelResult<()> {
    let mut out = stdout();
    if !out.is_terminal() {
        return Err(PanelError::Clipboard(
            "stdout is not a terminal, clipboard unavailable".to_string(),
        ));
    }

    let encoded = BASE64.encode(text.as_bytes());
    write!(out, "\x1b]52;c;{}\x07", encoded)
        .and_then(|_| out.flush())
        .map_err(|e| PanelError::Clipboard(e.to_string()))
}

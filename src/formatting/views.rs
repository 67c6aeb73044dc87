use colored::*;

use crate::models::{GenerateOutcome, ImportOutcome};
use crate::wizard::StepOutcome;

use super::utils::{format_expiry, sanitize, truncate};

/// Step-3 result view: the wizard's terminal state, success or failure.
pub fn print_result_view(outcome: &StepOutcome) {
    println!("\n{}", "─".repeat(60).bright_black());

    match outcome {
        StepOutcome::Success {
            team_name,
            email,
            expires_at,
            message,
        } => {
            println!("{} {}", "✓".green().bold(), "You have joined the team!".green().bold());
            if let Some(name) = team_name {
                println!("{}: {}", "Team".bold(), sanitize(name));
            }
            println!("{}: {}", "Email".bold(), sanitize(email));
            if let Some(expires) = expires_at {
                println!("{}: {}", "Subscription expires".bold(), format_expiry(expires));
            }
            if let Some(message) = message {
                println!("{}", sanitize(message).dimmed());
            }
        }
        StepOutcome::Failure { message } => {
            println!("{} {}", "✗".red().bold(), "Redemption failed".red().bold());
            println!("{}: {}", "Reason".bold(), sanitize(message));
            println!(
                "{}",
                "You can retry from step 1 or run 'teamgate redeem' again.".dimmed()
            );
        }
    }

    println!("{}", "─".repeat(60).bright_black());
}

/// Summary line plus a per-row status table for a batch import.
pub fn print_import_outcome(outcome: &ImportOutcome) {
    println!(
        "Imported {} account(s): {} succeeded, {} failed",
        outcome.total,
        outcome.success_count.to_string().green(),
        outcome.failed_count.to_string().red()
    );

    if outcome.results.is_empty() {
        return;
    }

    println!("{:<32} {:<8} {:<50}", "Email".bold(), "Status".bold(), "Detail".bold());
    println!("{}", "-".repeat(92));
    for row in &outcome.results {
        let email = row.email.as_deref().map(sanitize).unwrap_or_else(|| "-".to_string());
        let status = if row.success {
            "ok".green()
        } else {
            "failed".red()
        };
        println!(
            "{:<32} {:<8} {:<50}",
            truncate(&email, 30),
            status,
            truncate(&sanitize(row.detail()), 48)
        );
    }
}

pub fn print_generated_codes(outcome: &GenerateOutcome) {
    if let Some(code) = &outcome.code {
        println!("{}: {}", "Code".bold(), sanitize(code).bright_blue().bold());
        return;
    }

    for code in &outcome.codes {
        println!("{}", sanitize(code));
    }
    println!("Generated {} code(s)", outcome.total.to_string().green());
}

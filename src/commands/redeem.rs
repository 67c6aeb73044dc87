use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::config::load_config;
use crate::error::{PanelError, PanelResult};
use crate::formatting::print_result_view;
use crate::panel_error;
use crate::wizard::prompt::{pick_team, prompt_line, prompt_line_with_default, prompt_yes_no};
use crate::wizard::{
    Notifier, Selection, StepOutcome, TerminalNotifier, WizardCommand, WizardRunner, WizardStep,
};

pub async fn handle_redeem(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_redeem_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_redeem_impl(matches: &ArgMatches) -> PanelResult<()> {
    let mut context = CliContext::load();
    let client = context.client()?;
    let mut notifier = TerminalNotifier;
    let mut runner = WizardRunner::new(&client, &mut notifier);

    let flag_email = matches.get_one::<String>("email").cloned();
    let flag_code = matches.get_one::<String>("code").cloned();
    let team_flag = match matches.get_one::<String>("team") {
        Some(raw) => Some(
            raw.parse::<i64>()
                .map_err(|_| panel_error!(InvalidInput, "'{}' is not a valid team id", raw))?,
        ),
        None => None,
    };
    let auto = matches.get_flag("auto");

    // With both inputs on the command line the run is scriptable: failures
    // are fatal instead of re-prompted
    let prompts_allowed = flag_email.is_none() || flag_code.is_none();

    let mut email = match flag_email {
        Some(email) => email,
        None => {
            let config = load_config();
            match config.default_email {
                Some(default) => prompt_line_with_default("Email", &default)?,
                None => prompt_line("Email")?,
            }
        }
    };
    let mut code = match flag_code {
        Some(code) => code,
        None => prompt_line("Redemption code")?,
    };

    loop {
        // Step 1: verify, re-prompting on failure when interactive
        loop {
            runner
                .dispatch(WizardCommand::SubmitVerify {
                    email: email.clone(),
                    code: code.clone(),
                })
                .await?;

            match runner.state().step {
                WizardStep::Selecting => break,
                _ => {
                    let message = runner
                        .state()
                        .error
                        .clone()
                        .unwrap_or_else(|| "Verification failed".to_string());
                    if !prompts_allowed {
                        // Validation never reaches the network, so the
                        // session is still unset when input was rejected
                        if runner.state().session.is_none() {
                            return Err(PanelError::InvalidInput(message));
                        }
                        return Err(PanelError::ServerError(message));
                    }
                    email = prompt_line_with_default("Email", &email)?;
                    code = prompt_line_with_default("Redemption code", &code)?;
                }
            }
        }

        // Step 2: pick a team (flag, auto, or interactive picker)
        let selection = if let Some(team_id) = team_flag {
            let eligible = runner.state().teams.iter().any(|t| t.id == team_id);
            if !eligible {
                return Err(panel_error!(
                    InvalidInput,
                    "Team {} is not in the eligible list for this code",
                    team_id
                ));
            }
            Selection::Team(team_id)
        } else if auto {
            Selection::Auto
        } else {
            pick_team(&runner.state().teams)?
        };

        match selection {
            Selection::Cancel => {
                runner.dispatch(WizardCommand::BackToStep1).await?;
                TerminalNotifier.info("Selection cancelled");
                return Ok(());
            }
            Selection::Team(team_id) => {
                runner.dispatch(WizardCommand::SelectTeam(team_id)).await?;
            }
            Selection::Auto => {
                runner.dispatch(WizardCommand::AutoSelect).await?;
            }
        }

        // Step 3: terminal result view with recovery actions on failure
        match runner.state().step.clone() {
            WizardStep::Completed(outcome) => {
                print_result_view(&outcome);
                match outcome {
                    StepOutcome::Success { .. } => return Ok(()),
                    StepOutcome::Failure { message } => {
                        if prompts_allowed && prompt_yes_no("Try again from step 1?")? {
                            runner.dispatch(WizardCommand::BackToStep1).await?;
                            email = prompt_line_with_default("Email", &email)?;
                            code = prompt_line_with_default("Redemption code", &code)?;
                            continue;
                        }
                        return Err(PanelError::ServerError(message));
                    }
                }
            }
            _ => {
                return Err(PanelError::Unknown(
                    "Wizard did not reach a terminal state".to_string(),
                ))
            }
        }
    }
}

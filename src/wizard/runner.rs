use crate::client::PanelClient;
use crate::error::{PanelError, PanelResult};
use crate::logging::{log_error, log_info};

use super::notifications::Notifier;
use super::state::{
    ResolveOutcome, SideEffect, StepOutcome, VerifyOutcome, WizardCommand, WizardMachine,
    WizardState, WizardStep,
};

/// Drives the wizard machine against the backend: commands go in, side
/// effects run as HTTP calls, completions are fed back as commands. One
/// runner per process; effects run sequentially and are not cancellable.
pub struct WizardRunner<'a> {
    client: &'a PanelClient,
    notifier: &'a mut dyn Notifier,
    machine: WizardMachine,
}

impl<'a> WizardRunner<'a> {
    pub fn new(client: &'a PanelClient, notifier: &'a mut dyn Notifier) -> Self {
        Self {
            client,
            notifier,
            machine: WizardMachine::new(),
        }
    }

    pub fn state(&self) -> &WizardState {
        self.machine.state()
    }

    pub async fn dispatch(&mut self, command: WizardCommand) -> PanelResult<()> {
        let effects = self.machine.process(command);
        self.execute(effects).await
    }

    async fn execute(&mut self, effects: Vec<SideEffect>) -> PanelResult<()> {
        for effect in effects {
            match effect {
                SideEffect::CallVerify { code } => {
                    self.notifier.loading("Checking redemption code...");
                    let outcome = self.run_verify(&code).await;

                    // Completion commands clear busy on every path and never
                    // emit further effects
                    let follow_up = self
                        .machine
                        .process(WizardCommand::VerifyCompleted(outcome));
                    debug_assert!(follow_up.is_empty());

                    match &self.machine.state().step {
                        WizardStep::Selecting => {
                            let count = self.machine.state().teams.len();
                            log_info(&format!("verify accepted, {} team(s) eligible", count));
                            self.notifier
                                .success(&format!("Code accepted, {} team(s) available", count));
                        }
                        _ => {
                            if let Some(error) = self.machine.state().error.clone() {
                                log_error(&format!("verify failed: {}", error));
                                self.notifier.error(&error);
                            }
                        }
                    }
                }

                SideEffect::CallConfirm {
                    email,
                    code,
                    team_id,
                } => {
                    self.notifier.loading("Joining team...");
                    let outcome = self.run_confirm(&email, &code, team_id).await;

                    let follow_up = self
                        .machine
                        .process(WizardCommand::ResolveCompleted(outcome));
                    debug_assert!(follow_up.is_empty());

                    match &self.machine.state().step {
                        WizardStep::Completed(StepOutcome::Success { .. }) => {
                            log_info(&format!("redemption confirmed for {}", email));
                            self.notifier.success("Redemption complete");
                        }
                        WizardStep::Completed(StepOutcome::Failure { message }) => {
                            log_error(&format!("confirm failed: {}", message));
                            self.notifier.error(&message.clone());
                        }
                        _ => {}
                    }
                }
            }
        }

        Ok(())
    }

    async fn run_verify(&mut self, code: &str) -> VerifyOutcome {
        match self.client.verify_code(code).await {
            Ok(response) => {
                if !response.success {
                    VerifyOutcome::ServerFailure {
                        error: response
                            .error
                            .or(response.reason)
                            .unwrap_or_else(|| "The server could not verify the code".to_string()),
                    }
                } else if !response.valid {
                    VerifyOutcome::Invalid {
                        reason: response.reason,
                    }
                } else {
                    VerifyOutcome::Valid {
                        teams: response.teams,
                    }
                }
            }
            // Transport failure is reported distinctly from a server-reported one
            Err(PanelError::NetworkError(e)) => VerifyOutcome::NetworkFailure {
                error: format!("Could not reach the server: {}", e),
            },
            Err(e) => VerifyOutcome::ServerFailure {
                error: e.to_string(),
            },
        }
    }

    async fn run_confirm(
        &mut self,
        email: &str,
        code: &str,
        team_id: Option<i64>,
    ) -> ResolveOutcome {
        match self.client.confirm_redemption(email, code, team_id).await {
            Ok(response) => {
                if response.success {
                    ResolveOutcome::Success {
                        team_info: response.team_info,
                        message: response.message,
                    }
                } else {
                    ResolveOutcome::Failure {
                        error: response
                            .error
                            .or(response.message)
                            .unwrap_or_else(|| "The server rejected the redemption".to_string()),
                    }
                }
            }
            Err(PanelError::NetworkError(e)) => ResolveOutcome::Failure {
                error: format!("Could not reach the server: {}", e),
            },
            Err(e) => ResolveOutcome::Failure {
                error: e.to_string(),
            },
        }
    }
}

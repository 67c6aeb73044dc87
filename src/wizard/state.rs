use crate::constants::DEFAULT_INVALID_CODE_MESSAGE;
use crate::error::PanelError;
use crate::models::{RedemptionSession, TeamInfo, TeamOption};

/// The wizard step currently visible. Exactly one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardStep {
    /// Step 1: email and code entry.
    Verifying,
    /// Step 2: choosing one of the eligible teams.
    Selecting,
    /// Confirm call in flight.
    Resolving,
    /// Step 3: terminal result view.
    Completed(StepOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Success {
        team_name: Option<String>,
        email: String,
        expires_at: Option<String>,
        message: Option<String>,
    },
    Failure {
        message: String,
    },
}

/// What the verify call reported, as seen by the state machine. The runner
/// translates client responses and transport errors into one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum VerifyOutcome {
    Valid { teams: Vec<TeamOption> },
    Invalid { reason: Option<String> },
    ServerFailure { error: String },
    NetworkFailure { error: String },
}

#[derive(Debug, Clone)]
pub enum ResolveOutcome {
    Success {
        team_info: Option<TeamInfo>,
        message: Option<String>,
    },
    Failure {
        error: String,
    },
}

/// User actions and call completions, dispatched as explicit commands so the
/// transition logic stays decoupled from terminal wiring.
#[derive(Debug, Clone)]
pub enum WizardCommand {
    SubmitVerify { email: String, code: String },
    VerifyCompleted(VerifyOutcome),
    SelectTeam(i64),
    AutoSelect,
    ResolveCompleted(ResolveOutcome),
    BackToStep1,
    Reset,
}

/// Network work requested by a transition. Only the machine emits these, and
/// CallConfirm is only reachable from Selecting, so confirm can never be
/// issued before a successful verify.
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    CallVerify {
        code: String,
    },
    CallConfirm {
        email: String,
        code: String,
        team_id: Option<i64>,
    },
}

#[derive(Debug, Clone)]
pub struct WizardState {
    pub step: WizardStep,
    /// Captured at verify-time; email and code are reused unmodified through
    /// confirm. selected_team_id is only meaningful while Selecting.
    pub session: Option<RedemptionSession>,
    /// Eligible teams in server order (sorted by expiration server-side).
    pub teams: Vec<TeamOption>,
    /// True while a call is in flight. Every completion command clears it,
    /// success or not, so the UI can never be left stuck disabled.
    pub busy: bool,
    /// Inline step-1 error, shown without leaving the step.
    pub error: Option<String>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Verifying,
            session: None,
            teams: Vec::new(),
            busy: false,
            error: None,
        }
    }

    pub fn selected_team_id(&self) -> Option<i64> {
        self.session.as_ref().and_then(|s| s.selected_team_id)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct WizardMachine {
    state: WizardState,
}

impl WizardMachine {
    pub fn new() -> Self {
        Self {
            state: WizardState::new(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn process(&mut self, command: WizardCommand) -> Vec<SideEffect> {
        let (new_state, effects) = apply_transition(self.state.clone(), command);
        self.state = new_state;
        effects
    }
}

impl Default for WizardMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one command to the state. Pure, so every transition rule is
/// testable without a terminal or a server.
pub fn apply_transition(mut state: WizardState, command: WizardCommand) -> (WizardState, Vec<SideEffect>) {
    let mut side_effects = Vec::new();

    match command {
        WizardCommand::SubmitVerify { email, code } => {
            if state.step != WizardStep::Verifying || state.busy {
                return (state, side_effects);
            }

            let email = email.trim().to_string();
            let code = code.trim().to_string();

            if email.is_empty() || code.is_empty() {
                // Validation failure: no network call is issued
                state.error = Some("Email and redemption code are both required".to_string());
                return (state, side_effects);
            }

            state.session = Some(RedemptionSession::new(email, code.clone()));
            state.error = None;
            state.busy = true;
            side_effects.push(SideEffect::CallVerify { code });
        }

        WizardCommand::VerifyCompleted(outcome) => {
            state.busy = false;

            match outcome {
                VerifyOutcome::Valid { teams } => {
                    if teams.is_empty() {
                        // Valid code but nowhere to go: stay on step 1
                        state.error = Some(PanelError::NoTeamsAvailable.to_string());
                    } else {
                        state.teams = teams;
                        state.error = None;
                        state.step = WizardStep::Selecting;
                    }
                }
                VerifyOutcome::Invalid { reason } => {
                    state.error =
                        Some(reason.unwrap_or_else(|| DEFAULT_INVALID_CODE_MESSAGE.to_string()));
                }
                VerifyOutcome::ServerFailure { error }
                | VerifyOutcome::NetworkFailure { error } => {
                    state.error = Some(error);
                }
            }
        }

        WizardCommand::SelectTeam(team_id) => {
            if state.step != WizardStep::Selecting || state.busy {
                return (state, side_effects);
            }

            if let Some(session) = state.session.as_mut() {
                // Selecting again replaces any previous choice
                session.selected_team_id = Some(team_id);
                state.busy = true;
                state.step = WizardStep::Resolving;
                side_effects.push(SideEffect::CallConfirm {
                    email: session.email.clone(),
                    code: session.code.clone(),
                    team_id: Some(team_id),
                });
            }
        }

        WizardCommand::AutoSelect => {
            if state.step != WizardStep::Selecting || state.busy {
                return (state, side_effects);
            }

            if let Some(session) = state.session.as_ref() {
                // Null team id delegates "pick best team" to the backend
                state.busy = true;
                state.step = WizardStep::Resolving;
                side_effects.push(SideEffect::CallConfirm {
                    email: session.email.clone(),
                    code: session.code.clone(),
                    team_id: None,
                });
            }
        }

        WizardCommand::ResolveCompleted(outcome) => {
            state.busy = false;

            let outcome = match outcome {
                ResolveOutcome::Success { team_info, message } => StepOutcome::Success {
                    team_name: team_info.as_ref().and_then(|t| t.team_name.clone()),
                    email: state
                        .session
                        .as_ref()
                        .map(|s| s.email.clone())
                        .unwrap_or_default(),
                    expires_at: team_info.and_then(|t| t.expires_at),
                    message,
                },
                ResolveOutcome::Failure { error } => StepOutcome::Failure { message: error },
            };
            // The session is consumed either way; confirm is never retried
            state.step = WizardStep::Completed(outcome);
        }

        WizardCommand::BackToStep1 => {
            if let Some(session) = state.session.as_mut() {
                session.selected_team_id = None;
            }
            state.teams.clear();
            state.busy = false;
            state.error = None;
            state.step = WizardStep::Verifying;
        }

        WizardCommand::Reset => {
            state = WizardState::new();
        }
    }

    (state, side_effects)
}

pub mod notifications;
pub mod prompt;
pub mod runner;
pub mod state;

pub use notifications::{MemoryNotifier, NotificationKind, Notifier, TerminalNotifier};
pub use prompt::Selection;
pub use runner::WizardRunner;
pub use state::{
    apply_transition, ResolveOutcome, SideEffect, StepOutcome, VerifyOutcome, WizardCommand,
    WizardMachine, WizardState, WizardStep,
};

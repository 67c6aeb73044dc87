use colored::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Loading,
    Info,
}

/// Injectable notification sink, so wizard and admin flows can be tested
/// deterministically without a terminal.
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: &str);

    fn success(&mut self, message: &str) {
        self.notify(NotificationKind::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.notify(NotificationKind::Error, message);
    }

    fn loading(&mut self, message: &str) {
        self.notify(NotificationKind::Loading, message);
    }

    fn info(&mut self, message: &str) {
        self.notify(NotificationKind::Info, message);
    }
}

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        let line = match kind {
            NotificationKind::Success => format!("{} {}", "✓".green().bold(), message.green()),
            NotificationKind::Error => format!("{} {}", "✗".red().bold(), message.red()),
            NotificationKind::Loading => format!("{} {}", "⟳".yellow().bold(), message),
            NotificationKind::Info => format!("{} {}", "ⓘ".blue().bold(), message),
        };
        eprintln!("{}", line);
    }
}

/// Records notifications instead of printing them. Test use only.
#[derive(Default)]
pub struct MemoryNotifier {
    pub entries: Vec<(NotificationKind, String)>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.entries.push((kind, message.to_string()));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("The code is valid but no team currently has a free seat")]
    NoTeamsAvailable,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Not logged in. Run 'teamgate auth login' to start a session.")]
    NotAuthenticated,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type PanelResult<T> = Result<T, PanelError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> PanelResult<T>;
    fn with_context<F>(self, f: F) -> PanelResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> PanelResult<T> {
        self.map_err(|e| PanelError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> PanelResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PanelError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> PanelResult<T> {
        self.ok_or_else(|| PanelError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> PanelResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| PanelError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! panel_error {
    ($error_type:ident, $msg:expr) => {
        PanelError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        PanelError::$error_type(format!($fmt, $($arg)*))
    };
}

use thiserror::Error;

/// Input rejected at the interaction boundary. Never mutates state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid income amount.")]
    InvalidIncome,
    #[error("Please enter valid expense details.")]
    InvalidExpense,
    #[error("Unknown currency `{0}`; expected one of USD, INR, EUR.")]
    UnknownCurrency(String),
}

/// Error type for the persistence and configuration plumbing.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Failures that abort the CLI shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single shell command; reported and the loop continues.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("exit requested")]
    ExitRequested,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

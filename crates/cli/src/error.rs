//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: scene error (unknown scene, bad dimensions, bad scene params)
//! - 11: I/O error (reading a seed file, writing a snapshot)
//! - 12: input error (bad --params JSON, bad --background, bad seed file)
//! - 13: serialization error

use portfolio_fx_core::FxError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// The scene rejected the request: unknown name, bad size or bad params.
    Scene(FxError),
    /// A seed file could not be read or a snapshot could not be written.
    Io(String),
    /// A flag or seed file held something unparseable.
    Input(String),
    /// JSON output could not be produced.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Scene(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Scene(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<FxError> for CliError {
    fn from(e: FxError) -> Self {
        match e {
            FxError::Io(msg) => CliError::Io(msg),
            other => CliError::Scene(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

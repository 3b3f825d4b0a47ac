use std::fmt;
use std::io;

use jsonvet::engine::EngineError;
use jsonvet::VetError;

// Exit code constants aligned with the sysexits-style vocabulary used by
// the rest of our tooling.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::NotFound => FAILURE,
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn vet_error(context: &str, err: VetError) -> CliError {
    match err {
        VetError::InstanceNotJson(_) | VetError::SchemaNotJson(_) => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        VetError::Engine(EngineError::ValidationFailed { .. }) => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        VetError::Engine(EngineError::CompileFailed(_)) => {
            CliError::new(USAGE, format!("{context}: {err}"))
        }
    }
}

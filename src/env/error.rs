use std::path::PathBuf;
use thiserror::Error;

pub type EnvResult<T> = Result<T, EnvError>;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Unable to determine home directory")]
    MissingHomeDir,
    #[error("Environment '{0}' already exists")]
    AlreadyExists(String),
    #[error("Environment '{0}' does not exist")]
    NotFound(String),
    #[error("Environment name '{0}' is invalid")]
    InvalidName(String),
    #[error("API host '{0}' is invalid")]
    InvalidHost(String),
    // The token is a secret; never echo it.
    #[error("Auth is invalid, expected `uuid:key` with a 64 character key")]
    InvalidAuth,
    #[error("No active environment, `{}` is missing or malformed", .0.display())]
    NoActiveEnvironment(PathBuf),
    #[error("Registry `{}` does not exist, create an environment first", .0.display())]
    RegistryUnavailable(PathBuf),
    #[error("Stored properties `{}` are malformed", .0.display())]
    CorruptRecord(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

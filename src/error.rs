// std imports
use std::io;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur when constructing or driving a tee.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid argument: {0} may not be absent")]
    InvalidArgument(&'static str),
    #[error("{0} is not supported by this stream")]
    Unsupported(&'static str),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            Error::InvalidArgument(_) => io::Error::new(io::ErrorKind::InvalidInput, err),
            Error::Unsupported(_) => io::Error::new(io::ErrorKind::Unsupported, err),
            Error::Config(_) => io::Error::other(err),
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

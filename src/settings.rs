// std imports
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

/// Environment variable naming a configuration file to layer over the defaults.
pub const CONFIG_ENV_VAR: &str = "TEEIO_CONFIG";

// ---

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub tee: Options,
}

impl Settings {
    /// Loads settings from the embedded defaults overridden by a configuration file.
    ///
    /// If `path` is given, the file must exist. Otherwise the file named by
    /// [`CONFIG_ENV_VAR`] is used if it exists. The file format is chosen by extension.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |name| env::var_os(name))
    }

    pub(crate) fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        builder = match path {
            Some(path) => {
                log::debug!("loading settings from {}", path.display());
                builder.add_source(File::from(path))
            }
            None => match lookup(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
                Some(path) => {
                    let path = PathBuf::from(path);
                    log::debug!("{CONFIG_ENV_VAR}: loading settings from {}", path.display());
                    builder.add_source(File::from(path).required(false))
                }
                None => builder,
            },
        };

        Ok(builder.build()?.try_deserialize()?)
    }
}

// ---

/// Behavioral options of a [`TeeReader`](crate::TeeReader).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Options {
    #[serde(default)]
    pub empty_read: EmptyReadPolicy,
    #[serde(default)]
    pub close: ClosePolicy,
}

impl Options {
    #[inline]
    pub fn with_empty_read(self, empty_read: EmptyReadPolicy) -> Self {
        Self { empty_read, ..self }
    }

    #[inline]
    pub fn with_close(self, close: ClosePolicy) -> Self {
        Self { close, ..self }
    }
}

/// Decides whether a read into an empty buffer closes the sink.
///
/// Such a read returns zero bytes without meaning that the source is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyReadPolicy {
    #[default]
    Ignore,
    Close,
}

/// Decides how many times the sink is closed after end-of-data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosePolicy {
    /// Close on every read that observes end-of-data.
    #[default]
    Repeat,
    /// Close only on the transition to the exhausted state.
    Once,
}

#[cfg(test)]
mod tests;

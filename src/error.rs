use core::fmt;
use std::{error::Error as StdError, io};

use color_eyre::eyre::InstallError;
use confy::ConfyError;
use flexi_logger::FlexiLoggerError;
use gridfrier::TableError;

use crate::config;

#[derive(Debug)]
pub enum Error {
    Usage(Option<&'static str>),
    Logger(FlexiLoggerError),
    Config(String, ConfyError),
    Io(io::Error),
    Document(toml::de::Error),
    PrintConfig(toml::ser::Error),
    Render(usize, TableError),
    Eyre(InstallError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(_) => write!(f, "Bad arguments"), // Never shown to user, just a signal.
            Error::Logger(err) => write!(f, "Logger error: {err}"),
            Error::Config(path, err) => {
                write!(f, "Could not load {path}: {err}")?;
                if let Some(source) = err.source() {
                    write!(f, " ({source})")?;
                }
                write!(
                    f,
                    ". Known keys are {}, see --print-config.",
                    config::KEYS.join(", ")
                )
            }
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Document(err) => write!(f, "Document error: {err}"),
            Error::PrintConfig(err) => write!(f, "Could not print configuration: {err}"),
            Error::Render(index, err) => {
                write!(f, "Table #{} could not be rendered: {err}", index + 1)
            }
            Error::Eyre(err) => write!(f, "Error hook setup failed: {err}"),
        }
    }
}

impl From<Error> for io::Error {
    fn from(value: Error) -> Self {
        match value {
            Error::Io(io_err) => io_err,
            err => io::Error::other(format!("{err:?}")),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ConfyError> for Error {
    fn from(value: ConfyError) -> Self {
        Self::Config(
            config::get_configuration_file_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "the gridfried configuration file".to_owned()),
            value,
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Self::Document(value)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(value: toml::ser::Error) -> Self {
        Self::PrintConfig(value)
    }
}

impl From<FlexiLoggerError> for Error {
    fn from(value: FlexiLoggerError) -> Self {
        Self::Logger(value)
    }
}

impl From<InstallError> for Error {
    fn from(value: InstallError) -> Self {
        Self::Eyre(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfrier::Violation;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_errors_count_tables_from_one() {
        let err = Error::Render(
            1,
            TableError::Structural {
                row: 3,
                violation: Violation::RowUnderfilled {
                    filled: 1,
                    columns: 2,
                },
            },
        );
        assert_eq!(
            err.to_string(),
            "Table #2 could not be rendered: malformed table at row 3: only 1 of 2 columns are filled"
        );
    }

    #[test]
    fn other_errors_keep_their_kind_through_io() {
        let err = io::Error::from(Error::Io(io::Error::new(io::ErrorKind::NotFound, "gone")));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        let err = io::Error::from(Error::Usage(None));
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}

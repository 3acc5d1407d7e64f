use std::error;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Spawn(String, std::io::Error),
    NotExecuted,
    Terminated,
    UnexpectedExitCode { expected: i32, actual: i32 },
    NotRebuilt(PathBuf),
    Exec(PathBuf, std::io::Error),
    MissingProgram(Vec<OsString>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "i/o error: {}", error),
            Self::Spawn(command, error) => write!(f, "failed to spawn `{}`: {}", command, error),
            Self::NotExecuted => write!(f, "command has not been executed yet"),
            Self::Terminated => write!(f, "child was terminated by a signal"),
            Self::UnexpectedExitCode { expected, actual } => write!(
                f,
                "child exited abnormally with exit code {} (expected {})",
                actual, expected
            ),
            Self::NotRebuilt(path) => write!(
                f,
                "{} was not updated by the compiler",
                path.to_string_lossy()
            ),
            Self::Exec(path, error) => {
                write!(f, "failed to execute {}: {}", path.to_string_lossy(), error)
            }
            Self::MissingProgram(argv) => write!(f, "no program name in {:?}", argv),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(error) | Self::Spawn(_, error) | Self::Exec(_, error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

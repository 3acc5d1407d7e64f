use std::error;
use std::fmt;
use std::path::PathBuf;

use crate::wrappers::ShaderKind;

#[derive(Debug)]
pub enum Error {
    Gl(String),
    Io(PathBuf, std::io::Error),
    UnknownShaderKind(PathBuf),
    Compile { kind: ShaderKind, log: String },
    Link { log: String },
    Image(PathBuf, image::ImageError),
    Window(String),
    Init(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Gl(error) => write!(f, "opengl error: {}", error),
            Self::Io(path, error) => write!(f, "{}: {}", path.to_string_lossy(), error),
            Self::UnknownShaderKind(path) => {
                write!(f, "{}: unknown shader type", path.to_string_lossy())
            }
            Self::Compile { kind, log } => write!(
                f,
                "shader compile error for shader type {}: {}",
                kind.constant_name(),
                log
            ),
            Self::Link { log } => write!(f, "shader link error: {}", log),
            Self::Image(path, error) => {
                write!(f, "failed to load {}: {}", path.to_string_lossy(), error)
            }
            Self::Window(error) => write!(f, "failed to create window: {}", error),
            Self::Init(error) => write!(f, "failed to initialize demo: {}", error),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(_, error) => Some(error),
            Self::Image(_, error) => Some(error),
            _ => None,
        }
    }
}

/// glow reports object creation failures as strings
impl From<String> for Error {
    fn from(error: String) -> Self {
        Self::Gl(error)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

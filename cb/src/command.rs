use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::{self, ExitStatus};

use crate::{Error, Result};

/// A program and its arguments, in the order they were appended
///
/// The exit status is only known once the command has been executed. Querying it before that
/// is an error rather than a success code.
#[derive(Debug, Clone)]
pub struct Command {
    args: Vec<OsString>,
    status: Option<ExitStatus>,
}

impl Command {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        debug!("new command: {}", program.as_ref().to_string_lossy());

        Self {
            args: vec![program.as_ref().to_owned()],
            status: None,
        }
    }

    /// Append one argument
    pub fn arg(&mut self, arg: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    /// Append several arguments, keeping their order
    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.arg(arg);
        }
        self
    }

    pub fn add_source_file(&mut self, path: impl AsRef<OsStr>) -> &mut Self {
        self.arg(path)
    }

    pub fn add_include_dir(&mut self, path: impl AsRef<OsStr>) -> &mut Self {
        self.arg("-I").arg(path)
    }

    pub fn set_output_file(&mut self, name: impl AsRef<OsStr>) -> &mut Self {
        self.arg("-o").arg(name)
    }

    pub fn enable_all_errors(&mut self) -> &mut Self {
        self.args(&["-Wall", "-Werror"])
    }

    pub fn add_dynamic_library(&mut self, name: impl AsRef<OsStr>) -> &mut Self {
        self.arg("-l").arg(name)
    }

    /// Program followed by its arguments
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    pub fn program(&self) -> &OsStr {
        &self.args[0]
    }

    pub fn is_executed(&self) -> bool {
        self.status.is_some()
    }

    /// Run the command in a child process and wait for it to exit
    ///
    /// The child inherits the environment and standard streams of the current process.
    pub fn execute(&mut self) -> Result<ExitStatus> {
        info!("{}", self);

        let status = process::Command::new(&self.args[0])
            .args(&self.args[1..])
            .status()
            .map_err(|e| Error::Spawn(self.to_string(), e))?;

        debug!(
            "{} finished with {}",
            self.program().to_string_lossy(),
            status
        );

        self.status = Some(status);
        Ok(status)
    }

    /// Raw exit code of the executed command
    pub fn exit_code(&self) -> Result<i32> {
        let status = self.status.ok_or(Error::NotExecuted)?;
        status.code().ok_or(Error::Terminated)
    }

    pub fn exited_with_code(&self, expected: i32) -> Result<()> {
        let actual = self.exit_code()?;

        if actual == expected {
            Ok(())
        } else {
            Err(Error::UnexpectedExitCode { expected, actual })
        }
    }

    pub fn exited_normally(&self) -> Result<()> {
        self.exited_with_code(0)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }

            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, "{:?}", arg)?;
            } else {
                write!(f, "{}", arg)?;
            }
        }

        Ok(())
    }
}

//! Rebuild the running executable when its source is newer, then restart it

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::{Command, Error, Result};

pub fn modified(path: impl AsRef<Path>) -> Result<SystemTime> {
    Ok(fs::metadata(path)?.modified()?)
}

/// True when `source` was modified strictly after `exe`
pub fn needs_rebuild(source: impl AsRef<Path>, exe: impl AsRef<Path>) -> Result<bool> {
    let source_mtime = modified(source)?;
    let exe_mtime = modified(exe)?;

    debug!("source_mtime={:?}, exe_mtime={:?}", source_mtime, exe_mtime);
    Ok(source_mtime > exe_mtime)
}

/// Path of the running executable, as invoked by `argv[0]`
///
/// A bare program name was found through `PATH`, in which case the OS is asked instead.
pub fn executable_path(argv: &[OsString]) -> Result<PathBuf> {
    let argv0 = argv
        .first()
        .ok_or_else(|| Error::MissingProgram(argv.to_vec()))?;
    let path = Path::new(argv0);

    if path.is_absolute() || path.components().count() > 1 {
        Ok(env::current_dir()?.join(path))
    } else {
        Ok(env::current_exe()?)
    }
}

/// `rustc <source> -o <exe>`
pub fn default_compiler(source: &Path, exe: &Path) -> Command {
    let mut cmd = Command::new("rustc");
    cmd.add_source_file(source).set_output_file(exe);
    cmd
}

/// Rebuild with [`default_compiler`] if needed, see [`rebuild_on_change_with`]
pub fn rebuild_on_change(source: impl AsRef<Path>, argv: &[OsString]) -> Result<()> {
    rebuild_on_change_with(source, argv, default_compiler)
}

/// Recompile the running executable if `source` is newer, and replace the current process with
/// the new executable, passing it `argv` again
///
/// `compiler` builds the command that writes the executable given as its second argument.
/// Returns `Ok(())` without doing anything when the executable is up to date. On Unix, this
/// function does not return after a successful rebuild.
pub fn rebuild_on_change_with<F>(
    source: impl AsRef<Path>,
    argv: &[OsString],
    compiler: F,
) -> Result<()>
where
    F: FnOnce(&Path, &Path) -> Command,
{
    let source = source.as_ref();
    let exe = executable_path(argv)?;
    let exe_mtime = modified(&exe)?;

    if !needs_rebuild(source, &exe)? {
        debug!("{} is up to date", exe.display());
        return Ok(());
    }

    info!(
        "{} changed, rebuilding {}",
        source.display(),
        exe.display()
    );

    let mut cmd = compiler(source, &exe);
    cmd.execute()?;
    cmd.exited_normally()?;

    if modified(&exe)? <= exe_mtime {
        return Err(Error::NotRebuilt(exe));
    }

    exec(&exe, argv)
}

#[cfg(unix)]
fn exec(exe: &Path, argv: &[OsString]) -> Result<()> {
    use std::os::unix::process::CommandExt;

    info!("restarting {}", exe.display());

    // Only returns on failure
    let error = std::process::Command::new(exe)
        .arg0(&argv[0])
        .args(&argv[1..])
        .exec();

    Err(Error::Exec(exe.to_owned(), error))
}

#[cfg(not(unix))]
fn exec(exe: &Path, argv: &[OsString]) -> Result<()> {
    info!("restarting {}", exe.display());

    let mut cmd = Command::new(exe);
    cmd.args(&argv[1..]);
    cmd.execute()?;

    std::process::exit(cmd.exit_code()?)
}

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{error, info};

use cb::{args, Arguments, Command};

type DynError = Box<dyn std::error::Error>;

const DEMO_PACKAGE: &str = "learngl";

fn main() {
    env_logger::init_from_env(
        env_logger::Env::new()
            .filter_or("CB_LOG", "info")
            .write_style("CB_LOG_STYLE"),
    );

    if let Err(e) = try_main() {
        eprintln!("[PANIC] {}", e);
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), DynError> {
    let argv: Vec<OsString> = env::args_os().collect();
    cb::rebuild_on_change_with(
        concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs"),
        &argv,
        rebuild_self,
    )?;

    let args = args::arguments();
    let task = Task::from_args(args);
    if task == Task::Help {
        print_help();
        return Ok(());
    }

    let profile = Profile::from_args(args);
    build(profile)?;

    if let Task::Run(forwarded) = task {
        run(profile, forwarded)?;
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Task {
    Help,
    Build,
    /// Build, then run the demo with these arguments
    Run(Vec<OsString>),
}

impl Task {
    /// Only a first argument equal to `run` runs the demo, anything else builds
    fn from_args(args: &Arguments) -> Self {
        if args.has_flag("--help") || args.has_argument_at("help", 1) {
            Self::Help
        } else if args.has_argument_at("run", 1) {
            Self::Run(
                args.positional()
                    .iter()
                    .skip(2)
                    .filter(|arg| arg.as_os_str() != "--release")
                    .cloned()
                    .collect(),
            )
        } else {
            Self::Build
        }
    }
}

fn print_help() {
    eprintln!(
        "Tasks:
build             builds the demo (default)
run [args...]     builds then runs the demo, forwarding args
help              prints this message

Flags:
--release         use the release profile
"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Profile {
    Debug,
    Release,
}

impl Profile {
    fn from_args(args: &Arguments) -> Self {
        if args.has_flag("--release") {
            Self::Release
        } else {
            Self::Debug
        }
    }

    fn target_dir(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn cargo() -> Command {
    Command::new(env::var_os("CARGO").unwrap_or_else(|| OsString::from("cargo")))
}

/// The xtask binary lives in the cargo target directory, so cargo rebuilds it in place
fn rebuild_self(_source: &Path, _exe: &Path) -> Command {
    let mut cmd = cargo();
    cmd.args(&["build", "-p", "xtask", "--manifest-path"])
        .arg(workspace_root().join("Cargo.toml"));
    cmd
}

fn build_command(profile: Profile) -> Command {
    let mut cmd = cargo();
    cmd.args(&["build", "-p", DEMO_PACKAGE, "--manifest-path"])
        .arg(workspace_root().join("Cargo.toml"));

    if profile == Profile::Release {
        cmd.arg("--release");
    }

    cmd
}

fn demo_executable(profile: Profile) -> PathBuf {
    let target = env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| workspace_root().join("target"));

    target
        .join(profile.target_dir())
        .join(format!("{}{}", DEMO_PACKAGE, env::consts::EXE_SUFFIX))
}

fn build(profile: Profile) -> Result<(), DynError> {
    let mut cmd = build_command(profile);
    cmd.execute()?;

    if cmd.exit_code()? != 0 {
        error!("cannot be compiled, check that the system OpenGL and windowing libraries are installed");
        cmd.exited_normally()?;
    }

    info!("built {}", demo_executable(profile).display());
    Ok(())
}

fn run<I, S>(profile: Profile, args: I) -> Result<(), DynError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut cmd = Command::new(demo_executable(profile));
    cmd.args(args);
    cmd.execute()?;
    cmd.exited_normally()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lossy(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    fn parse(args: &[&str]) -> Arguments {
        Arguments::parse(args.iter().copied())
    }

    #[test]
    fn no_task_only_builds() {
        let args = parse(&["xtask"]);

        assert_eq!(Task::from_args(&args), Task::Build);
        assert_eq!(Profile::from_args(&args), Profile::Debug);
    }

    #[test]
    fn build_task_only_builds() {
        assert_eq!(Task::from_args(&parse(&["xtask", "build"])), Task::Build);
        assert_eq!(Task::from_args(&parse(&["xtask", "cube"])), Task::Build);
    }

    #[test]
    fn run_forwards_arguments_without_release() {
        let args = parse(&["xtask", "run", "square", "--release"]);

        assert_eq!(
            Task::from_args(&args),
            Task::Run(vec![OsString::from("square")])
        );
        assert_eq!(Profile::from_args(&args), Profile::Release);
    }

    #[test]
    fn run_must_be_the_first_argument() {
        let args = parse(&["xtask", "--release", "run"]);

        assert_eq!(Task::from_args(&args), Task::Build);
        assert_eq!(Profile::from_args(&args), Profile::Release);
    }

    #[test]
    fn help_task() {
        assert_eq!(Task::from_args(&parse(&["xtask", "help"])), Task::Help);
        assert_eq!(Task::from_args(&parse(&["xtask", "--help"])), Task::Help);
    }

    #[test]
    fn build_command_selects_profile() {
        let debug = lossy(&build_command(Profile::Debug));
        assert_eq!(&debug[1..4], &["build", "-p", "learngl"]);
        assert!(!debug.iter().any(|a| a == "--release"));

        let release = lossy(&build_command(Profile::Release));
        assert_eq!(release.last().map(String::as_str), Some("--release"));
    }

    #[test]
    fn demo_executable_is_under_profile_dir() {
        let exe = demo_executable(Profile::Release);

        assert!(exe.parent().unwrap().ends_with("release"));
        assert!(exe
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(DEMO_PACKAGE));
    }

    #[test]
    fn self_rebuild_targets_xtask() {
        let cmd = rebuild_self(Path::new("src/main.rs"), Path::new("target/debug/xtask"));
        let args = lossy(&cmd);

        assert_eq!(&args[1..4], &["build", "-p", "xtask"]);
        assert!(args.last().unwrap().ends_with("Cargo.toml"));
    }
}

//! Command-line arguments, split into positional arguments and flag values
//!
//! Any argument starting with `-` is a flag. When the argument right after a flag is not a flag
//! itself, it is recorded as a value of that flag, so `-g -o a` gives `-g` no value and `-o`
//! the value `a`. Flags may repeat, their values accumulate in order. Flags and their values
//! stay in the positional list, which is the full argv including the program name.

use std::ffi::{OsStr, OsString};

use lazy_static::lazy_static;

lazy_static! {
    static ref ARGUMENTS: Arguments = Arguments::parse(std::env::args_os());
}

/// Arguments of the current process, parsed on first access
pub fn arguments() -> &'static Arguments {
    &ARGUMENTS
}

#[derive(Debug, Default, Clone)]
pub struct Arguments {
    positional: Vec<OsString>,
    options: Vec<(OsString, Vec<OsString>)>,
}

fn is_flag(arg: &OsStr) -> bool {
    arg.to_string_lossy().starts_with('-')
}

impl Arguments {
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let positional: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut this = Self {
            positional: Vec::new(),
            options: Vec::new(),
        };

        for (i, arg) in positional.iter().enumerate() {
            if !is_flag(arg) {
                continue;
            }

            let values = this.option_mut(arg);
            match positional.get(i + 1) {
                Some(next) if !is_flag(next) => values.push(next.clone()),
                _ => {}
            }
        }

        this.positional = positional;
        debug!("parsed arguments: {:?}", this);
        this
    }

    fn option_mut(&mut self, flag: &OsStr) -> &mut Vec<OsString> {
        let idx = match self.options.iter().position(|(f, _)| f == flag) {
            Some(idx) => idx,
            None => {
                self.options.push((flag.to_owned(), Vec::new()));
                self.options.len() - 1
            }
        };

        &mut self.options[idx].1
    }

    pub fn positional(&self) -> &[OsString] {
        &self.positional
    }

    pub fn argument_at(&self, i: usize) -> Option<&OsStr> {
        self.positional.get(i).map(OsString::as_os_str)
    }

    /// All values given to `flag`, `None` if the flag is absent
    pub fn values_of(&self, flag: impl AsRef<OsStr>) -> Option<&[OsString]> {
        let flag = flag.as_ref();
        self.options
            .iter()
            .find(|(f, _)| f == flag)
            .map(|(_, values)| values.as_slice())
    }

    pub fn value_of(&self, flag: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.values_of(flag)
            .and_then(|values| values.first())
            .map(OsString::as_os_str)
    }

    pub fn has_flag(&self, flag: impl AsRef<OsStr>) -> bool {
        self.values_of(flag).is_some()
    }

    pub fn has_argument_at(&self, arg: impl AsRef<OsStr>, i: usize) -> bool {
        self.argument_at(i) == Some(arg.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Arguments {
        Arguments::parse(args.iter().copied())
    }

    #[test]
    fn positional_arguments_include_everything() {
        let args = parse(&["./cb", "run", "--release"]);

        assert_eq!(args.positional().len(), 3);
        assert_eq!(args.argument_at(0), Some(OsStr::new("./cb")));
        assert!(args.has_argument_at("run", 1));
        assert!(!args.has_argument_at("run", 2));
        assert!(!args.has_argument_at("run", 3));
        assert_eq!(args.argument_at(3), None);
    }

    #[test]
    fn flag_takes_following_value() {
        let args = parse(&["cb", "-o", "build/main", "main.c"]);

        assert!(args.has_flag("-o"));
        assert_eq!(args.value_of("-o"), Some(OsStr::new("build/main")));
        assert!(!args.has_flag("-I"));
        assert_eq!(args.value_of("-I"), None);
    }

    #[test]
    fn flag_without_value_does_not_swallow_next_flag() {
        let args = parse(&["cb", "-g", "-o", "a"]);

        assert!(args.has_flag("-g"));
        assert_eq!(args.values_of("-g"), Some(&[][..]));
        assert_eq!(args.value_of("-g"), None);
        assert_eq!(args.value_of("-o"), Some(OsStr::new("a")));
    }

    #[test]
    fn trailing_flag_is_registered() {
        let args = parse(&["cb", "build", "--release"]);

        assert!(args.has_flag("--release"));
        assert_eq!(args.values_of("--release").map(<[_]>::len), Some(0));
    }

    #[test]
    fn repeated_flags_accumulate_values_in_order() {
        let args = parse(&["cb", "-I", "include", "-l", "m", "-I", "vendor"]);

        let includes: Vec<&OsStr> = args
            .values_of("-I")
            .unwrap()
            .iter()
            .map(OsString::as_os_str)
            .collect();
        assert_eq!(includes, vec![OsStr::new("include"), OsStr::new("vendor")]);
        assert_eq!(args.value_of("-I"), Some(OsStr::new("include")));
        assert_eq!(args.value_of("-l"), Some(OsStr::new("m")));
    }

    #[test]
    fn empty_command_line() {
        let args = Arguments::parse(Vec::<OsString>::new());

        assert!(args.positional().is_empty());
        assert!(!args.has_argument_at("run", 1));
    }

    #[test]
    fn process_arguments_are_parsed_once() {
        let first = arguments() as *const Arguments;
        let second = arguments() as *const Arguments;

        assert_eq!(first, second);
        assert!(!arguments().positional().is_empty());
    }
}

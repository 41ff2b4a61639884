use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use clap::CommandFactory as _;
use clap::Parser;

/// Create <filename> if it does not exist, otherwise open and close it untouched.
#[derive(Debug, Parser)]
#[command(
    name = "touch",
    override_usage = "touch [-c] <filename>",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Operands {
    operands: Vec<OsString>,
}

#[derive(Debug)]
pub struct Command {
    pub no_create: bool,
    pub file: PathBuf,
}

impl Command {
    /// Resolve a full argument list, program name first.
    ///
    /// One operand is always the file. Two operands are accepted only when
    /// the first is exactly `-c`.
    pub fn resolve<I, T>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from("touch"));

        // Nothing is parsed as an option: every word after the program name is an operand.
        let escaped = [program, OsString::from("--")].into_iter().chain(args);
        let Operands { operands } =
            Operands::try_parse_from(escaped).map_err(|_| ArgsError::usage())?;

        match operands.as_slice() {
            [file] => Ok(Command {
                no_create: false,
                file: PathBuf::from(file),
            }),
            [flag, file] if flag == "-c" => Ok(Command {
                no_create: true,
                file: PathBuf::from(file),
            }),
            [option, _] => Err(ArgsError::UnknownOption(
                option.to_string_lossy().into_owned(),
            )),
            _ => Err(ArgsError::usage()),
        }
    }
}

#[derive(Debug)]
pub enum ArgsError {
    /// Wrong number of arguments.
    Usage(String),
    /// Two arguments whose first is not `-c`.
    UnknownOption(String),
}

impl ArgsError {
    fn usage() -> Self {
        ArgsError::Usage(Operands::command().render_usage().to_string())
    }
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::Usage(usage) => write!(f, "{}", usage.trim_end()),
            ArgsError::UnknownOption(option) => write!(f, "Unknown option: {}", option),
        }
    }
}

impl std::error::Error for ArgsError {}

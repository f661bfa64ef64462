use std::{env, io, path::Path};

use clap::CommandFactory as _;
use clap_complete::Shell;

use crate::Error;

/// Print a completion script for `apigw` to STDOUT.
///
/// For example, `apigw completions zsh > ~/.zfunc/_apigw`.
#[derive(Debug, clap::Parser)]
pub struct Args {
    /// The shell to generate completions for. Defaults to the shell named by `$SHELL`.
    #[clap(value_enum)]
    pub shell: Option<Shell>,
}

pub fn main(args: Args) -> Result<(), Error> {
    let shell = match args.shell {
        Some(shell) => shell,
        None => shell_from_env()?,
    };
    write(shell, &mut io::stdout());
    Ok(())
}

fn write(shell: Shell, out: &mut dyn io::Write) {
    let mut command = crate::Args::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, out);
}

fn shell_from_env() -> Result<Shell, Error> {
    let var = env::var("SHELL").ok();
    var.as_deref()
        .and_then(parse_shell)
        .ok_or_else(|| {
            Error::other(format!(
                "couldn't determine the shell from $SHELL ({}), pass one explicitly",
                var.as_deref().unwrap_or("not set")
            ))
        })
}

fn parse_shell(path: &str) -> Option<Shell> {
    Path::new(path).file_name()?.to_str()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shells_are_named_by_path() {
        assert_eq!(parse_shell("/usr/local/bin/zsh"), Some(Shell::Zsh));
        assert_eq!(parse_shell("bash"), Some(Shell::Bash));
        assert_eq!(parse_shell("/bin/tcsh"), None);
    }

    #[test]
    fn scripts_cover_the_subcommands() {
        let mut out = Vec::new();
        write(Shell::Bash, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("apigw"));
        assert!(script.contains("get-model"));
        assert!(script.contains("delete-vpc-link"));
    }
}

use std::io::{self, IsTerminal as _};

/// Outcome of asking whether a destructive operation should go ahead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Abort,
    Error(String),
}

/// A way of asking the user for confirmation.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Confirmation;
}

/// Prompt on the terminal.
///
/// When STDIN isn't a terminal nobody can answer, so the operation is aborted with a hint to use
/// `--force`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interactive;

impl Confirm for Interactive {
    fn confirm(&self, prompt: &str) -> Confirmation {
        if !io::stdin().is_terminal() {
            tracing::warn!("{prompt} Skipped: not running interactively, pass `--force` to proceed");
            return Confirmation::Abort;
        }

        match dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(true) => Confirmation::Proceed,
            Ok(false) => Confirmation::Abort,
            Err(error) => Confirmation::Error(error.to_string()),
        }
    }
}

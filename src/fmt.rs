use std::fmt;

use colored::Colorize;
use serde_json::Value;

use crate::{adapter::Envelope, Error};

/// How payloads are written to STDOUT.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Render a payload. `null` renders as nothing, and bare strings are written unquoted so they
/// can be used directly in shell pipelines.
pub fn render(format: OutputFormat, payload: &Value) -> Result<Option<String>, Error> {
    let rendered = match payload {
        Value::Null => return Ok(None),
        Value::String(string) => string.clone(),
        payload => match format {
            OutputFormat::Json => serde_json::to_string_pretty(payload).map_err(Error::other)?,
            OutputFormat::Yaml => serde_yaml::to_string(payload)
                .map_err(Error::other)?
                .trim_end()
                .to_string(),
        },
    };
    Ok(Some(rendered))
}

pub fn print_payload(format: OutputFormat, payload: &Value) -> Result<(), Error> {
    if let Some(rendered) = render(format, payload)? {
        println!("{rendered}");
    }
    Ok(())
}

/// Print a successful payload. Failures are returned so the caller decides the exit code.
pub fn print_envelope(format: OutputFormat, envelope: Envelope) -> Result<(), Error> {
    match envelope {
        Envelope::Succeeded { payload, .. } => print_payload(format, &payload),
        Envelope::Failed(error) => Err(error),
        Envelope::Aborted => Ok(()),
    }
}

pub fn print_error(error: &dyn fmt::Display) {
    eprintln!("{} {error}", "Error:".red().bold());
}

//! A command-line adapter for a handful of AWS API Gateway operations.
//!
//! Every operation goes through the same pipeline (see [`adapter`]): the flags are bound into a
//! parameter set, destructive operations are confirmed, the request is dispatched through an
//! [`api::ApiGateway`] client, and the response is projected with `--select` before it is
//! printed.

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod adapter;
pub mod api;
mod client;
pub mod command;
pub mod confirm;
mod error;
pub mod fmt;
pub mod logging;
pub mod parameters;
pub mod patch;
pub mod selector;

pub use crate::{
    adapter::{Adapter, AdapterConfig, Envelope, Operation},
    client::ClientConfig,
    confirm::{Confirm, Confirmation},
    error::{Error, Result, EXIT_OTHER, EXIT_REMOTE_FAILURE},
    parameters::{MissingParameterPolicy, Parameters},
};

use crate::{command::Context, fmt::OutputFormat};

#[derive(Debug, clap::Parser)]
#[clap(name = "apigw", version, about)]
pub struct Args {
    #[clap(flatten)]
    pub client: ClientConfig,

    /// Project the response before printing it.
    ///
    /// `*` prints the whole response, a field name (matched case-insensitively) prints that
    /// top-level field, and `^Param` echoes the value of an input parameter.
    #[clap(long, global = true)]
    pub select: Option<String>,

    /// Perform destructive operations without asking for confirmation.
    #[clap(long, global = true)]
    pub force: bool,

    /// What to do when a required parameter is missing.
    #[clap(long, value_enum, default_value_t, global = true)]
    pub missing_parameters: MissingParameterPolicy,

    /// How to print payloads that aren't plain strings.
    #[clap(long, value_enum, default_value_t, global = true)]
    pub output: OutputFormat,

    /// Log more to STDERR. Repeat for more detail.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors to STDERR.
    #[clap(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[clap(subcommand)]
    pub command: command::Command,
}

pub async fn run(args: Args) -> Result<()> {
    let context = Context {
        client: args.client,
        adapter: AdapterConfig {
            select: args.select,
            force: args.force,
            missing_parameters: args.missing_parameters,
        },
        output: args.output,
    };
    command::main(context, args.command).await
}

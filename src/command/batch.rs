use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tokio::{
    fs,
    io::{self, AsyncReadExt},
};
use tracing::Instrument as _;

use super::{Context, DeleteVpcLink, GetModel, UpdateApiKey, UpdateClientCertificate};
use crate::{
    adapter::{Adapter, AdapterConfig, Envelope, Operation},
    api::ApiGateway,
    client::get_client,
    confirm::{Confirm, Interactive},
    fmt::{print_error, print_payload},
    Error,
};

/// Invoke several operations, one per line of newline-delimited JSON.
///
/// Each line is an object like:
///
/// `{"operation": "GetModel", "parameters": {"RestApiId": "abc123", "ModelName": "User"}}`
///
/// An optional `"select"` overrides `--select` for that line. Blank lines and lines starting
/// with `#` are skipped.
///
/// Lines are processed in order. A failing line is reported to STDERR and processing continues
/// with the next line.
///
/// # Exit code
///
/// If every line succeeds (or is declined), the CLI exits with code 0.
///
/// If any line fails, the exit code is 4.
///
/// If the input can't be read, or `--select` doesn't compile for an operation in the batch, then
/// the exit code is 1.
#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Path to the input, or `-` to read STDIN.
    #[clap(default_value = "-")]
    input: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct Item {
    operation: OperationName,

    #[serde(default)]
    parameters: Value,

    #[serde(default)]
    select: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
enum OperationName {
    GetModel,
    DeleteVpcLink,
    UpdateApiKey,
    UpdateClientCertificate,
}

pub async fn main(context: &Context, args: Args) -> Result<(), Error> {
    let input = read_input(&args.input).await?;
    let client = get_client(&context.client).await?;
    let summary = process(&context.adapter, &client, &Interactive, &input, |envelope| {
        if let Some(payload) = envelope.payload() {
            print_payload(context.output, payload)?;
        }
        Ok(())
    })
    .await?;

    if summary.failed > 0 {
        return Err(Error::BatchFailed {
            failed: summary.failed,
            total: summary.total,
        });
    }
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    total: usize,
    failed: usize,
}

/// Adapters compiled from the global configuration, one per operation seen so far.
#[derive(Default)]
struct Adapters {
    get_model: Option<Adapter<GetModel>>,
    delete_vpc_link: Option<Adapter<DeleteVpcLink>>,
    update_api_key: Option<Adapter<UpdateApiKey>>,
    update_client_certificate: Option<Adapter<UpdateClientCertificate>>,
}

/// An item that produced no envelope.
enum Skip {
    /// Only this item is affected.
    Item(Error),

    /// The global configuration doesn't compile for the item's operation.
    Batch(Error),
}

/// Run every item in `input`, handing each envelope to `emit`. Item failures are reported and
/// counted. An invalid global `--select` stops the batch.
async fn process(
    config: &AdapterConfig,
    client: &dyn ApiGateway,
    confirm: &dyn Confirm,
    input: &str,
    mut emit: impl FnMut(&Envelope) -> Result<(), Error>,
) -> Result<Summary, Error> {
    let mut adapters = Adapters::default();
    let mut summary = Summary::default();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_number = index + 1;
        summary.total += 1;

        let result = match serde_json::from_str::<Item>(line) {
            Ok(item) => match invoke(config, &mut adapters, client, confirm, item)
                .instrument(tracing::debug_span!("batch", line = line_number))
                .await
            {
                Ok(envelope) => Ok(envelope),
                Err(Skip::Item(error)) => Err(error),
                Err(Skip::Batch(error)) => return Err(error),
            },
            Err(error) => Err(Error::other(format!("invalid batch item: {error}"))),
        };
        let result = result.and_then(|envelope| {
            emit(&envelope)?;
            match envelope {
                Envelope::Failed(error) => Err(error),
                _ => Ok(()),
            }
        });
        if let Err(error) = result {
            summary.failed += 1;
            print_error(&format!("line {line_number}: {error}"));
        }
    }
    Ok(summary)
}

async fn invoke(
    config: &AdapterConfig,
    adapters: &mut Adapters,
    client: &dyn ApiGateway,
    confirm: &dyn Confirm,
    item: Item,
) -> Result<Envelope, Skip> {
    let Item {
        operation,
        parameters,
        select,
    } = item;
    match operation {
        OperationName::GetModel => {
            let cached = &mut adapters.get_model;
            invoke_as(cached, config, select, client, confirm, parameters).await
        }
        OperationName::DeleteVpcLink => {
            let cached = &mut adapters.delete_vpc_link;
            invoke_as(cached, config, select, client, confirm, parameters).await
        }
        OperationName::UpdateApiKey => {
            let cached = &mut adapters.update_api_key;
            invoke_as(cached, config, select, client, confirm, parameters).await
        }
        OperationName::UpdateClientCertificate => {
            let cached = &mut adapters.update_client_certificate;
            invoke_as(cached, config, select, client, confirm, parameters).await
        }
    }
}

async fn invoke_as<O: Operation>(
    cached: &mut Option<Adapter<O>>,
    config: &AdapterConfig,
    select: Option<String>,
    client: &dyn ApiGateway,
    confirm: &dyn Confirm,
    parameters: Value,
) -> Result<Envelope, Skip> {
    let parameters = if parameters.is_null() {
        Value::Object(Default::default())
    } else {
        parameters
    };
    let params: O::Params = serde_json::from_value(parameters).map_err(|error| {
        Skip::Item(Error::other(format!(
            "invalid {} parameters: {error}",
            O::NAME
        )))
    })?;

    let envelope = match select {
        Some(select) => {
            let adapter = Adapter::<O>::new(&AdapterConfig {
                select: Some(select),
                ..config.clone()
            })
            .map_err(Skip::Item)?;
            adapter.invoke(client, confirm, params).await
        }
        None => {
            let adapter = match cached.take() {
                Some(adapter) => adapter,
                None => Adapter::<O>::new(config).map_err(Skip::Batch)?,
            };
            cached.insert(adapter).invoke(client, confirm, params).await
        }
    };
    envelope.map_err(Skip::Item)
}

async fn read_input(path: &Path) -> Result<String, Error> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .await
            .map_err(|error| Error::other(format!("couldn't read batch from STDIN: {error}")))?;
        Ok(input)
    } else {
        fs::read_to_string(path).await.map_err(|error| {
            Error::other(format!(
                "couldn't read batch `{}` due to: {error}",
                path.display()
            ))
        })
    }
}

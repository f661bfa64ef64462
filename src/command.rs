mod batch;
mod completions;
pub mod delete_vpc_link;
pub mod get_model;
pub mod update_api_key;
pub mod update_client_certificate;

use crate::{
    adapter::{Adapter, AdapterConfig, Operation},
    client::{get_client, ClientConfig},
    confirm::Interactive,
    fmt::{print_envelope, OutputFormat},
    Error,
};

pub use self::{
    delete_vpc_link::DeleteVpcLink, get_model::GetModel, update_api_key::UpdateApiKey,
    update_client_certificate::UpdateClientCertificate,
};

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    GetModel(self::get_model::Args),
    DeleteVpcLink(self::delete_vpc_link::Args),
    UpdateApiKey(self::update_api_key::Args),
    UpdateClientCertificate(self::update_client_certificate::Args),
    Batch(self::batch::Args),
    Completions(self::completions::Args),
}

/// Settings shared by every command.
#[derive(Clone, Debug)]
pub struct Context {
    pub client: ClientConfig,
    pub adapter: AdapterConfig,
    pub output: OutputFormat,
}

pub async fn main(context: Context, command: Command) -> Result<(), Error> {
    match command {
        Command::GetModel(args) => run::<GetModel>(&context, args).await,
        Command::DeleteVpcLink(args) => run::<DeleteVpcLink>(&context, args).await,
        Command::UpdateApiKey(args) => run::<UpdateApiKey>(&context, args).await,
        Command::UpdateClientCertificate(args) => {
            run::<UpdateClientCertificate>(&context, args).await
        }
        Command::Batch(args) => self::batch::main(&context, args).await,
        Command::Completions(args) => self::completions::main(args),
    }
}

async fn run<O: Operation>(context: &Context, args: O::Params) -> Result<(), Error> {
    let adapter = Adapter::<O>::new(&context.adapter)?;
    let client = get_client(&context.client).await?;
    let envelope = adapter.invoke(&client, &Interactive, args).await?;
    print_envelope(context.output, envelope)
}

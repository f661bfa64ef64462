use clap::Parser as _;

use apigw::{fmt::print_error, logging, Args};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    if let Err(error) = apigw::run(args).await {
        print_error(&error);
        std::process::exit(error.exit_code());
    }
}

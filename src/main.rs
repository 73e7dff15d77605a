mod batch;
mod config;
mod geocoder;
mod results;
mod web;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use config::Config;
use geocoder::nominatim::NominatimProvider;

#[derive(Parser, Debug)]
#[command(name = "spatia-geocoder")]
struct Cli {
    /// Free-text addresses to resolve
    addresses: Vec<String>,

    /// Serve POST /geocode over HTTP instead of resolving once and exiting
    #[arg(long)]
    serve: bool,
}

#[derive(Debug, PartialEq)]
enum Mode {
    Serve,
    Batch(Vec<String>),
}

fn mode_for(cli: Cli) -> Result<Mode, clap::Error> {
    if cli.serve {
        return Ok(Mode::Serve);
    }
    if cli.addresses.is_empty() {
        return Err(Cli::command().error(
            clap::error::ErrorKind::MissingRequiredArgument,
            "Provide at least one address, or use --serve",
        ));
    }
    Ok(Mode::Batch(cli.addresses))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env()?;

    match mode_for(Cli::parse()) {
        Err(err) => err.exit(),
        Ok(Mode::Serve) => web::start_server(config).await,
        Ok(Mode::Batch(addresses)) => {
            let provider = NominatimProvider::new()?;
            let resolved = batch::resolve_all(&provider, &addresses).await;
            let rendered = results::render_all(&resolved, config.debug);
            println!("{}", serde_json::to_string(&rendered)?);
            Ok(())
        }
    }
}

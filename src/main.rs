#![deny(warnings)]

use clap::Parser;
use color_eyre::eyre::Result;

use rfptui::{
    cli::Cli,
    config::Config,
    integration::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    if let Some(role) = args.role {
        config.default_role = role;
    }

    let mut runner = AppRunner::new(config, args.tick_rate, args.frame_rate);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}

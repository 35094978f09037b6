// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::io;

use anyhow::{Result, anyhow};
use clap::Parser;

use text_analyzer::{
    bootstrap,
    cli::{Cli, Command},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.logging.init()?;

    match cli.command() {
        Command::Serve => bootstrap::serve().await.map_err(|e| anyhow!(e)),
        Command::Invoke(args) => {
            bootstrap::invoke(&args, io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
    }
}

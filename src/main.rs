use clap::Parser;
use rh_api::cli::{Cli, execute_command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    execute_command(Cli::parse()).await
}

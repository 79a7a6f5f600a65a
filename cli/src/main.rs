use std::process::ExitCode;

use clap::Parser;
use wildfly_state_monitor::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    wildfly_state_monitor::run(cli).await
}

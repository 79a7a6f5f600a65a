use std::path::PathBuf;

use clap::{ArgAction, Parser};
use wildfly_monitor::config::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "wildfly-state-monitor",
    version,
    disable_version_flag = true,
    about = "Notify Slack about WildFly deployment state changes",
    long_about = "Polls the WildFly deployments directory for marker files (.deployed, .failed, ...) and posts a Slack notification whenever the set of markers changes."
)]
pub struct Cli {
    /// Specify config file path
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output version number
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

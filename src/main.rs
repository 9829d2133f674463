mod cli;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use macros_rs::{str, string};

#[derive(Parser)]
#[command(version = str!(cli::get_version(false)), about = "REST gateway for process manager daemons")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    #[command(alias = "up")]
    Serve,
    /// Check the gateway and upstream daemon
    Health {
        #[arg(long, default_value_t = string!("default"), help = "format output")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();

    pmg::globals::init();
    env_logger::Builder::new().filter_level(cli.verbose.log_level_filter()).init();

    match &cli.command {
        Commands::Serve => cli::serve(),
        Commands::Health { format } => cli::health(format),
    }
}

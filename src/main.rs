use clap::Parser;

use chatlens::cli::{self, CheckCommand, Cli, Commands};
use chatlens::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();

    if let Err(e) = run(args).await {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<()> {
    match args.command {
        Commands::Show(args) => cli::show::execute(args).await,
        Commands::Tenants(args) => cli::tenants::execute(args),
        Commands::Check(CheckCommand::Config(args)) => cli::check::config(args),
    }
}

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hitori solver based on simulated annealing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Anneal a puzzle until it is solved or the budget runs out
    Solve(cmd::solve::SolveArgs),
    /// Audit a grid that already carries shaded cells (negative values)
    Check(cmd::check::CheckArgs),
}

fn main() {
    // Raw matches tell user-typed values apart from defaults when merging a config file.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let sub_matches = matches.subcommand().map(|(_, m)| m);

    let result = match &cli.command {
        Commands::Solve(args) => cmd::solve::run(args, sub_matches),
        Commands::Check(args) => cmd::check::run(args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    }
}

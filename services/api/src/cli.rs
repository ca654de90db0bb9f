use crate::demo::{run_calculate, run_demo, run_divisions, CalculateArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use kpi_bonus::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "KPI Bonus Calculator",
    about = "Score KPI realizations and compute incentive bonuses from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Calculate one division's KPI scores and bonus
    Calculate(CalculateArgs),
    /// List the reference divisions and their weight checks
    Divisions,
    /// Run every reference division against sample realizations
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Calculate(args) => run_calculate(args).await,
        Command::Divisions => run_divisions(),
        Command::Demo(args) => run_demo(args),
    }
}

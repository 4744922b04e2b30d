use crate::infra::CatalogArgs;
use crate::report::{run_recommend, run_services, run_use_cases, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cloud_planner::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Cloud Planner",
    about = "Recommend AWS architectures from workload requirements",
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
    /// Compute a recommendation for one requirement and print it
    Recommend(RecommendArgs),
    /// List the service catalog grouped by category
    Services(CatalogArgs),
    /// List the supported application types
    UseCases,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Services(args) => run_services(args),
        Command::UseCases => {
            run_use_cases();
            Ok(())
        }
    }
}

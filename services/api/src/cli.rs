use crate::demo::{run_demo, run_report, DemoArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use scorecard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Maturity Scorecard",
    about = "Score questionnaire answers into criterion levels and ranked recommendations",
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
    /// Work with assessment results from the command line
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
    /// Run a scripted demo assessment against the built-in questionnaire
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// Score recorded answers against a catalog and print the report
    Report(ReportArgs),
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
        Command::Assessment {
            command: AssessmentCommand::Report(args),
        } => run_report(args),
        Command::Demo(args) => run_demo(args),
    }
}

use crate::commands::{run_matrix, run_questionnaire, run_score, MatrixArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use openness::config::AppConfig;
use openness::error::AppError;
use openness::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Openness Assessment",
    about = "Score partnership openness questionnaires and serve the scoring API",
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
    /// Print the APERTO questionnaire items
    Questionnaire,
    /// Score a Likert answer file and print dimension bands with recommendations
    Score(ScoreArgs),
    /// Place the four matrix dimensions from a Mode B answer file
    Matrix(MatrixArgs),
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

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Questionnaire => {
            run_questionnaire();
            Ok(())
        }
        Command::Score(args) => run_score(args, &config.scoring),
        Command::Matrix(args) => run_matrix(args),
    }
}

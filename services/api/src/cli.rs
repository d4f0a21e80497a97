use crate::demo::{run_demo, DemoArgs};
use crate::evaluate::{run_record_evaluation, run_transcript_screening, RecordArgs, TranscriptArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_risk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Risk Evaluator",
    about = "Evaluate loan applications and spoken transcripts, or serve the evaluation API",
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
    /// Evaluate a single application from the command line
    Evaluate {
        #[command(subcommand)]
        command: EvaluateCommand,
    },
    /// Run sample applicants and transcripts through the evaluator
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum EvaluateCommand {
    /// Price and decide a structured applicant record (JSON)
    Record(RecordArgs),
    /// Screen a speech transcript for age and income
    Transcript(TranscriptArgs),
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
        Command::Evaluate {
            command: EvaluateCommand::Record(args),
        } => run_record_evaluation(args),
        Command::Evaluate {
            command: EvaluateCommand::Transcript(args),
        } => run_transcript_screening(args),
        Command::Demo(args) => run_demo(args),
    }
}

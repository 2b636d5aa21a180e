mod commands;

use bandplot_core::domain::BandPlotError;
use clap::Parser;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();

    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let plot_error = error.as_plot_error();
            eprintln!("{}", plot_error.diagnostic_line());
            if let Some(summary_line) = plot_error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            plot_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("bandplot".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "bandplot",
    version,
    about = "Graphene band-structure plotter"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Plot k_vals.txt / eig_vals.txt from the current directory
    Plot,
}

fn dispatch_parsed(command: Option<CliCommand>) -> Result<i32, CliError> {
    match command.unwrap_or(CliCommand::Plot) {
        CliCommand::Plot => commands::run_plot_command(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(BandPlotError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_plot_error(&self) -> BandPlotError {
        match self {
            Self::Usage(message) => {
                BandPlotError::input_validation("INPUT.CLI_USAGE", message.clone())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => BandPlotError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliError, run};
    use bandplot_core::domain::BandPlotError;

    #[test]
    fn help_flag_exits_cleanly() {
        let code = run(["--help"]).expect("help should not error");
        assert_eq!(code, 0);
    }

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        let error = run(["frobnicate"]).expect_err("unknown command should fail");
        assert!(matches!(error, CliError::Usage(_)));
        assert_eq!(error.as_plot_error().exit_code(), 2);
    }

    #[test]
    fn compute_errors_keep_their_exit_code() {
        let error = CliError::Compute(BandPlotError::computation("RUN.BANDS_REINDEX", "mismatch"));
        assert_eq!(error.as_plot_error().exit_code(), 4);
    }
}

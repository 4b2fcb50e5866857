mod handlers;
mod logger;
pub mod parse;

use clap::{CommandFactory, Parser, error::ErrorKind};
pub use parse::Cli;

use crate::core::error::HistError;

/// # Errors
/// Any [`HistError`]; the binary turns it into exit code 1.
pub fn run() -> Result<(), HistError> {
    let args: Vec<_> = std::env::args_os().collect();
    if parse::wants_help(&args) {
        Cli::command().print_help()?;
        return Ok(());
    }
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(parse::usage_error(&e)),
    };
    logger::init_cli_logger(cli.debug);
    handlers::histogram(&cli)
}

use std::process::ExitCode;

fn main() -> ExitCode {
    match letter_histogram::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

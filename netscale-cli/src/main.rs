use std::process::ExitCode;

fn main() -> ExitCode {
    match netscale_cli::cli::cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "netscale failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

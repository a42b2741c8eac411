use std::process::ExitCode;

fn main() -> ExitCode {
    gramstay_cli::run()
}

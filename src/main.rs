use std::process::ExitCode;

fn main() -> ExitCode {
    match dbd_expert::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dbd: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

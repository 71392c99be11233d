use std::process::ExitCode;

use crudgen::ui::output;

fn main() -> ExitCode {
    match crudgen::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

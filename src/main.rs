use std::process::ExitCode;

use pause::{run, telemetry, TERMINATION_SIGNALS};

fn main() -> ExitCode {
    telemetry::init();

    let outcome = run(TERMINATION_SIGNALS, &mut std::io::stderr());
    ExitCode::from(outcome.exit_code())
}

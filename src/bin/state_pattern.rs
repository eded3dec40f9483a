// State Pattern demo.

use std::process::ExitCode;

use solid_patterns::runner::{report, run_demo};
use solid_patterns::state;

fn main() -> ExitCode {
    report(run_demo("state", |out| {
        state::demo(out);
        Ok(())
    }))
}

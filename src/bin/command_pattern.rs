// Command Pattern demo.

use std::process::ExitCode;

use solid_patterns::runner::{report, run_demo};
use solid_patterns::command;

fn main() -> ExitCode {
    report(run_demo("command", |out| {
        command::demo(out);
        Ok(())
    }))
}

// Strategy Pattern demo.

use std::process::ExitCode;

use solid_patterns::runner::{report, run_demo};
use solid_patterns::strategy;

fn main() -> ExitCode {
    report(run_demo("strategy", |out| {
        strategy::demo(out);
        Ok(())
    }))
}

// SOLID payments (principles violated) demo.

use std::process::ExitCode;

use solid_patterns::runner::{report, run_demo};
use solid_patterns::violation;

fn main() -> ExitCode {
    report(run_demo("violation", violation::demo))
}

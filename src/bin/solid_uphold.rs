// SOLID payments (principles upheld) demo.

use std::process::ExitCode;

use solid_patterns::runner::{report, run_demo};
use solid_patterns::payment;

fn main() -> ExitCode {
    report(run_demo("payment", |out| {
        payment::demo(out);
        Ok(())
    }))
}

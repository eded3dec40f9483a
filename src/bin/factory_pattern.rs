// Factory Method Pattern demo.

use std::process::ExitCode;

use solid_patterns::runner::{report, run_demo};
use solid_patterns::factory;

fn main() -> ExitCode {
    report(run_demo("factory", |out| {
        factory::demo(out);
        Ok(())
    }))
}

// Singleton Pattern demo.

use std::process::ExitCode;

use solid_patterns::runner::{report, run_demo};
use solid_patterns::singleton;

fn main() -> ExitCode {
    report(run_demo("singleton", |out| {
        singleton::demo(out);
        Ok(())
    }))
}

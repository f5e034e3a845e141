mod logging;

use std::io;

use nextdate::{SystemClock, Target, write_target};

pub use logging::init_logging;

/// Prints `target` for today's date to stdout.
pub fn run(target: Target) -> anyhow::Result<()> {
    init_logging();
    let mut stdout = io::stdout().lock();
    write_target(target, &SystemClock, &mut stdout)?;
    Ok(())
}

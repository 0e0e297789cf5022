/*!
 * Heap Stress - Main Entry Point
 *
 * Prints memory statistics, floods the allocator with short-lived garbage
 * from parallel work units while keeping about 1% alive, then prints the
 * statistics again. Command-line arguments are ignored.
 */

use heap_stress::report::colored_error;
use heap_stress::{init_tracing, StressResult, StressRun, SystemProbe, WorkloadConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    init_tracing();

    exit_code(run(), &mut io::stdout())
}

fn run() -> StressResult<()> {
    let probe = SystemProbe::new()?;
    let stdout = io::stdout().lock();

    StressRun::new(probe, WorkloadConfig::default()).run(stdout)?;
    Ok(())
}

/// Any error is printed in red to `out` and exits non-zero
fn exit_code<W: Write>(result: StressResult<()>, out: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Stress run failed");
            // Nowhere left to report a failed write.
            let _ = writeln!(out, "{}", colored_error(&err));
            let _ = out.flush();
            ExitCode::FAILURE
        }
    }
}

use std::io;

use bindec_cli::cli::{Args, Command, resolve_config};
use bindec_cli::observability::init_logging;
use bindec_cli::{run_bench, run_convert};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = resolve_config(&args)?;

    init_logging(&config.telemetry)?;

    tracing::debug!("Output format: {}", config.output.format);
    tracing::debug!("Recursion stack: {} bytes", config.execution.stack_size);
    tracing::debug!("Max input digits: {}", config.execution.max_input_digits);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Convert { ref binary } => {
            run_convert(&config, binary, &mut out)?;
        }
        Command::Bench { .. } => {
            tracing::info!(
                "Sweeping {} sizes from {} below {} in steps of {}",
                config.schedule.len(),
                config.schedule.start,
                config.schedule.end,
                config.schedule.step
            );
            run_bench(&config, args.output(), &mut out)?;
        }
    }

    Ok(())
}

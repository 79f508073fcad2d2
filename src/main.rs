use std::error::Error;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use euler_trajectory::cli::{self, Args};
use euler_trajectory::io::summary;
use euler_trajectory::sim;
use euler_trajectory::types::SimulationParameters;

fn main() -> ExitCode {
    let (argv, ignored) = cli::retain_known_args(std::env::args());
    for arg in &ignored {
        eprintln!("warning: ignoring unrecognized argument '{arg}'");
    }
    let args = Args::parse_from(argv);

    match run(&args.parameters(), &args.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(params: &SimulationParameters, output: &Path) -> Result<(), Box<dyn Error>> {
    params.validate()?;

    let mut out = io::stdout().lock();
    summary::write_params(&mut out, params)?;
    out.flush()?;

    let flight = sim::simulate_to_file(params, output)?;

    summary::write_summary(&mut out, &flight, output)?;
    Ok(())
}

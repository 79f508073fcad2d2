use std::path::PathBuf;

use clap::Parser;

use crate::dynamics::state::SimulationParameters;
use crate::io::dat::DEFAULT_OUTPUT;

/// Projectile motion under constant gravity, explicit Euler integration.
///
/// Writes one line per time step (t x y vx vy) to the output file and reports
/// where the projectile came back down.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "euler-trajectory", version, long_about = None)]
pub struct Args {
    /// Initial speed (m/s)
    #[arg(short = 'v', long = "vinit", value_name = "VINIT", default_value_t = 10.0, allow_negative_numbers = true)]
    pub vinit: f64,

    /// Initial angle above horizontal (degrees)
    #[arg(short = 'a', long = "theta0", value_name = "THETA0", default_value_t = 45.0, allow_negative_numbers = true)]
    pub theta0: f64,

    /// Time step for the approximation (seconds)
    #[arg(short = 't', long = "dt", value_name = "TSTEP", default_value_t = 0.01, allow_negative_numbers = true)]
    pub dt: f64,

    /// Trajectory output file
    #[arg(short = 'o', long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Args {
    pub fn parameters(&self) -> SimulationParameters {
        SimulationParameters::new(self.vinit, self.theta0, self.dt)
    }
}

const VALUE_SHORTS: [&str; 4] = ["-v", "-a", "-t", "-o"];
const VALUE_LONGS: [&str; 4] = ["--vinit", "--theta0", "--dt", "--output"];
const SWITCHES: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Split raw arguments into the ones the parser understands and the ones to
/// skip. The program name is always kept; unknown flags and stray
/// positionals go to the second list.
///
/// A value flag always takes the next token as its value, so `-v abc` reaches
/// clap and fails there with a usage error (exit status 2) instead of being
/// read as 0.
pub fn retain_known_args<I, S>(args: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut kept: Vec<String> = iter.next().into_iter().collect();
    let mut ignored = Vec::new();

    while let Some(arg) = iter.next() {
        let name = arg.split_once('=').map_or(arg.as_str(), |(n, _)| n);
        let takes_next = VALUE_SHORTS.contains(&arg.as_str()) || VALUE_LONGS.contains(&arg.as_str());

        if takes_next {
            kept.push(arg);
            kept.extend(iter.next());
        } else if SWITCHES.contains(&arg.as_str())
            || (arg.starts_with("--") && VALUE_LONGS.contains(&name))
            || is_attached_short(&arg)
        {
            kept.push(arg);
        } else {
            ignored.push(arg);
        }
    }

    (kept, ignored)
}

/// `-v20`, `-a-30`: short value flag with the value glued on.
fn is_attached_short(arg: &str) -> bool {
    arg.len() > 2 && !arg.starts_with("--") && VALUE_SHORTS.iter().any(|f| arg.starts_with(f))
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Rejected before the loop starts; no output has been produced.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The trajectory sink could not be created or written.
    #[error("cannot write trajectory to {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A caller-supplied sink failed mid-run.
    #[error("trajectory sink failed: {0}")]
    Sink(#[from] io::Error),
}

impl SimError {
    pub(crate) fn output(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> SimError {
        let path = path.into();
        move |source| SimError::Output { path, source }
    }
}

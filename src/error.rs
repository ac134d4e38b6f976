use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("File {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to launch {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    ExternalTool {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("could not read the extension choice: {0}")]
    Prompt(#[source] io::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

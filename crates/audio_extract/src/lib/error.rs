use std::{path::PathBuf, process::ExitStatus};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transcoding tool ran but reported failure
    #[error("{program} failed on {input} ({status}): {stderr}")]
    ExternalTool {
        program: &'static str,
        input: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
    #[error("{program} not found in PATH")]
    ToolNotFound {
        program: &'static str,
        #[source]
        source: which::Error,
    },
    #[error("No audio stream found in {0}")]
    NoAudioStream(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

use crate::error::Error;

/// External audio tooling used by the extractor
pub trait AudioProcessor {
    /// Codec name of the first audio stream in `input`, e.g. `aac`
    fn audio_codec(&self, input: &Path) -> Result<String, Error>;

    /// Copies the audio stream of `input` into `output` without re-encoding
    fn copy_audio(&self, input: &Path, output: &Path) -> Result<(), Error>;
}

impl<T: AudioProcessor> AudioProcessor for &T {
    fn audio_codec(&self, input: &Path) -> Result<String, Error> {
        (**self).audio_codec(input)
    }

    fn copy_audio(&self, input: &Path, output: &Path) -> Result<(), Error> {
        (**self).copy_audio(input, output)
    }
}

/// `ffprobe` / `ffmpeg` command line bindings
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    ffmpeg: PathBuf,
    ffprobe: PathBuf,
}

impl Ffmpeg {
    const FFMPEG: &str = "ffmpeg";
    const FFPROBE: &str = "ffprobe";

    pub fn new(ffmpeg: impl Into<PathBuf>, ffprobe: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
        }
    }

    /// Resolves both binaries, preferring the explicit paths over `PATH`
    pub fn locate(ffmpeg: Option<PathBuf>, ffprobe: Option<PathBuf>) -> Result<Self, Error> {
        let resolve = |explicit: Option<PathBuf>, program: &'static str| match explicit {
            Some(path) => Ok(path),
            None => which::which(program).map_err(|source| Error::ToolNotFound { program, source }),
        };

        Ok(Self::new(
            resolve(ffmpeg, Self::FFMPEG)?,
            resolve(ffprobe, Self::FFPROBE)?,
        ))
    }

    fn run(program: &'static str, mut cmd: Command, input: &Path) -> Result<Output, Error> {
        let output = cmd
            .output()
            .inspect_err(|e| tracing::error!(error = ?e, program, "Failed to spawn process"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!(program, status = %output.status, %stderr, "Process failed");
            return Err(Error::ExternalTool {
                program,
                input: input.to_path_buf(),
                status: output.status,
                stderr,
            });
        }

        Ok(output)
    }
}

/// First non-empty line of ffprobe's `nokey` output
fn parse_codec_name(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

impl AudioProcessor for Ffmpeg {
    #[tracing::instrument(skip(self))]
    fn audio_codec(&self, input: &Path) -> Result<String, Error> {
        let mut cmd = Command::new(&self.ffprobe);
        cmd.args(["-v", "error"])
            .args(["-select_streams", "a:0"])
            .args(["-show_entries", "stream=codec_name"])
            .args(["-of", "default=noprint_wrappers=1:nokey=1"])
            .arg(input);

        let output = Self::run(Self::FFPROBE, cmd, input)?;

        parse_codec_name(&String::from_utf8_lossy(&output.stdout))
            .ok_or_else(|| Error::NoAudioStream(input.to_path_buf()))
    }

    #[tracing::instrument(skip(self))]
    fn copy_audio(&self, input: &Path, output: &Path) -> Result<(), Error> {
        let mut cmd = Command::new(&self.ffmpeg);
        cmd.args(["-hide_banner", "-loglevel", "error", "-y"])
            .arg("-i")
            .arg(input)
            .arg("-vn")
            .args(["-acodec", "copy"])
            .arg(output);

        Self::run(Self::FFMPEG, cmd, input)?;
        Ok(())
    }
}

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{error::Error, ffmpeg::AudioProcessor, scanner::scan_video_files};

/// Sibling output path: `<input>.<codec>`, e.g. `talk.mp4` -> `talk.mp4.aac`
pub fn output_path_for(input: &Path, codec: &str) -> PathBuf {
    let mut output = OsString::from(input.as_os_str());
    output.push(".");
    output.push(codec);
    PathBuf::from(output)
}

/// Extracts the audio track of every video in a directory, one file at a time
#[derive(Debug)]
pub struct AudioExtractor<A: AudioProcessor> {
    processor: A,
}

impl<A: AudioProcessor> AudioExtractor<A> {
    pub fn new(processor: A) -> Self {
        Self { processor }
    }

    /// Detects the audio codec of `input` and stream-copies it to
    /// [`output_path_for`]. Returns the written path.
    #[tracing::instrument(skip(self))]
    pub fn extract(&self, input: &Path) -> Result<PathBuf, Error> {
        let codec = self.processor.audio_codec(input)?;
        let output = output_path_for(input, &codec);

        self.processor.copy_audio(input, &output)?;
        tracing::info!(output = ?output, codec = %codec, "Extracted audio");

        Ok(output)
    }

    /// Runs [`Self::extract`] over every video file in `dir`.
    /// Stops at the first failure; outputs already written are kept.
    #[tracing::instrument(skip(self))]
    pub fn extract_all(&self, dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let files = scan_video_files(dir)?;
        self.extract_files(&files)
    }

    fn extract_files(&self, files: &[PathBuf]) -> Result<Vec<PathBuf>, Error> {
        tracing::info!(count = files.len(), "Processing video files");
        files.iter().map(|file| self.extract(file)).collect()
    }
}

/// Scans `dir` and extracts every video in it. `make_processor` is only
/// called when the scan finds at least one video.
#[tracing::instrument(skip(make_processor))]
pub fn extract_dir<A, F>(dir: &Path, make_processor: F) -> Result<Vec<PathBuf>, Error>
where
    A: AudioProcessor,
    F: FnOnce() -> Result<A, Error>,
{
    let files = scan_video_files(dir)?;
    if files.is_empty() {
        tracing::info!("No video files to process");
        return Ok(Vec::new());
    }

    AudioExtractor::new(make_processor()?).extract_files(&files)
}

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use audio_extract::{AudioProcessor, Error};

/// Reports a codec per container extension and writes a stub output file
#[derive(Clone, Default)]
pub struct MockAudioProcessor {
    pub copies: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
    pub silent_file: Option<String>,
}

impl MockAudioProcessor {
    /// `file_name` has no audio stream
    pub fn silent_on(file_name: &str) -> Self {
        Self {
            silent_file: Some(file_name.to_string()),
            ..Default::default()
        }
    }
}

impl AudioProcessor for MockAudioProcessor {
    fn audio_codec(&self, input: &Path) -> Result<String, Error> {
        let file_name = input.file_name().and_then(|n| n.to_str());
        if file_name.is_some() && file_name == self.silent_file.as_deref() {
            return Err(Error::NoAudioStream(input.to_path_buf()));
        }

        let codec = match input.extension().and_then(|e| e.to_str()) {
            Some("mkv") => "opus",
            Some("flv") => "mp3",
            Some("rmvb") => "cook",
            _ => "aac",
        };
        Ok(codec.to_string())
    }

    fn copy_audio(&self, input: &Path, output: &Path) -> Result<(), Error> {
        std::fs::write(output, format!("audio of {}", input.display()))?;
        self.copies
            .lock()
            .unwrap()
            .push((input.to_path_buf(), output.to_path_buf()));
        Ok(())
    }
}

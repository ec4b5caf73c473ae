use std::path::{Path, PathBuf};

use crate::error::Error;

pub const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "avi", "flv", "rmvb", "mkv"];

/// Whether `path` carries one of [`VIDEO_EXTENSIONS`], ignoring ASCII case.
///
/// Uppercase extensions (`CLIP.MKV`) and dotfiles (`.intro.mp4`) both match.
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|video_ext| ext.eq_ignore_ascii_case(video_ext))
        })
}

/// Lists the video files directly inside `dir`, sorted by path.
/// Subdirectories are not descended into.
#[tracing::instrument]
pub fn scan_video_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_video_file(&path) {
            files.push(path);
        }
    }
    files.sort();

    tracing::debug!(count = files.len(), "Found video files");
    Ok(files)
}

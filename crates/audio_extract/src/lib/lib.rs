mod error;
mod extractor;
pub mod ffmpeg;
pub mod scanner;
pub mod tracing;

pub use error::Error;
pub use extractor::{extract_dir, output_path_for, AudioExtractor};
pub use ffmpeg::{AudioProcessor, Ffmpeg};
pub use scanner::{is_video_file, scan_video_files, VIDEO_EXTENSIONS};

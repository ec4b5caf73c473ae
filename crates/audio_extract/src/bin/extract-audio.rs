use std::path::PathBuf;

use anyhow::Context;
use audio_extract::{extract_dir, tracing::init_tracing_subscriber, Ffmpeg};
use clap::Parser;

#[derive(Parser)]
#[command(name = "extract-audio", about = "Copy the audio track out of every video in a directory")]
struct Cli {
    /// Directory to scan for mp4, avi, flv, rmvb and mkv files
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// ffmpeg binary, looked up in PATH when unset
    #[arg(long, env = "FFMPEG_PATH")]
    ffmpeg: Option<PathBuf>,

    /// ffprobe binary, looked up in PATH when unset
    #[arg(long, env = "FFPROBE_PATH")]
    ffprobe: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let (ffmpeg, ffprobe) = (cli.ffmpeg, cli.ffprobe);
    let outputs = extract_dir(&cli.dir, || Ffmpeg::locate(ffmpeg, ffprobe))
        .with_context(|| format!("Failed to extract audio in {}", cli.dir.display()))?;
    tracing::info!(count = outputs.len(), "Done");

    Ok(())
}

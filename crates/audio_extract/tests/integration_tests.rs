mod mocks;

use std::{cell::Cell, fs, path::PathBuf};

use audio_extract::{extract_dir, AudioExtractor, Error};
use mocks::audio_processor::MockAudioProcessor;
use tempfile::TempDir;

fn workdir_with(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for name in files {
        fs::write(temp_dir.path().join(name), b"video").unwrap();
    }
    temp_dir
}

// ─── Happy path ──────────────────────────────────────────────────────────────

#[test]
fn test_outputs_are_named_after_input_and_codec() {
    let workdir = workdir_with(&["a.mp4", "b.mkv", "c.flv", "d.rmvb", "readme.md"]);
    let root = workdir.path();
    let processor = MockAudioProcessor::default();
    let copies = processor.copies.clone();

    let outputs = AudioExtractor::new(processor)
        .extract_all(root)
        .expect("Extraction should succeed");

    assert_eq!(
        outputs,
        vec![
            root.join("a.mp4.aac"),
            root.join("b.mkv.opus"),
            root.join("c.flv.mp3"),
            root.join("d.rmvb.cook"),
        ]
    );
    for output in &outputs {
        assert!(output.is_file(), "{} should exist", output.display());
    }

    let copies = copies.lock().unwrap();
    assert_eq!(copies.len(), 4);
    assert_eq!(copies[0], (root.join("a.mp4"), root.join("a.mp4.aac")));
}

#[test]
fn test_empty_directory_is_ok() {
    let workdir = workdir_with(&["notes.txt"]);
    let processor = MockAudioProcessor::default();
    let copies = processor.copies.clone();

    let outputs = AudioExtractor::new(processor)
        .extract_all(workdir.path())
        .unwrap();

    assert!(outputs.is_empty());
    assert!(copies.lock().unwrap().is_empty());
}

#[test]
fn test_rerun_does_not_pick_up_its_own_outputs() {
    let workdir = workdir_with(&["a.mp4"]);
    let processor = MockAudioProcessor::default();
    let extractor = AudioExtractor::new(&processor);

    extractor.extract_all(workdir.path()).unwrap();
    let outputs = extractor.extract_all(workdir.path()).unwrap();

    assert_eq!(outputs, vec![workdir.path().join("a.mp4.aac")]);
    assert_eq!(fs::read_dir(workdir.path()).unwrap().count(), 2);
}

// ─── Tool lookup ─────────────────────────────────────────────────────────────

#[test]
fn test_extract_dir_without_videos_never_resolves_tools() {
    let workdir = workdir_with(&["notes.txt", "song.mp3"]);
    let resolved = Cell::new(false);

    let outputs = extract_dir(workdir.path(), || {
        resolved.set(true);
        Err::<MockAudioProcessor, _>(Error::NoAudioStream(PathBuf::from("unreachable")))
    })
    .expect("Empty working set should succeed without tools");

    assert!(outputs.is_empty());
    assert!(!resolved.get(), "Tools should not be looked up");
}

#[test]
fn test_extract_dir_resolves_tools_once_videos_exist() {
    let workdir = workdir_with(&["a.mp4", "b.mkv"]);
    let resolved = Cell::new(0);

    let outputs = extract_dir(workdir.path(), || {
        resolved.set(resolved.get() + 1);
        Ok(MockAudioProcessor::default())
    })
    .unwrap();

    assert_eq!(resolved.get(), 1);
    assert_eq!(
        outputs,
        vec![workdir.path().join("a.mp4.aac"), workdir.path().join("b.mkv.opus")]
    );
}

#[test]
fn test_extract_dir_surfaces_lookup_failure() {
    let workdir = workdir_with(&["a.mp4"]);

    let result = extract_dir(workdir.path(), || {
        Err::<MockAudioProcessor, _>(Error::NoAudioStream(PathBuf::from("lookup")))
    });

    assert!(result.is_err());
    assert!(!workdir.path().join("a.mp4.aac").exists());
}

// ─── Error propagation ──────────────────────────────────────────────────────

#[test]
fn test_first_failure_aborts_the_batch() {
    let workdir = workdir_with(&["a.mp4", "b.mp4", "c.mp4"]);
    let processor = MockAudioProcessor::silent_on("b.mp4");
    let copies = processor.copies.clone();

    let result = AudioExtractor::new(processor).extract_all(workdir.path());

    match result {
        Err(Error::NoAudioStream(path)) => {
            assert_eq!(path, workdir.path().join("b.mp4"));
        }
        other => panic!("Expected NoAudioStream, got {other:?}"),
    }

    let copies = copies.lock().unwrap();
    assert_eq!(
        copies.iter().map(|(input, _)| input.clone()).collect::<Vec<PathBuf>>(),
        vec![workdir.path().join("a.mp4")]
    );
    assert!(!workdir.path().join("c.mp4.aac").exists());
}

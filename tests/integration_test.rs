//! Integration tests for file-tags
//!
//! These tests drive the complete pipeline from parsed command line to
//! renamed files inside temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use file_tags::{
    CancelFlag, FileTagsError, PathError, TaggedFile,
    cli::Cli,
    commands::{self, Outcome, TagRequest},
    config::FileTagsConfig,
    output::{MemoryReporter, MessageLevel},
    ui::MockInput,
};
use tempfile::TempDir;

/// Helper function to create a file inside `dir`
fn create_test_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "test content").unwrap();
    path
}

fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Parse `args` after the program name and run the pipeline with defaults
fn run(args: &[&str], input: &MockInput) -> (Result<Outcome, FileTagsError>, MemoryReporter) {
    let cli = Cli::try_parse_from(std::iter::once("file-tags").chain(args.iter().copied())).unwrap();
    let settings = cli.settings(&FileTagsConfig::default());
    let mut reporter = MemoryReporter::new();

    let result = TagRequest::from_cli(&cli, &settings)
        .and_then(|request| commands::tag(&request, &mut reporter, input, &CancelFlag::new()));
    (result, reporter)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_add_tags_to_pictures() {
    let dir = TempDir::new().unwrap();
    let a = create_test_file(dir.path(), "Picture 002.jpg");
    let b = create_test_file(dir.path(), "Picture 003 #flowers.jpg");

    let (result, reporter) = run(
        &["add", "Flowers,flying whales,wallpaper", path_arg(&a), path_arg(&b)],
        &MockInput::default(),
    );

    assert_eq!(result.unwrap(), Outcome::Renamed(2));
    assert_eq!(
        names_in(dir.path()),
        [
            "Picture 002 #flowers #flying-whales #wallpaper.jpg",
            "Picture 003 #flowers #flying-whales #wallpaper.jpg",
        ]
    );
    assert_eq!(reporter.messages()[0], "Tags: flowers, flying-whales, wallpaper");
}

#[test]
fn test_remove_with_alias() {
    let dir = TempDir::new().unwrap();
    let a = create_test_file(dir.path(), "justfilename #1 #abc");

    let (result, _) = run(&["rm", "abc", path_arg(&a)], &MockInput::default());
    assert_eq!(result.unwrap(), Outcome::Renamed(1));
    assert_eq!(names_in(dir.path()), ["justfilename #1"]);
}

#[test]
fn test_add_then_remove_restores_name() {
    let dir = TempDir::new().unwrap();
    let a = create_test_file(dir.path(), "notes.txt");

    let (result, _) = run(&["add", "x,y", path_arg(&a)], &MockInput::default());
    assert_eq!(result.unwrap(), Outcome::Renamed(1));

    let tagged = dir.path().join("notes #x #y.txt");
    let (result, _) = run(&["remove", "x,y", path_arg(&tagged)], &MockInput::default());
    assert_eq!(result.unwrap(), Outcome::Renamed(1));
    assert_eq!(names_in(dir.path()), ["notes.txt"]);
}

#[test]
fn test_no_action_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let a = create_test_file(dir.path(), "a.txt");

    let (result, reporter) = run(&["add", "t", path_arg(&a), "--no-action"], &MockInput::default());
    assert_eq!(result.unwrap(), Outcome::Previewed);
    assert_eq!(names_in(dir.path()), ["a.txt"]);

    let preview = reporter.last_preview().unwrap();
    assert_eq!(preview.total, 1);
    assert_eq!(preview.entries[0].old_name, "a.txt");
    assert_eq!(preview.entries[0].new_name, "a #t.txt");
}

#[test]
fn test_interactive_declined() {
    let dir = TempDir::new().unwrap();
    let a = create_test_file(dir.path(), "a.txt");
    let input = MockInput::answering(false);

    let (result, _) = run(&["add", "t", path_arg(&a), "-i"], &input);
    let err = result.unwrap_err();
    assert!(matches!(err, FileTagsError::Declined));
    assert_eq!(err.exit_code(), 130);
    assert_eq!(input.prompts().len(), 1);
    assert_eq!(names_in(dir.path()), ["a.txt"]);
}

#[test]
fn test_missing_paths_abort_before_renaming() {
    let dir = TempDir::new().unwrap();
    let a = create_test_file(dir.path(), "a.txt");
    let gone = dir.path().join("gone.txt");

    let (result, reporter) = run(&["add", "t", path_arg(&a), path_arg(&gone)], &MockInput::default());
    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 1);
    match err {
        FileTagsError::Path(PathError::NotFound { missing, total }) => {
            assert_eq!(missing, [gone]);
            assert_eq!(total, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(reporter.events.is_empty());
    assert_eq!(names_in(dir.path()), ["a.txt"]);
}

#[test]
fn test_unknown_action_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let a = create_test_file(dir.path(), "a.txt");

    let (result, _) = run(&["tag", "t", path_arg(&a)], &MockInput::default());
    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("tag"));
}

#[test]
fn test_partial_batch_failure_keeps_applied_renames() {
    let dir = TempDir::new().unwrap();
    let files: Vec<PathBuf> = ["f1", "f2", "f3", "f4", "f5"]
        .iter()
        .map(|n| create_test_file(dir.path(), &format!("{n}.txt")))
        .collect();
    create_test_file(dir.path(), "f3 #x.txt");

    let mut args = vec!["add", "x"];
    args.extend(files.iter().map(|p| path_arg(p)));
    let (result, reporter) = run(&args, &MockInput::default());

    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().starts_with("While renaming file 3/5:"));
    assert_eq!(reporter.renames().len(), 2);
    assert!(reporter.messages_at(MessageLevel::Error).is_empty());
    assert_eq!(
        names_in(dir.path()),
        ["f1 #x.txt", "f2 #x.txt", "f3 #x.txt", "f3.txt", "f4.txt", "f5.txt"]
    );

    // the blocking file is gone, so a rerun finishes the batch
    fs::remove_file(dir.path().join("f3 #x.txt")).unwrap();
    let rerun: Vec<PathBuf> = names_in(dir.path())
        .iter()
        .map(|n| dir.path().join(n))
        .collect();
    let mut args = vec!["add", "x"];
    args.extend(rerun.iter().map(|p| path_arg(p)));
    let (result, _) = run(&args, &MockInput::default());
    assert_eq!(result.unwrap(), Outcome::Renamed(3));
    assert_eq!(
        names_in(dir.path()),
        ["f1 #x.txt", "f2 #x.txt", "f3 #x.txt", "f4 #x.txt", "f5 #x.txt"]
    );
}

#[test]
fn test_tagged_file_parses_existing_name() {
    let file = TaggedFile::new("/photos/justfilename #tagC #tagB #tagA");
    let tags: Vec<String> = file.tags().iter().map(ToString::to_string).collect();
    assert_eq!(tags, ["#taga", "#tagb", "#tagc"]);
    assert_eq!(file.new_name(), "justfilename #taga #tagb #tagc");
}

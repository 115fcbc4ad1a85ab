use crate::config::{ExtractionConfig, FileCollisionAction};
use crate::error::{Error, ExtractError};
use crate::extraction::*;
use crate::types::WorkDir;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a valid ZIP archive containing the given files
fn create_zip_archive(archive_path: &Path, files: &[(&str, &[u8])]) {
    let file = std::fs::File::create(archive_path).unwrap();
    let mut writer = ::zip::ZipWriter::new(file);
    let options =
        ::zip::write::FileOptions::default().compression_method(::zip::CompressionMethod::Stored);
    for (name, content) in files {
        writer.start_file(*name, options).unwrap();
        std::io::Write::write_all(&mut writer, content).unwrap();
    }
    writer.finish().unwrap();
}

/// Create a ZIP with an explicit directory entry and a nested file
fn create_zip_with_directory(archive_path: &Path) {
    let file = std::fs::File::create(archive_path).unwrap();
    let mut writer = ::zip::ZipWriter::new(file);
    let options =
        ::zip::write::FileOptions::default().compression_method(::zip::CompressionMethod::Deflated);
    writer.add_directory("images/", options).unwrap();
    writer.start_file("images/0001.png", options).unwrap();
    std::io::Write::write_all(&mut writer, b"png").unwrap();
    writer.finish().unwrap();
}

fn titanic_zip(dir: &Path) -> PathBuf {
    let path = dir.join("titanic.zip");
    create_zip_archive(
        &path,
        &[
            ("train.csv", b"PassengerId,Survived\n1,0\n"),
            ("test.csv", b"PassengerId\n892\n"),
            ("gender_submission.csv", b"PassengerId,Survived\n892,0\n"),
        ],
    );
    path
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

#[test]
fn test_detect_zip_files_with_zip() {
    let temp_dir = TempDir::new().unwrap();
    let zip_path = temp_dir.path().join("test.zip");
    std::fs::write(&zip_path, b"fake zip").unwrap();

    let result = ZipExtractor::detect_zip_files(temp_dir.path()).unwrap();
    assert_eq!(result, vec![zip_path]);
}

#[test]
fn test_detect_zip_files_ignores_other_extensions_and_dirs() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("train.csv"), b"csv").unwrap();
    std::fs::write(temp_dir.path().join("notes.7z"), b"7z").unwrap();
    std::fs::write(temp_dir.path().join("data.zip"), b"zip").unwrap();
    std::fs::create_dir(temp_dir.path().join("folder.zip")).unwrap();

    let result = ZipExtractor::detect_zip_files(temp_dir.path()).unwrap();
    assert_eq!(result, vec![temp_dir.path().join("data.zip")]);
}

#[test]
fn test_detect_zip_files_is_case_insensitive_and_sorted() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("b.ZIP"), b"zip").unwrap();
    std::fs::write(temp_dir.path().join("a.zip"), b"zip").unwrap();
    std::fs::write(temp_dir.path().join("c.Zip"), b"zip").unwrap();

    let result = ZipExtractor::detect_zip_files(temp_dir.path()).unwrap();
    let names: Vec<_> = result
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.zip", "b.ZIP", "c.Zip"]);
}

#[test]
fn test_detect_zip_files_missing_dir_is_io_error() {
    let result = ZipExtractor::detect_zip_files(Path::new("/nonexistent/kaggle-dl/dir"));
    assert!(matches!(result, Err(Error::Io(_))));
}

// ---------------------------------------------------------------------------
// Single archive extraction
// ---------------------------------------------------------------------------

#[test]
fn test_try_extract_writes_all_files() {
    let temp_dir = TempDir::new().unwrap();
    let archive = titanic_zip(temp_dir.path());

    let files = ZipExtractor::try_extract(&archive, temp_dir.path()).unwrap();

    assert_eq!(files.len(), 3);
    assert_eq!(
        std::fs::read(temp_dir.path().join("train.csv")).unwrap(),
        b"PassengerId,Survived\n1,0\n"
    );
    assert!(temp_dir.path().join("test.csv").exists());
    assert!(archive.exists(), "original archive stays in place");
}

#[test]
fn test_try_extract_creates_nested_directories() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("images.zip");
    create_zip_with_directory(&archive);

    let files = ZipExtractor::try_extract(&archive, temp_dir.path()).unwrap();

    assert_eq!(files, vec![temp_dir.path().join("images/0001.png")]);
    assert!(temp_dir.path().join("images").is_dir());
}

#[test]
fn test_try_extract_skips_traversal_entries() {
    let outer = TempDir::new().unwrap();
    let dest = outer.path().join("leaf");
    std::fs::create_dir(&dest).unwrap();
    let archive = dest.join("evil.zip");
    create_zip_archive(
        &archive,
        &[
            ("../escaped.txt", b"nope"),
            ("/abs.txt", b"nope"),
            ("safe.txt", b"ok"),
        ],
    );

    let files = ZipExtractor::try_extract(&archive, &dest).unwrap();

    assert_eq!(files, vec![dest.join("safe.txt")]);
    assert!(!outer.path().join("escaped.txt").exists());
    for entry in walkdir::WalkDir::new(outer.path()) {
        let entry = entry.unwrap();
        assert!(
            entry.path().starts_with(&dest) || entry.path() == outer.path(),
            "{} escaped the destination",
            entry.path().display()
        );
    }
}

#[test]
fn test_try_extract_corrupt_archive() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("broken.zip");
    std::fs::write(&archive, b"this is not a zip file").unwrap();

    let result = ZipExtractor::try_extract(&archive, temp_dir.path());
    match result {
        Err(Error::Extract(ExtractError::ExtractionFailed { archive: a, reason })) => {
            assert_eq!(a, archive);
            assert!(reason.contains("failed to read ZIP archive"), "{reason}");
        }
        other => panic!("expected ExtractionFailed, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Whole working directory
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_extract_all_with_no_archives_is_empty_report() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("train.csv"), b"csv").unwrap();

    let report = extract_all(&WorkDir::new(temp_dir.path()), &ExtractionConfig::default())
        .await
        .unwrap();
    assert_eq!(report, ExtractionReport::default());
}

#[tokio::test]
async fn test_extract_all_leaves_archives_in_place_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let archive = titanic_zip(temp_dir.path());
    let other = temp_dir.path().join("extra.zip");
    create_zip_archive(&other, &[("extra.txt", b"extra")]);

    let report = extract_all(&WorkDir::new(temp_dir.path()), &ExtractionConfig::default())
        .await
        .unwrap();

    assert_eq!(report.archives, vec![other.clone(), archive.clone()]);
    assert_eq!(report.extracted_files.len(), 4);
    assert!(archive.exists() && other.exists());
    assert!(temp_dir.path().join("extra.txt").exists());
}

#[tokio::test]
async fn test_extract_all_moves_archives_to_source_files() {
    let temp_dir = TempDir::new().unwrap();
    let archive = titanic_zip(temp_dir.path());
    let config = ExtractionConfig {
        source_files_dir: Some(PathBuf::from("source_files")),
        file_collision: FileCollisionAction::Rename,
    };

    let report = extract_all(&WorkDir::new(temp_dir.path()), &config)
        .await
        .unwrap();

    let moved = temp_dir.path().join("source_files").join("titanic.zip");
    assert_eq!(report.archives, vec![moved.clone()]);
    assert!(moved.exists());
    assert!(!archive.exists());
    assert!(temp_dir.path().join("train.csv").exists());
}

#[tokio::test]
async fn test_extract_all_renames_on_source_files_collision() {
    let temp_dir = TempDir::new().unwrap();
    let source_dir = temp_dir.path().join("source_files");
    std::fs::create_dir(&source_dir).unwrap();
    std::fs::write(source_dir.join("titanic.zip"), b"older copy").unwrap();
    titanic_zip(temp_dir.path());

    let config = ExtractionConfig {
        source_files_dir: Some(PathBuf::from("source_files")),
        file_collision: FileCollisionAction::Rename,
    };
    let report = extract_all(&WorkDir::new(temp_dir.path()), &config)
        .await
        .unwrap();

    assert_eq!(report.archives, vec![source_dir.join("titanic (1).zip")]);
    assert_eq!(
        std::fs::read(source_dir.join("titanic.zip")).unwrap(),
        b"older copy"
    );
}

#[tokio::test]
async fn test_extract_all_skip_collision_fails() {
    let temp_dir = TempDir::new().unwrap();
    let source_dir = temp_dir.path().join("source_files");
    std::fs::create_dir(&source_dir).unwrap();
    std::fs::write(source_dir.join("titanic.zip"), b"older copy").unwrap();
    titanic_zip(temp_dir.path());

    let config = ExtractionConfig {
        source_files_dir: Some(PathBuf::from("source_files")),
        file_collision: FileCollisionAction::Skip,
    };
    let result = extract_all(&WorkDir::new(temp_dir.path()), &config).await;

    assert!(matches!(
        result,
        Err(Error::Extract(ExtractError::FileCollision { .. }))
    ));
}

#[tokio::test]
async fn test_extract_all_stops_at_corrupt_archive() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("a_broken.zip"), b"garbage").unwrap();
    titanic_zip(temp_dir.path());

    let result = extract_all(&WorkDir::new(temp_dir.path()), &ExtractionConfig::default()).await;

    assert!(matches!(
        result,
        Err(Error::Extract(ExtractError::ExtractionFailed { .. }))
    ));
    assert!(
        !temp_dir.path().join("train.csv").exists(),
        "archives after the failing one are not touched"
    );
}

use std::fs::File;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn framepad() -> Command {
    Command::cargo_bin("framepad").expect("Failed to find framepad binary")
}

fn create_frames(directory: &Path, base_name: &str, count: usize) {
    for i in 0..count {
        File::create(directory.join(format!("{base_name}{i}.tga")))
            .expect("Failed to create test frame");
    }
}

#[test]
fn test_missing_base_filename_is_a_usage_error() {
    framepad()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<basefilename>"));
}

#[test]
fn test_renames_sequence_in_folder() {
    let temp_dir = tempdir().unwrap();
    create_frames(temp_dir.path(), "clip", 12);

    framepad()
        .arg("clip")
        .arg("--folder")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 12 files!"))
        .stdout(predicate::str::contains("Zero pad length set to 2"))
        .stdout(predicate::str::contains("Done! Renamed 12 files!"))
        .stdout(predicate::str::contains("Moving").not());

    for i in 0..12 {
        assert!(temp_dir.path().join(format!("clip{i:02}.tga")).exists());
    }
    assert!(!temp_dir.path().join("clip0.tga").exists());
}

#[test]
fn test_verbose_prints_each_rename() {
    let temp_dir = tempdir().unwrap();
    create_frames(temp_dir.path(), "clip", 11);

    framepad()
        .args(["clip", "-v", "-d"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Moving clip0.tga\t-> clip00.tga"))
        .stdout(predicate::str::contains("Moving clip10.tga\t-> clip10.tga"));
}

#[test]
fn test_defaults_to_current_directory() {
    let temp_dir = tempdir().unwrap();
    create_frames(temp_dir.path(), "movie", 11);

    framepad()
        .arg("movie")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    assert!(temp_dir.path().join("movie05.tga").exists());
}

#[test]
fn test_custom_extension() {
    let temp_dir = tempdir().unwrap();
    for i in 0..11 {
        File::create(temp_dir.path().join(format!("shot{i}.png"))).unwrap();
    }

    framepad()
        .args(["shot", "-e", ".png", "-d"])
        .arg(temp_dir.path())
        .assert()
        .success();

    assert!(temp_dir.path().join("shot00.png").exists());
}

#[test]
fn test_no_matching_files_fails() {
    let temp_dir = tempdir().unwrap();
    create_frames(temp_dir.path(), "clip", 3);

    framepad()
        .arg("movie")
        .arg("--folder")
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No files found with basename 'movie'"));

    assert!(temp_dir.path().join("clip0.tga").exists());
}

#[test]
fn test_incomplete_base_filename_fails() {
    let temp_dir = tempdir().unwrap();
    for i in 0..3 {
        File::create(temp_dir.path().join(format!("clip_a{i}.tga"))).unwrap();
    }

    framepad()
        .arg("clip")
        .arg("--folder")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"clip_a0.tga\""))
        .stdout(predicate::str::contains("\"_a0\""));
}

#[test]
fn test_missing_folder_fails() {
    let temp_dir = tempdir().unwrap();

    framepad()
        .arg("clip")
        .arg("--folder")
        .arg(temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Directory not found"));
}

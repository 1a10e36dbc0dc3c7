//! End-to-end tests for the command line surface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_platforms_lists_the_catalog() {
    Command::cargo_bin("jlink_bundler")
        .unwrap()
        .arg("platforms")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("win32")
                .and(predicate::str::contains("win64"))
                .and(predicate::str::contains("mac64"))
                .and(predicate::str::contains("linux64"))
                .and(predicate::str::contains("windows-x86_64")),
        );
}

#[test]
fn test_link_without_a_jar_fails_before_spawning_anything() {
    let workspace = tempfile::tempdir().unwrap();
    Command::cargo_bin("jlink_bundler")
        .unwrap()
        .current_dir(workspace.path())
        .env_remove("JAVA_HOME")
        .arg("link")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no application archive configured"));
}

#[test]
fn test_link_with_unknown_image_name_fails() {
    let workspace = tempfile::tempdir().unwrap();
    std::fs::write(
        workspace.path().join("jlink.toml"),
        "[[image]]\nname = \"app\"\n",
    )
    .unwrap();

    Command::cargo_bin("jlink_bundler")
        .unwrap()
        .current_dir(workspace.path())
        .args(["link", "--name", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no image definition named 'other'"));
}

//! Image pipeline tests with a scripted process runner.
//!
//! No real jlink or jdeps is spawned; the runner hands back canned outputs
//! and records every argument vector so the tests can assert on the exact
//! invocations.

use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use jlink_bundler::jlink::{Error, ImagePipeline, JavaToolchain, JlinkOptions};
use jlink_bundler::process::{ToolOutput, ToolRunner};

struct FakeRunner {
    responses: Mutex<VecDeque<ToolOutput>>,
    commands: Mutex<Vec<Vec<String>>>,
}

impl FakeRunner {
    fn new(responses: Vec<ToolOutput>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            commands: Mutex::new(Vec::new()),
        }
    }

    fn ok(stdout: &str) -> ToolOutput {
        ToolOutput {
            code: Some(0),
            stdout: stdout.as_bytes().to_vec(),
            stderr: Vec::new(),
        }
    }

    fn failed(code: i32, stderr: &str) -> ToolOutput {
        ToolOutput {
            code: Some(code),
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    fn commands(&self) -> Vec<Vec<String>> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl ToolRunner for FakeRunner {
    async fn run(&self, argv: &[String]) -> io::Result<ToolOutput> {
        self.commands.lock().unwrap().push(argv.to_vec());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected process invocation"))
    }
}

fn toolchain() -> JavaToolchain {
    JavaToolchain::from_java_home("/opt/jdk")
}

/// Writes a stand-in application jar and returns its path.
fn write_jar(dir: &Path) -> std::path::PathBuf {
    let jar = dir.join("app-all.jar");
    std::fs::write(&jar, b"application archive").unwrap();
    jar
}

#[tokio::test]
async fn test_missing_artifact_fails_before_any_process_runs() {
    let runner = FakeRunner::new(Vec::new());
    let pipeline = ImagePipeline::new("app", JlinkOptions::default(), toolchain(), &runner);

    let result = pipeline.run().await;
    assert!(matches!(result, Err(Error::MissingArtifact)));
    assert!(runner.commands().is_empty());
}

#[tokio::test]
async fn test_explicit_modules_skip_discovery() {
    let workspace = tempfile::tempdir().unwrap();
    let jar = write_jar(workspace.path());
    let options = JlinkOptions::builder()
        .artifact(&jar)
        .modules(vec!["java.base".into(), "java.logging".into()])
        .output(workspace.path().join("image"))
        .build();

    let runner = FakeRunner::new(vec![FakeRunner::ok("")]);
    let pipeline = ImagePipeline::new("Shuffleboard", options, toolchain(), &runner);
    let image = pipeline.run().await.unwrap();

    let commands = runner.commands();
    assert_eq!(commands.len(), 1, "only jlink should have run");
    assert!(commands[0][0].contains("jlink"));
    let add_modules = commands[0]
        .iter()
        .position(|argument| argument == "--add-modules")
        .unwrap();
    assert_eq!(commands[0][add_modules + 1], "java.base,java.logging");
    assert_eq!(image.modules, ["java.base", "java.logging"]);
}

#[tokio::test]
async fn test_empty_modules_use_the_discovered_set() {
    let workspace = tempfile::tempdir().unwrap();
    let jar = write_jar(workspace.path());
    let options = JlinkOptions::builder()
        .artifact(&jar)
        .output(workspace.path().join("image"))
        .build();

    let runner = FakeRunner::new(vec![
        FakeRunner::ok("   java.base\n   javafx.controls\n"),
        FakeRunner::ok(""),
    ]);
    let pipeline = ImagePipeline::new("app", options, toolchain(), &runner);
    let image = pipeline.run().await.unwrap();

    let commands = runner.commands();
    assert_eq!(commands.len(), 2);
    assert!(commands[0][0].contains("jdeps"));
    assert_eq!(commands[0][1], "--list-deps");
    let add_modules = commands[1]
        .iter()
        .position(|argument| argument == "--add-modules")
        .unwrap();
    assert_eq!(commands[1][add_modules + 1], "java.base,javafx.controls");
    assert_eq!(image.modules, ["java.base", "javafx.controls"]);
}

#[tokio::test]
async fn test_discovery_failure_aborts_before_linking() {
    let workspace = tempfile::tempdir().unwrap();
    let jar = write_jar(workspace.path());
    let options = JlinkOptions::builder()
        .artifact(&jar)
        .output(workspace.path().join("image"))
        .build();

    let runner = FakeRunner::new(vec![FakeRunner::failed(1, "Error: bad archive")]);
    let pipeline = ImagePipeline::new("app", options, toolchain(), &runner);

    let result = pipeline.run().await;
    assert!(matches!(result, Err(Error::Discovery { .. })));
    assert_eq!(runner.commands().len(), 1, "jlink must not run");
}

#[tokio::test]
async fn test_link_failure_leaves_no_application_archive() {
    let workspace = tempfile::tempdir().unwrap();
    let jar = write_jar(workspace.path());
    let output = workspace.path().join("image");
    let options = JlinkOptions::builder()
        .artifact(&jar)
        .modules(vec!["java.base".into()])
        .output(&output)
        .build();

    let runner = FakeRunner::new(vec![FakeRunner::failed(2, "Error: module not found")]);
    let pipeline = ImagePipeline::new("app", options, toolchain(), &runner);

    match pipeline.run().await {
        Err(Error::LinkFailed { code, stderr }) => {
            assert_eq!(code, Some(2));
            assert!(stderr.contains("module not found"));
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(!output.join("bin").exists());
}

#[tokio::test]
async fn test_success_copies_and_renames_the_archive() {
    let workspace = tempfile::tempdir().unwrap();
    let jar = write_jar(workspace.path());
    let output = workspace.path().join("image");
    let options = JlinkOptions::builder()
        .artifact(&jar)
        .modules(vec!["java.base".into()])
        .output(&output)
        .build();

    let runner = FakeRunner::new(vec![FakeRunner::ok("")]);
    let pipeline = ImagePipeline::new("Shuffleboard", options, toolchain(), &runner);
    let image = pipeline.run().await.unwrap();

    let copied = output.join("bin").join("shuffleboard.jar");
    assert_eq!(image.application_archive, copied);
    assert_eq!(std::fs::read(&copied).unwrap(), b"application archive");
}

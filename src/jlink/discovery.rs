//! Automatic module discovery via jdeps.
//!
//! When no modules are configured explicitly, the pipeline runs
//! `jdeps --list-deps` against the application archive and uses the module
//! set it reports. Discovery failure aborts the whole pipeline; falling back
//! to an empty module set would silently produce an image that cannot run
//! the application.

use std::path::Path;

use super::error::{Error, Result};
use crate::process::ToolRunner;

/// Runs jdeps against an application archive and returns the standard
/// library modules it needs, in the order jdeps reports them.
///
/// # Errors
///
/// Returns [`Error::Discovery`] when jdeps exits non-zero, prints something
/// other than UTF-8, or reports no platform modules at all.
pub async fn discover_modules(
    runner: &dyn ToolRunner,
    jdeps: &Path,
    artifact: &Path,
) -> Result<Vec<String>> {
    let command = vec![
        jdeps.to_string_lossy().into_owned(),
        "--list-deps".to_string(),
        artifact.to_string_lossy().into_owned(),
    ];
    log::debug!("Running {}", command.join(" "));

    let output = runner
        .run(&command)
        .await
        .map_err(|error| Error::CommandFailed {
            command: jdeps.display().to_string(),
            error,
        })?;

    if !output.success() {
        return Err(Error::Discovery {
            reason: format!(
                "jdeps exited with code {:?}: {}",
                output.code,
                output.stderr_lossy().trim()
            ),
        });
    }

    let stdout = std::str::from_utf8(&output.stdout).map_err(|_| Error::Discovery {
        reason: "jdeps produced non-UTF-8 output".to_string(),
    })?;

    let modules = parse_module_list(stdout);
    if modules.is_empty() {
        return Err(Error::Discovery {
            reason: "jdeps reported no platform modules".to_string(),
        });
    }

    log::debug!("Discovered modules: {}", modules.join(","));
    Ok(modules)
}

/// Extracts platform module names from `jdeps --list-deps` output.
///
/// Library modules are printed indented by three spaces. Lines carrying a
/// path separator name a package inside a module rather than the module
/// itself, and lines with upper-case characters are application classes;
/// both are excluded. This is a heuristic tied to the current jdeps output
/// format, kept in one place so a format change touches only this function.
fn parse_module_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.contains('/'))
        .filter(|line| *line == line.to_lowercase())
        .filter_map(|line| line.strip_prefix("   "))
        .map(|module| module.trim_end().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ToolOutput;

    use std::io;
    use std::sync::Mutex;

    use async_trait::async_trait;

    struct ScriptedRunner {
        output: ToolOutput,
        commands: Mutex<Vec<Vec<String>>>,
    }

    impl ScriptedRunner {
        fn new(code: Option<i32>, stdout: &[u8], stderr: &[u8]) -> Self {
            Self {
                output: ToolOutput {
                    code,
                    stdout: stdout.to_vec(),
                    stderr: stderr.to_vec(),
                },
                commands: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ToolRunner for ScriptedRunner {
        async fn run(&self, argv: &[String]) -> io::Result<ToolOutput> {
            self.commands.lock().unwrap().push(argv.to_vec());
            Ok(self.output.clone())
        }
    }

    const JDEPS_OUTPUT: &str = "\
app-all.jar
   JDK removed internal API
   java.base
   java.desktop/sun.awt
   java.logging
   com.example.App
";

    #[test]
    fn test_parser_keeps_indented_lowercase_module_lines() {
        assert_eq!(parse_module_list(JDEPS_OUTPUT), ["java.base", "java.logging"]);
    }

    #[test]
    fn test_parser_handles_carriage_returns() {
        assert_eq!(parse_module_list("   java.base\r\n   java.xml\r\n"), [
            "java.base",
            "java.xml"
        ]);
    }

    #[tokio::test]
    async fn test_discovery_invokes_jdeps_in_list_deps_mode() {
        let runner = ScriptedRunner::new(Some(0), JDEPS_OUTPUT.as_bytes(), b"");
        let modules = discover_modules(&runner, Path::new("/jdk/bin/jdeps"), Path::new("app.jar"))
            .await
            .unwrap();
        assert_eq!(modules, ["java.base", "java.logging"]);

        let commands = runner.commands.lock().unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0], ["/jdk/bin/jdeps", "--list-deps", "app.jar"]);
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_a_discovery_error() {
        let runner = ScriptedRunner::new(Some(1), b"", b"Error: invalid archive");
        let result =
            discover_modules(&runner, Path::new("jdeps"), Path::new("app.jar")).await;
        match result {
            Err(Error::Discovery { reason }) => assert!(reason.contains("invalid archive")),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_module_set_is_a_discovery_error() {
        let runner = ScriptedRunner::new(Some(0), b"app-all.jar\n", b"");
        let result =
            discover_modules(&runner, Path::new("jdeps"), Path::new("app.jar")).await;
        assert!(matches!(result, Err(Error::Discovery { .. })));
    }

    #[tokio::test]
    async fn test_non_utf8_output_is_a_discovery_error() {
        let runner = ScriptedRunner::new(Some(0), &[0xff, 0xfe, 0x00], b"");
        let result =
            discover_modules(&runner, Path::new("jdeps"), Path::new("app.jar")).await;
        assert!(matches!(result, Err(Error::Discovery { .. })));
    }
}

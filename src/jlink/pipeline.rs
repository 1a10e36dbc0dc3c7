//! The image-linking pipeline.
//!
//! One run performs, strictly in sequence: option validation, module
//! resolution (explicit list or jdeps discovery), the jlink invocation, and
//! the copy of the application archive into the image's `bin` directory.
//! Each step only starts after the previous one succeeded; any failure
//! aborts the run. A pipeline and its options are exclusively owned by one
//! task invocation, so runs share no mutable state.

use std::path::PathBuf;

use super::command::build_command;
use super::discovery::discover_modules;
use super::error::{Error, ErrorExt, Result};
use super::options::JlinkOptions;
use super::toolchain::JavaToolchain;
use crate::process::ToolRunner;

/// A successfully produced runtime image.
#[derive(Clone, Debug)]
pub struct LinkedImage {
    /// Root of the image directory
    pub image_dir: PathBuf,

    /// The application archive inside the image's `bin` directory
    pub application_archive: PathBuf,

    /// Modules linked into the image
    pub modules: Vec<String>,
}

/// Links a minimized runtime image for one application archive.
pub struct ImagePipeline<'r> {
    project_name: String,
    options: JlinkOptions,
    toolchain: JavaToolchain,
    runner: &'r dyn ToolRunner,
}

impl<'r> ImagePipeline<'r> {
    /// Creates a pipeline for the given project.
    ///
    /// The project name determines the name of the application archive
    /// inside the finished image.
    pub fn new(
        project_name: impl Into<String>,
        options: JlinkOptions,
        toolchain: JavaToolchain,
        runner: &'r dyn ToolRunner,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            options,
            toolchain,
            runner,
        }
    }

    /// Returns the options this pipeline will execute.
    pub fn options(&self) -> &JlinkOptions {
        &self.options
    }

    /// Runs the pipeline to completion.
    ///
    /// # Errors
    ///
    /// Fails on a missing application archive (before anything is spawned),
    /// on discovery failure, on a non-zero jlink exit (the partial output
    /// directory is left in place for inspection), and on a failed copy of
    /// the archive into the image. None of these are retried.
    pub async fn run(&self) -> Result<LinkedImage> {
        // 1. Validate the options before any external process starts.
        let artifact = self.options.validate()?.to_path_buf();

        // 2. Resolve the module set. An explicit list always wins; discovery
        //    runs only when no modules were declared.
        let modules = if self.options.modules().is_empty() {
            log::info!(
                "No modules declared, discovering from {}",
                artifact.display()
            );
            discover_modules(self.runner, &self.toolchain.jdeps(), &artifact).await?
        } else {
            self.options.modules().to_vec()
        };

        // 3. Link the image.
        let command = build_command(&self.toolchain.jlink(), &self.options, &modules);
        log::info!(
            "Linking runtime image with {} modules into {}",
            modules.len(),
            self.options.output().display()
        );
        log::debug!("Running {}", command.join(" "));
        let output = self
            .runner
            .run(&command)
            .await
            .map_err(|error| Error::CommandFailed {
                command: self.toolchain.jlink().display().to_string(),
                error,
            })?;
        if !output.success() {
            return Err(Error::LinkFailed {
                code: output.code,
                stderr: output.stderr_lossy(),
            });
        }

        // 4. Copy the application archive into the image so it is directly
        //    runnable. A failed copy fails the run; an image without the
        //    archive is not a usable result.
        let bin_dir = self.options.output().join("bin");
        tokio::fs::create_dir_all(&bin_dir)
            .await
            .fs_context("creating image bin directory", &bin_dir)?;
        let archive_name = format!("{}.jar", self.project_name.to_lowercase());
        let destination = bin_dir.join(archive_name);
        tokio::fs::copy(&artifact, &destination)
            .await
            .fs_context("copying application archive", &destination)?;

        log::info!("✓ Linked runtime image at {}", self.options.output().display());

        Ok(LinkedImage {
            image_dir: self.options.output().to_path_buf(),
            application_archive: destination,
            modules,
        })
    }
}

//! Error types for the image pipeline.
//!
//! Every variant here is fatal: no error in the pipeline is retried, and all
//! are surfaced synchronously to the invoking task.

use std::{io, path, path::PathBuf};

use thiserror::Error as DeriveError;

/// Errors returned by the image pipeline.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// No application archive was configured before execution.
    ///
    /// Raised before any external process is spawned.
    #[error("no application archive configured; set the merged application jar before linking")]
    MissingArtifact,

    /// No usable JDK was found.
    #[error("could not locate a JDK; set JAVA_HOME or put jlink on the PATH")]
    ToolchainNotFound,

    /// Child process could not be started.
    #[error("failed to run {command}: {error}")]
    CommandFailed {
        /// Tool that failed to start
        command: String,
        /// The underlying error
        error: io::Error,
    },

    /// Module discovery failed or produced unusable output.
    ///
    /// There is no fallback to an empty module set: an image linked with no
    /// modules cannot run the application.
    #[error("module discovery failed: {reason}")]
    Discovery {
        /// What went wrong, including captured diagnostics when available
        reason: String,
    },

    /// The linking tool exited with a non-zero code.
    ///
    /// The partially-produced output directory is left as-is for inspection.
    #[error("jlink exited with code {code:?}: {stderr}")]
    LinkFailed {
        /// Exit code, `None` when killed by a signal
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Operation being performed, e.g. "copying application archive"
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Path prefix stripping error while archiving the image.
    #[error("{0}")]
    Strip(#[from] path::StripPrefixError),

    /// ZIP archive creation error.
    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Adds filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase, e.g.
    /// "creating image bin directory".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

//! Error types for jlink_bundler operations.
//!
//! Configuration-time errors (platform resolution, dependency declarations)
//! live here; the image pipeline has its own error type in [`crate::jlink`]
//! and is wrapped by the top-level [`Error`].

use thiserror::Error;

/// Result type alias for jlink_bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for all jlink_bundler operations
#[derive(Error, Debug)]
pub enum Error {
    /// Platform catalog and build-platform resolution errors
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// Dependency declaration and bucket resolution errors
    #[error("Dependency error: {0}")]
    Dependency(#[from] DependencyError),

    /// Image pipeline errors
    #[error("Image error: {0}")]
    Jlink(#[from] crate::jlink::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Platform-specific errors
///
/// All of these are configuration errors and abort the owning task before
/// any external process is started.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// A name matched no member of the platform catalog
    #[error("unknown platform '{name}' (supported: win32, win64, mac64, linux64)")]
    UnknownPlatform {
        /// The name that was looked up
        name: String,
    },

    /// The operating system name matched no recognized pattern
    #[error("unsupported operating system: {os}")]
    UnsupportedOs {
        /// Reported operating system name
        os: String,
    },

    /// The processor architecture matched no recognized pattern
    #[error("unsupported processor architecture: {arch}")]
    UnsupportedArch {
        /// Reported architecture string
        arch: String,
    },

    /// OS and architecture were both recognized but name no catalog member
    #[error("no supported platform for {os} on {arch}")]
    UnsupportedPlatform {
        /// Reported operating system name
        os: String,
        /// Reported architecture string
        arch: String,
    },
}

/// Dependency declaration errors
#[derive(Error, Debug)]
pub enum DependencyError {
    /// Artifact coordinates did not parse as `group:name:version[:classifier]`
    #[error("malformed artifact coordinates '{value}': {reason}")]
    MalformedCoordinates {
        /// The coordinate string as written
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A bucket name matched no bucket on the project
    #[error("no dependency bucket named '{name}'")]
    UnknownBucket {
        /// The bucket name that was looked up
        name: String,
    },
}

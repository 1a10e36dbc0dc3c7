//! # jlink_bundler
//!
//! Platform-scoped dependency routing and minimized jlink runtime images for
//! JVM desktop applications.
//!
//! Two cooperating facilities:
//!
//! - **Platform dependency routing**: a closed catalog of native target
//!   platforms ([`platform::Platform`]), one dependency bucket per platform
//!   on a [`deps::Project`], and wiring that links the build machine's
//!   bucket into the ambient compile/runtime/test buckets.
//! - **Runtime-image packaging**: the [`jlink::ImagePipeline`] bundles a
//!   merged application jar into a minimized runtime image, discovering the
//!   required module set with jdeps when none is configured.
//!
//! ## Usage
//!
//! ```bash
//! jlink_bundler link --jar build/libs/app-all.jar --strip-debug --zip
//! jlink_bundler deps build/libs/app-all.jar
//! jlink_bundler platforms
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod deps;
pub mod error;
pub mod jlink;
pub mod platform;
pub mod process;

// Re-export main types for public API
pub use deps::{ArtifactCoordinates, Dependency, DependencyBucket, Project};
pub use error::{DependencyError, Error, PlatformError, Result};
pub use jlink::{
    CompressionLevel, Endianness, ImagePipeline, JavaToolchain, JlinkOptions,
    JlinkOptionsBuilder, LinkedImage,
};
pub use platform::Platform;
pub use process::{SystemRunner, ToolOutput, ToolRunner};

//! Configuration for one image-linking run.
//!
//! [`JlinkOptions`] is constructed through [`JlinkOptionsBuilder`] and then
//! frozen; the pipeline validates it at execution time, not at declaration
//! time, so an incomplete definition only fails once something tries to run
//! it.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::{Error, Result};

/// Default image output location, relative to the project directory.
pub const DEFAULT_OUTPUT: &str = "build/jlink";

/// Compression applied to resources in the generated image.
///
/// The numeric value passed to the linking tool is the variant's position in
/// this ordering.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompressionLevel {
    /// No compression on the generated image.
    #[default]
    None,

    /// Share constant string objects.
    ConstantStringSharing,

    /// ZIP compression on the generated image.
    Zip,
}

impl CompressionLevel {
    /// Returns the numeric value used on the command line.
    pub fn flag_value(self) -> u8 {
        match self {
            CompressionLevel::None => 0,
            CompressionLevel::ConstantStringSharing => 1,
            CompressionLevel::Zip => 2,
        }
    }

    /// Looks up a level by its numeric command-line value.
    pub fn from_flag_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(CompressionLevel::None),
            1 => Some(CompressionLevel::ConstantStringSharing),
            2 => Some(CompressionLevel::Zip),
            _ => None,
        }
    }
}

/// Byte order of the generated image.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endianness {
    /// Use the byte order of the build system. Elided from the command line.
    #[default]
    SystemDefault,

    /// Force little-endian byte order.
    Little,

    /// Force big-endian byte order.
    Big,
}

impl Endianness {
    /// Returns the command-line value, or `None` for the system default.
    pub fn flag_value(self) -> Option<&'static str> {
        match self {
            Endianness::SystemDefault => None,
            Endianness::Little => Some("little"),
            Endianness::Big => Some("big"),
        }
    }
}

/// Options describing how to link one runtime image.
///
/// One instance exists per packaging run and exclusively owns its upstream
/// artifact reference for the duration of that run.
#[derive(Clone, Debug)]
pub struct JlinkOptions {
    /// Merged application archive produced upstream. Must be set before the
    /// pipeline executes.
    artifact: Option<PathBuf>,

    /// Modules to link. These must be on the module path or included in the
    /// JDK. Empty means the module set is discovered by running jdeps
    /// against the application archive.
    modules: Vec<String>,

    /// The module path.
    module_path: String,

    /// Link service provider modules and their transitive dependencies.
    bind_services: bool,

    /// Compression of resources in the generated image.
    compression: CompressionLevel,

    /// Byte order of the generated image.
    endianness: Endianness,

    /// Suppress the fatal error when signed modular JARs are linked in. The
    /// signature-related files are not copied into the image.
    ignore_signing_information: bool,

    /// Exclude header files from the generated image.
    exclude_header_files: bool,

    /// Exclude man pages from the generated image.
    exclude_man_pages: bool,

    /// Strip debug symbols from the generated image.
    strip_debug: bool,

    /// Optimize `Class.forName` calls to constant class loads.
    optimize_class_for_name: bool,

    /// Location of the generated runtime image.
    output: PathBuf,
}

impl Default for JlinkOptions {
    fn default() -> Self {
        Self {
            artifact: None,
            modules: Vec::new(),
            module_path: String::new(),
            bind_services: false,
            compression: CompressionLevel::default(),
            endianness: Endianness::default(),
            ignore_signing_information: false,
            exclude_header_files: false,
            exclude_man_pages: false,
            strip_debug: false,
            optimize_class_for_name: false,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl JlinkOptions {
    /// Starts building a new set of options.
    pub fn builder() -> JlinkOptionsBuilder {
        JlinkOptionsBuilder::default()
    }

    /// Returns the application archive, if one was configured.
    pub fn artifact(&self) -> Option<&Path> {
        self.artifact.as_deref()
    }

    /// Returns the explicit module list. Empty means discover.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Returns the module path string.
    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    /// Returns whether service provider modules are linked.
    pub fn bind_services(&self) -> bool {
        self.bind_services
    }

    /// Returns the compression level.
    pub fn compression(&self) -> CompressionLevel {
        self.compression
    }

    /// Returns the byte order selection.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Returns whether signed-module errors are suppressed.
    pub fn ignore_signing_information(&self) -> bool {
        self.ignore_signing_information
    }

    /// Returns whether header files are excluded.
    pub fn exclude_header_files(&self) -> bool {
        self.exclude_header_files
    }

    /// Returns whether man pages are excluded.
    pub fn exclude_man_pages(&self) -> bool {
        self.exclude_man_pages
    }

    /// Returns whether debug symbols are stripped.
    pub fn strip_debug(&self) -> bool {
        self.strip_debug
    }

    /// Returns whether reflective class loads are optimized.
    pub fn optimize_class_for_name(&self) -> bool {
        self.optimize_class_for_name
    }

    /// Returns the image output location.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Checks that the options are executable and returns the application
    /// archive path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArtifact`] when no archive was configured.
    /// Enforced when the pipeline runs, before any external process starts.
    pub fn validate(&self) -> Result<&Path> {
        self.artifact.as_deref().ok_or(Error::MissingArtifact)
    }
}

/// Builder for [`JlinkOptions`].
///
/// All fields are optional at build time; the missing-artifact check happens
/// when the pipeline executes.
#[derive(Debug, Default)]
pub struct JlinkOptionsBuilder {
    options: JlinkOptions,
}

impl JlinkOptionsBuilder {
    /// Sets the merged application archive to package.
    pub fn artifact(mut self, artifact: impl Into<PathBuf>) -> Self {
        self.options.artifact = Some(artifact.into());
        self
    }

    /// Sets the explicit module list. An empty list keeps discovery enabled.
    pub fn modules(mut self, modules: Vec<String>) -> Self {
        self.options.modules = modules;
        self
    }

    /// Sets the module path.
    pub fn module_path(mut self, module_path: impl Into<String>) -> Self {
        self.options.module_path = module_path.into();
        self
    }

    /// Links service provider modules and their dependencies.
    pub fn bind_services(mut self, bind_services: bool) -> Self {
        self.options.bind_services = bind_services;
        self
    }

    /// Sets the compression level.
    pub fn compression(mut self, compression: CompressionLevel) -> Self {
        self.options.compression = compression;
        self
    }

    /// Sets the byte order of the generated image.
    pub fn endianness(mut self, endianness: Endianness) -> Self {
        self.options.endianness = endianness;
        self
    }

    /// Suppresses the fatal error for signed modular JARs.
    pub fn ignore_signing_information(mut self, ignore: bool) -> Self {
        self.options.ignore_signing_information = ignore;
        self
    }

    /// Excludes header files from the generated image.
    pub fn exclude_header_files(mut self, exclude: bool) -> Self {
        self.options.exclude_header_files = exclude;
        self
    }

    /// Excludes man pages from the generated image.
    pub fn exclude_man_pages(mut self, exclude: bool) -> Self {
        self.options.exclude_man_pages = exclude;
        self
    }

    /// Strips debug symbols from the generated image.
    pub fn strip_debug(mut self, strip: bool) -> Self {
        self.options.strip_debug = strip;
        self
    }

    /// Optimizes `Class.forName` calls to constant class loads.
    pub fn optimize_class_for_name(mut self, optimize: bool) -> Self {
        self.options.optimize_class_for_name = optimize;
        self
    }

    /// Sets the image output location.
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.options.output = output.into();
        self
    }

    /// Freezes the options.
    pub fn build(self) -> JlinkOptions {
        self.options
    }
}

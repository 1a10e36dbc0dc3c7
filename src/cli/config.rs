//! Image definitions loaded from a TOML config file.
//!
//! A config file holds one `[[image]]` table per image definition:
//!
//! ```toml
//! [[image]]
//! name = "shuffleboard"
//! jar = "build/libs/shuffleboard-all.jar"
//! modules = ["java.base", "javafx.controls"]
//! strip_debug = true
//! compression = "zip"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::jlink::{CompressionLevel, Endianness, JlinkOptions, JlinkOptionsBuilder};

/// Contents of a bundler config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundlerConfig {
    /// Image definitions, selected by name.
    #[serde(default, rename = "image")]
    pub images: Vec<ImageConfig>,
}

impl BundlerConfig {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Returns the image definition with the given name.
    pub fn image(&self, name: &str) -> Option<&ImageConfig> {
        self.images.iter().find(|image| image.name == name)
    }
}

/// One named image definition.
///
/// Fields mirror the `link` subcommand's flags; flags given on the command
/// line override the file values.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageConfig {
    /// Name used to select this definition.
    pub name: String,

    /// Merged application archive to package.
    pub jar: Option<PathBuf>,

    /// Modules to link; empty keeps discovery enabled.
    #[serde(default)]
    pub modules: Vec<String>,

    /// The module path.
    #[serde(default)]
    pub module_path: String,

    /// Link service provider modules and their dependencies.
    #[serde(default)]
    pub bind_services: bool,

    /// Compression level: `none`, `constant-string-sharing`, or `zip`.
    #[serde(default)]
    pub compression: CompressionLevel,

    /// Byte order: `system-default`, `little`, or `big`.
    #[serde(default)]
    pub endian: Endianness,

    /// Suppress the fatal error for signed modular JARs.
    #[serde(default)]
    pub ignore_signing_information: bool,

    /// Exclude header files from the image.
    #[serde(default)]
    pub no_header_files: bool,

    /// Exclude man pages from the image.
    #[serde(default)]
    pub no_man_pages: bool,

    /// Strip debug symbols from the image.
    #[serde(default)]
    pub strip_debug: bool,

    /// Optimize `Class.forName` calls to constant class loads.
    #[serde(default)]
    pub class_for_name: bool,

    /// Image output location.
    pub output: Option<PathBuf>,
}

impl ImageConfig {
    /// Starts an options builder seeded with this definition.
    pub fn to_builder(&self) -> JlinkOptionsBuilder {
        let mut builder = JlinkOptions::builder()
            .modules(self.modules.clone())
            .module_path(self.module_path.clone())
            .bind_services(self.bind_services)
            .compression(self.compression)
            .endianness(self.endian)
            .ignore_signing_information(self.ignore_signing_information)
            .exclude_header_files(self.no_header_files)
            .exclude_man_pages(self.no_man_pages)
            .strip_debug(self.strip_debug)
            .optimize_class_for_name(self.class_for_name);
        if let Some(jar) = &self.jar {
            builder = builder.artifact(jar);
        }
        if let Some(output) = &self.output {
            builder = builder.output(output);
        }
        builder
    }
}

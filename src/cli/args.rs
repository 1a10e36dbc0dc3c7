//! Command line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Platform dependency routing and jlink runtime images for JVM applications
#[derive(Parser, Debug)]
#[command(
    name = "jlink_bundler",
    version,
    about = "Link minimized runtime images for JVM desktop applications",
    long_about = "Bundle a merged application jar into a minimized runtime image.

Usage:
  jlink_bundler link --jar build/libs/app-all.jar --strip-debug
  jlink_bundler link --name shuffleboard --zip
  jlink_bundler deps build/libs/app-all.jar
  jlink_bundler platforms"
)]
pub struct Args {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Link a minimized runtime image for an application jar
    Link(LinkArgs),

    /// Print the modules an application jar needs
    Deps(DepsArgs),

    /// Print the platform catalog and its artifact classifiers
    Platforms,
}

/// Arguments for the `link` subcommand
#[derive(clap::Args, Debug)]
pub struct LinkArgs {
    /// Merged application jar to package
    #[arg(long, value_name = "PATH")]
    pub jar: Option<PathBuf>,

    /// Image definition to read from the config file
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Config file with [[image]] definitions
    #[arg(long, value_name = "PATH", default_value = "jlink.toml")]
    pub config: PathBuf,

    /// Module to link (repeatable); none means discover with jdeps
    #[arg(long = "module", value_name = "MODULE")]
    pub modules: Vec<String>,

    /// The module path
    #[arg(long, value_name = "PATH")]
    pub module_path: Option<String>,

    /// Link service provider modules and their dependencies
    #[arg(long)]
    pub bind_services: bool,

    /// Compression level: 0 none, 1 constant-string sharing, 2 zip
    #[arg(long, value_name = "LEVEL")]
    pub compress: Option<u8>,

    /// Byte order of the image: little or big
    #[arg(long, value_name = "ORDER")]
    pub endian: Option<String>,

    /// Suppress the fatal error for signed modular JARs
    #[arg(long)]
    pub ignore_signing_information: bool,

    /// Exclude header files from the image
    #[arg(long)]
    pub no_header_files: bool,

    /// Exclude man pages from the image
    #[arg(long)]
    pub no_man_pages: bool,

    /// Strip debug symbols from the image
    #[arg(long)]
    pub strip_debug: bool,

    /// Optimize Class.forName calls to constant class loads
    #[arg(long)]
    pub class_for_name: bool,

    /// Image output directory
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// JDK to use; defaults to JAVA_HOME or jlink on the PATH
    #[arg(long, env = "JAVA_HOME", value_name = "DIR")]
    pub java_home: Option<PathBuf>,

    /// Project name for the renamed jar inside the image; defaults to the
    /// jar file stem
    #[arg(long, value_name = "NAME")]
    pub project_name: Option<String>,

    /// Pack the finished image into a zip next to the output directory
    #[arg(long)]
    pub zip: bool,
}

/// Arguments for the `deps` subcommand
#[derive(clap::Args, Debug)]
pub struct DepsArgs {
    /// Application jar to analyze
    #[arg(value_name = "JAR")]
    pub jar: PathBuf,

    /// JDK to use; defaults to JAVA_HOME or jlink on the PATH
    #[arg(long, env = "JAVA_HOME", value_name = "DIR")]
    pub java_home: Option<PathBuf>,
}

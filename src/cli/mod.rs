//! Command line interface for jlink_bundler.
//!
//! Thin wiring only: argument parsing, config loading, and dispatch into the
//! library. Exit codes are returned to `main` rather than calling
//! `process::exit` from here.

mod args;
mod config;

pub use args::{Args, Command, DepsArgs, LinkArgs};
pub use config::{BundlerConfig, ImageConfig};

use anyhow::anyhow;

use crate::error::Result;
use crate::jlink::{
    self, CompressionLevel, Endianness, ImagePipeline, JavaToolchain, JlinkOptions,
};
use crate::platform::Platform;
use crate::process::SystemRunner;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    match args.command {
        Command::Link(link_args) => link(link_args).await,
        Command::Deps(deps_args) => deps(deps_args).await,
        Command::Platforms => platforms(),
    }
}

/// Runs the image pipeline for one image definition.
async fn link(args: LinkArgs) -> Result<i32> {
    let options = resolve_options(&args)?;

    // Fail a missing jar before looking for a JDK; nothing external should
    // start for an unconfigured image.
    options.validate()?;

    let project_name = args
        .project_name
        .clone()
        .or_else(|| {
            options
                .artifact()
                .and_then(|artifact| artifact.file_stem())
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "app".to_string());

    let toolchain = toolchain_for(args.java_home.as_deref())?;
    let runner = SystemRunner;
    let pipeline = ImagePipeline::new(&project_name, options, toolchain, &runner);
    let image = pipeline.run().await?;

    println!("Linked {} modules into {}", image.modules.len(), image.image_dir.display());
    println!("Application archive: {}", image.application_archive.display());

    if args.zip {
        let destination = image.image_dir.with_extension("zip");
        jlink::zip_image(&image.image_dir, &destination)?;
        println!("Image archive: {}", destination.display());
    }

    Ok(0)
}

/// Prints the modules an application jar needs, one per line.
async fn deps(args: DepsArgs) -> Result<i32> {
    let toolchain = toolchain_for(args.java_home.as_deref())?;
    let runner = SystemRunner;
    let modules = jlink::discover_modules(&runner, &toolchain.jdeps(), &args.jar).await?;
    for module in &modules {
        println!("{module}");
    }
    Ok(0)
}

/// Prints the platform catalog with all three classifier schemes.
fn platforms() -> Result<i32> {
    println!(
        "{:<10} {:<16} {:<16} {}",
        "platform", "wpilib", "javacpp", "javafx"
    );
    for platform in Platform::ALL {
        println!(
            "{:<10} {:<16} {:<16} {}",
            platform.name(),
            platform.wpilib_classifier(),
            platform.javacpp_classifier(),
            platform.javafx_classifier()
        );
    }
    Ok(0)
}

/// Builds the effective options: config file values first, flags on top.
fn resolve_options(args: &LinkArgs) -> Result<JlinkOptions> {
    let mut builder = match load_image_config(args)? {
        Some(image) => image.to_builder(),
        None => JlinkOptions::builder(),
    };

    if let Some(jar) = &args.jar {
        builder = builder.artifact(jar);
    }
    if !args.modules.is_empty() {
        builder = builder.modules(args.modules.clone());
    }
    if let Some(module_path) = &args.module_path {
        builder = builder.module_path(module_path.clone());
    }
    if args.bind_services {
        builder = builder.bind_services(true);
    }
    if let Some(level) = args.compress {
        let compression = CompressionLevel::from_flag_value(level)
            .ok_or_else(|| anyhow!("invalid compression level {level}, expected 0, 1, or 2"))?;
        builder = builder.compression(compression);
    }
    if let Some(endian) = &args.endian {
        let endianness = match endian.as_str() {
            "little" => Endianness::Little,
            "big" => Endianness::Big,
            other => return Err(anyhow!("invalid byte order '{other}', expected little or big").into()),
        };
        builder = builder.endianness(endianness);
    }
    if args.ignore_signing_information {
        builder = builder.ignore_signing_information(true);
    }
    if args.no_header_files {
        builder = builder.exclude_header_files(true);
    }
    if args.no_man_pages {
        builder = builder.exclude_man_pages(true);
    }
    if args.strip_debug {
        builder = builder.strip_debug(true);
    }
    if args.class_for_name {
        builder = builder.optimize_class_for_name(true);
    }
    if let Some(output) = &args.output {
        builder = builder.output(output);
    }

    Ok(builder.build())
}

/// Loads the selected image definition, if any.
///
/// With `--name` the config file must exist and contain that definition.
/// Without it, a present config file contributes its first definition and a
/// missing one is simply skipped.
fn load_image_config(args: &LinkArgs) -> Result<Option<ImageConfig>> {
    if !args.config.exists() {
        if args.name.is_some() {
            return Err(anyhow!("config file {} not found", args.config.display()).into());
        }
        return Ok(None);
    }
    let config = BundlerConfig::load(&args.config)?;
    match &args.name {
        Some(name) => match config.image(name) {
            Some(image) => Ok(Some(image.clone())),
            None => Err(anyhow!(
                "no image definition named '{name}' in {}",
                args.config.display()
            )
            .into()),
        },
        None => Ok(config.images.first().cloned()),
    }
}

fn toolchain_for(java_home: Option<&std::path::Path>) -> Result<JavaToolchain> {
    match java_home {
        Some(home) => Ok(JavaToolchain::from_java_home(home)),
        None => Ok(JavaToolchain::detect()?),
    }
}
